// Legacy Japanese text encoding

use std::io::Read;
use std::path::Path;

use encoding_rs::SHIFT_JIS;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a file and decode it to UTF-8.
///
/// Valid UTF-8 (with or without BOM) is taken as-is; anything else is decoded
/// as Shift_JIS, the encoding the reservation system and the insurer export.
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file =
        std::fs::File::open(path).map_err(|e| format!("cannot open {}: {e}", path.display()))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Ok(decode(bytes))
}

pub fn decode(bytes: Vec<u8>) -> String {
    let bytes = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_vec(),
        None => bytes,
    };

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, had_errors) = SHIFT_JIS.decode_without_bom_handling(&bytes);
            if had_errors {
                log::warn!("input contains bytes that are not valid Shift_JIS; replaced with U+FFFD");
            }
            decoded.into_owned()
        }
    }
}

/// Encode UTF-8 text to Shift_JIS for the submission file.
///
/// Characters with no Shift_JIS mapping are written as HTML numeric
/// character references, as encoding_rs does for legacy encoders.
pub fn encode(text: &str) -> Vec<u8> {
    let (encoded, _, had_unmappable) = SHIFT_JIS.encode(text);
    if had_unmappable {
        log::warn!("output contains characters with no Shift_JIS mapping");
    }
    encoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn shift_jis_decoded() {
        let (sjis, _, _) = SHIFT_JIS.encode("受診者名\t性別");
        assert_eq!(decode(sjis.into_owned()), "受診者名\t性別");
    }

    #[test]
    fn utf8_passthrough_and_bom_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("生年月日".as_bytes());
        assert_eq!(decode(bytes), "生年月日");
        assert_eq!(decode(b"abc".to_vec()), "abc");
    }

    #[test]
    fn encode_round_trips_through_decode() {
        let bytes = encode("一般健診＋付加,ｺｰｽ区分ｺｰﾄﾞ");
        assert!(String::from_utf8(bytes.clone()).is_err());
        assert_eq!(decode(bytes), "一般健診＋付加,ｺｰｽ区分ｺｰﾄﾞ");
    }

    #[test]
    fn read_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = read_file_as_utf8(&path).unwrap_err();
        assert!(err.contains("nope.txt"), "{err}");
    }

    #[test]
    fn read_shift_jis_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.txt");
        fs::write(&path, encode("所属名１\t受診者名\n総務部\t山田\n")).unwrap();
        assert_eq!(read_file_as_utf8(&path).unwrap(), "所属名１\t受診者名\n総務部\t山田\n");
    }
}
