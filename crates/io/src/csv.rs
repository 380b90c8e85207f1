// Delimited text import/export

use std::path::Path;

use kenpo_recon::RawTable;
use serde::Serialize;

use crate::text::{encode, read_file_as_utf8};

/// Read a Shift_JIS (or UTF-8) delimited file into a table.
pub fn import(path: &Path, delimiter: u8) -> Result<RawTable, String> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content, delimiter).map_err(|e| format!("{}: {e}", path.display()))
}

/// Parse decoded text into a table. Rows may be ragged; [`RawTable`] squares
/// them against the header.
pub fn import_from_string(content: &str, delimiter: u8) -> Result<RawTable, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(RawTable::from_rows(rows))
}

/// First row only, used to tell the two input files apart before either is
/// fully parsed.
pub fn header_from_string(content: &str, delimiter: u8) -> Result<Vec<String>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    match reader.records().next() {
        Some(record) => {
            let record = record.map_err(|e| e.to_string())?;
            Ok(record.iter().map(|field| field.to_string()).collect())
        }
        None => Ok(Vec::new()),
    }
}

/// Serialize records without a header row, CRLF line endings, Shift_JIS.
///
/// Returns the number of records written.
pub fn export<R: Serialize>(records: &[R], path: &Path, delimiter: u8) -> Result<usize, String> {
    let bytes = export_to_bytes(records, delimiter)?;
    std::fs::write(path, bytes).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    Ok(records.len())
}

pub fn export_to_bytes<R: Serialize>(records: &[R], delimiter: u8) -> Result<Vec<u8>, String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record).map_err(|e| e.to_string())?;
    }

    let utf8 = writer.into_inner().map_err(|e| e.to_string())?;
    let utf8 = String::from_utf8(utf8).map_err(|e| e.to_string())?;
    Ok(encode(&utf8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::decode;
    use kenpo_recon::EligibilityRecord;
    use std::fs;
    use tempfile::tempdir;

    fn record(symbol: &str) -> EligibilityRecord {
        EligibilityRecord {
            insurer_number: "01130012".into(),
            symbol: symbol.into(),
            card_number: "0000345".into(),
            branch: "00",
            birth_date: "19890401".into(),
            visit_date: "20240401".into(),
            course: "1",
        }
    }

    #[test]
    fn tab_ledger_with_trailing_delimiter() {
        let table = import_from_string("所属名１\t受診者名\t\n総務部\t山田\t\n", b'\t').unwrap();
        assert_eq!(table.header(), &["所属名１", "受診者名"]);
        assert_eq!(table.data_rows()[0], vec!["総務部", "山田"]);
    }

    #[test]
    fn quoted_comma_field() {
        let table = import_from_string("a,b\n\"x,y\",z\n", b',').unwrap();
        assert_eq!(table.data_rows()[0], vec!["x,y", "z"]);
    }

    #[test]
    fn header_probe_reads_first_row_only() {
        let header = header_from_string("保険者番号（支部コード）,記号\n1,2\n", b',').unwrap();
        assert_eq!(header, vec!["保険者番号（支部コード）", "記号"]);
        assert!(header_from_string("", b',').unwrap().is_empty());
    }

    #[test]
    fn export_crlf_no_header() {
        let bytes = export_to_bytes(&[record("00000012"), record("00000013")], b',').unwrap();
        assert_eq!(
            decode(bytes),
            "01130012,00000012,0000345,00,19890401,20240401,1\r\n\
             01130012,00000013,0000345,00,19890401,20240401,1\r\n"
        );
    }

    #[test]
    fn export_empty_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let written = export::<EligibilityRecord>(&[], &path, b',').unwrap();
        assert_eq!(written, 0);
        assert!(fs::read(&path).unwrap().is_empty());
    }

    #[test]
    fn import_export_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        export(&[record("00000012")], &path, b',').unwrap();

        let table = import(&path, b',').unwrap();
        assert_eq!(
            table.header(),
            &["01130012", "00000012", "0000345", "00", "19890401", "20240401", "1"]
        );
    }
}
