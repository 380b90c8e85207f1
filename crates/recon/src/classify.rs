/// Header label that only the insurer's result export carries.
pub const INSURER_SIGNATURE: &str = "保険者番号（支部コード）";

/// Which of the two declared files is the insurer result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrder {
    InsurerFirst,
    LedgerFirst,
}

/// Files (or tables, or texts) assigned to their roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roles<T> {
    pub insurer: T,
    pub ledger: T,
}

impl FileOrder {
    pub fn assign<T>(self, first: T, second: T) -> Roles<T> {
        match self {
            Self::InsurerFirst => Roles { insurer: first, ledger: second },
            Self::LedgerFirst => Roles { insurer: second, ledger: first },
        }
    }
}

impl std::fmt::Display for FileOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsurerFirst => write!(f, "insurer_first"),
            Self::LedgerFirst => write!(f, "ledger_first"),
        }
    }
}

/// Decide roles from the first-declared file's header row.
///
/// Never fails: a header without the signature makes the first file the
/// ledger, whatever the second file holds.
pub fn classify(first_header: &[String], signature: &str) -> FileOrder {
    if first_header.iter().any(|label| label == signature) {
        FileOrder::InsurerFirst
    } else {
        FileOrder::LedgerFirst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn signature_marks_insurer() {
        let h = header(&[INSURER_SIGNATURE, "記号", "番号"]);
        assert_eq!(classify(&h, INSURER_SIGNATURE), FileOrder::InsurerFirst);
    }

    #[test]
    fn no_signature_means_ledger_first() {
        let h = header(&["所属名１\t受診者名\t性別"]);
        assert_eq!(classify(&h, INSURER_SIGNATURE), FileOrder::LedgerFirst);
        assert_eq!(classify(&[], INSURER_SIGNATURE), FileOrder::LedgerFirst);
    }

    #[test]
    fn assignment_is_order_independent() {
        let insurer_header = header(&[INSURER_SIGNATURE]);
        let ledger_header = header(&["所属名１"]);

        let forward = classify(&insurer_header, INSURER_SIGNATURE).assign("k.csv", "n.txt");
        let reverse = classify(&ledger_header, INSURER_SIGNATURE).assign("n.txt", "k.csv");
        assert_eq!(forward, reverse);
        assert_eq!(forward.insurer, "k.csv");
        assert_eq!(forward.ledger, "n.txt");
    }
}
