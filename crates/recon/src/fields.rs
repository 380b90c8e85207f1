use std::collections::BTreeMap;

use crate::error::CheckError;
use crate::model::RawTable;

// ---------------------------------------------------------------------------
// Logical fields
// ---------------------------------------------------------------------------

/// Columns the engine knows by name. Each maps to one exact header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalField {
    InsurerNumber,
    Symbol,
    CardNumber,
    BirthDate,
    VisitDate,
    CourseCode,
    Department,
    PatientName,
    Sex,
}

impl LogicalField {
    pub const ALL: [LogicalField; 9] = [
        Self::InsurerNumber,
        Self::Symbol,
        Self::CardNumber,
        Self::BirthDate,
        Self::VisitDate,
        Self::CourseCode,
        Self::Department,
        Self::PatientName,
        Self::Sex,
    ];

    /// Header label as exported by the reservation system.
    pub fn label(self) -> &'static str {
        match self {
            Self::InsurerNumber => "保険者番号",
            Self::Symbol => "健康保険記号",
            Self::CardNumber => "健康保険番号",
            Self::BirthDate => "生年月日",
            Self::VisitDate => "受診日",
            Self::CourseCode => "ｺｰｽ区分ｺｰﾄﾞ",
            Self::Department => "所属名１",
            Self::PatientName => "受診者名",
            Self::Sex => "性別",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }
}

impl std::fmt::Display for LogicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Columns the single-file submission needs.
pub const ELIGIBILITY_FIELDS: &[LogicalField] = &[
    LogicalField::InsurerNumber,
    LogicalField::Symbol,
    LogicalField::CardNumber,
    LogicalField::BirthDate,
    LogicalField::VisitDate,
    LogicalField::CourseCode,
];

/// Columns the ledger must carry for the two-file join.
pub const LEDGER_FIELDS: &[LogicalField] = &[
    LogicalField::Department,
    LogicalField::PatientName,
    LogicalField::Sex,
    LogicalField::Symbol,
    LogicalField::CardNumber,
];

// ---------------------------------------------------------------------------
// Column index
// ---------------------------------------------------------------------------

/// Logical field → column position for one table. Built once, read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: BTreeMap<LogicalField, usize>,
}

impl ColumnIndex {
    /// Scan a header row for every known label. A label that appears twice
    /// resolves to its last occurrence.
    pub fn scan(header: &[String]) -> Self {
        let mut positions = BTreeMap::new();
        for (pos, label) in header.iter().enumerate() {
            if let Some(field) = LogicalField::from_label(label) {
                positions.insert(field, pos);
            }
        }
        Self { positions }
    }

    pub fn get(&self, field: LogicalField) -> Option<usize> {
        self.positions.get(&field).copied()
    }

    /// Required fields that did not resolve, in `required` order.
    pub fn missing(&self, required: &[LogicalField]) -> Vec<LogicalField> {
        required
            .iter()
            .copied()
            .filter(|f| !self.positions.contains_key(f))
            .collect()
    }

    /// The field's cell in `row`, or `""` when unresolved or out of range.
    pub fn value<'r>(&self, row: &'r [String], field: LogicalField) -> &'r str {
        self.get(field)
            .and_then(|pos| row.get(pos))
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}

/// Resolve `required` against the table's header row.
///
/// Fails with every missing field listed, so the caller can report each one.
pub fn resolve(
    table: &RawTable,
    required: &[LogicalField],
    table_name: &'static str,
) -> Result<ColumnIndex, CheckError> {
    let index = ColumnIndex::scan(table.header());
    let missing = index.missing(required);
    if missing.is_empty() {
        Ok(index)
    } else {
        Err(CheckError::MissingColumns {
            table: table_name,
            fields: missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_in_any_column_order() {
        let table = RawTable::from_rows(vec![header(&[
            "受診日",
            "ｺｰｽ区分ｺｰﾄﾞ",
            "氏名",
            "生年月日",
            "健康保険番号",
            "健康保険記号",
            "保険者番号",
        ])]);
        let index = resolve(&table, ELIGIBILITY_FIELDS, "ledger").unwrap();
        assert_eq!(index.get(LogicalField::VisitDate), Some(0));
        assert_eq!(index.get(LogicalField::CourseCode), Some(1));
        assert_eq!(index.get(LogicalField::BirthDate), Some(3));
        assert_eq!(index.get(LogicalField::CardNumber), Some(4));
        assert_eq!(index.get(LogicalField::Symbol), Some(5));
        assert_eq!(index.get(LogicalField::InsurerNumber), Some(6));
    }

    #[test]
    fn every_missing_field_reported() {
        let table = RawTable::from_rows(vec![header(&["保険者番号", "健康保険記号", "受診日"])]);
        let err = resolve(&table, ELIGIBILITY_FIELDS, "ledger").unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &[
                LogicalField::CardNumber,
                LogicalField::BirthDate,
                LogicalField::CourseCode,
            ]
        );
        let msg = err.to_string();
        assert!(msg.contains("健康保険番号"), "{msg}");
        assert!(msg.contains("生年月日"), "{msg}");
    }

    #[test]
    fn empty_table_misses_everything() {
        let err = resolve(&RawTable::default(), LEDGER_FIELDS, "ledger").unwrap_err();
        assert_eq!(err.missing_fields(), LEDGER_FIELDS);
    }

    #[test]
    fn duplicate_label_resolves_to_last() {
        let index = ColumnIndex::scan(&header(&["性別", "x", "性別"]));
        assert_eq!(index.get(LogicalField::Sex), Some(2));
    }

    #[test]
    fn value_is_blank_when_unresolved() {
        let index = ColumnIndex::scan(&header(&["性別"]));
        let row = header(&["女"]);
        assert_eq!(index.value(&row, LogicalField::Sex), "女");
        assert_eq!(index.value(&row, LogicalField::PatientName), "");
    }

    #[test]
    fn labels_round_trip() {
        for field in LogicalField::ALL {
            assert_eq!(LogicalField::from_label(field.label()), Some(field));
        }
        assert_eq!(LogicalField::from_label("保険者番号（支部コード）"), None);
    }
}
