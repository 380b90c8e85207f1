use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A whole delimited file held in memory. Row 0 is the header.
///
/// Construction normalizes the shape: a trailing empty header field (left by
/// a trailing delimiter) is dropped, and every data row is truncated or padded
/// with empty fields to the header's width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let Some(header) = rows.first_mut() else {
            return Self { rows };
        };
        if header.len() > 1 && header.last().is_some_and(|h| h.is_empty()) {
            header.pop();
        }
        let width = header.len();
        for row in rows.iter_mut().skip(1) {
            row.truncate(width);
            row.resize(width, String::new());
        }
        Self { rows }
    }

    /// Header labels; empty when the table has no rows at all.
    pub fn header(&self) -> &[String] {
        self.rows.first().map(|r| r.as_slice()).unwrap_or(&[])
    }

    /// Every row after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn width(&self) -> usize {
        self.header().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Single-file output
// ---------------------------------------------------------------------------

/// One line of the eligibility-check submission file.
///
/// Field order is the wire order; the CSV writer serializes it positionally
/// without a header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityRecord {
    /// 8 digits, zero-padded.
    pub insurer_number: String,
    /// 8 digits, zero-padded.
    pub symbol: String,
    /// 7 digits, zero-padded.
    pub card_number: String,
    /// Always `"00"`.
    pub branch: &'static str,
    /// Gregorian `YYYYMMDD`, blank when the era date could not be converted.
    pub birth_date: String,
    /// `YYYYMMDD`, blank when the source date was malformed.
    pub visit_date: String,
    /// `"1"`, `"2"` or `"3"`.
    pub course: &'static str,
}

// ---------------------------------------------------------------------------
// Two-file output
// ---------------------------------------------------------------------------

/// Ledger-derived fields followed by one insurer-result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRow {
    pub department: String,
    pub patient_name: String,
    pub sex: String,
    pub insurer_fields: Vec<String>,
}

impl JoinedRow {
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(3 + self.insurer_fields.len());
        cells.push(self.department.clone());
        cells.push(self.patient_name.clone());
        cells.push(self.sex.clone());
        cells.extend(self.insurer_fields.iter().cloned());
        cells
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSummary {
    pub insurer_rows: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Header row plus joined rows, ready for the spreadsheet writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSheet {
    pub header: Vec<String>,
    pub rows: Vec<JoinedRow>,
    pub summary: JoinSummary,
}

impl ResultSheet {
    /// Header followed by every row, as a plain grid of text cells.
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().map(JoinedRow::cells))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trailing_empty_header_column_dropped() {
        let table = RawTable::from_rows(vec![row(&["a", "b", ""]), row(&["1", "2", ""])]);
        assert_eq!(table.width(), 2);
        assert_eq!(table.data_rows()[0], row(&["1", "2"]));
    }

    #[test]
    fn rows_truncated_and_padded_to_header() {
        let table = RawTable::from_rows(vec![
            row(&["a", "b", "c"]),
            row(&["1", "2", "3", "extra"]),
            row(&["4"]),
        ]);
        assert_eq!(table.data_rows()[0], row(&["1", "2", "3"]));
        assert_eq!(table.data_rows()[1], row(&["4", "", ""]));
    }

    #[test]
    fn empty_table_has_no_header_or_rows() {
        let table = RawTable::from_rows(Vec::new());
        assert!(table.is_empty());
        assert!(table.header().is_empty());
        assert!(table.data_rows().is_empty());
    }

    #[test]
    fn grid_starts_with_header() {
        let sheet = ResultSheet {
            header: row(&["h1", "h2"]),
            rows: vec![JoinedRow {
                department: "総務".into(),
                patient_name: "山田".into(),
                sex: "男".into(),
                insurer_fields: row(&["x"]),
            }],
            summary: JoinSummary::default(),
        };
        let grid = sheet.to_grid();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], row(&["h1", "h2"]));
        assert_eq!(grid[1], row(&["総務", "山田", "男", "x"]));
    }
}
