use crate::error::CheckError;
use crate::fields::{resolve, ColumnIndex, LogicalField, ELIGIBILITY_FIELDS};
use crate::filter::is_in_scope;
use crate::model::{EligibilityRecord, RawTable};
use crate::normalize::{era_to_gregorian, map_course_code, reformat_date, zero_pad};

pub const INSURER_NUMBER_WIDTH: usize = 8;
pub const SYMBOL_WIDTH: usize = 8;
pub const CARD_NUMBER_WIDTH: usize = 7;
const BRANCH: &str = "00";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityOutput {
    pub records: Vec<EligibilityRecord>,
    /// Data rows read (header excluded).
    pub rows_read: usize,
    /// Data rows dropped by the course filter.
    pub excluded: usize,
}

/// Resolve the reservation table's columns and build the submission records.
pub fn transform(table: &RawTable) -> Result<EligibilityOutput, CheckError> {
    let index = resolve(table, ELIGIBILITY_FIELDS, "reservation ledger")?;
    Ok(transform_with(table, &index))
}

/// Build submission records from an already-resolved index. Row order is kept.
pub fn transform_with(table: &RawTable, index: &ColumnIndex) -> EligibilityOutput {
    let rows = table.data_rows();
    let records: Vec<EligibilityRecord> = rows
        .iter()
        .filter_map(|row| record_from_row(row, index))
        .collect();

    EligibilityOutput {
        rows_read: rows.len(),
        excluded: rows.len() - records.len(),
        records,
    }
}

fn record_from_row(row: &[String], index: &ColumnIndex) -> Option<EligibilityRecord> {
    let course = index.value(row, LogicalField::CourseCode);
    if !is_in_scope(course) {
        return None;
    }

    Some(EligibilityRecord {
        insurer_number: zero_pad(index.value(row, LogicalField::InsurerNumber), INSURER_NUMBER_WIDTH),
        symbol: zero_pad(index.value(row, LogicalField::Symbol), SYMBOL_WIDTH),
        card_number: zero_pad(index.value(row, LogicalField::CardNumber), CARD_NUMBER_WIDTH),
        branch: BRANCH,
        birth_date: era_to_gregorian(index.value(row, LogicalField::BirthDate)).unwrap_or_default(),
        visit_date: reformat_date(index.value(row, LogicalField::VisitDate)).unwrap_or_default(),
        course: map_course_code(course)?,
    })
}
