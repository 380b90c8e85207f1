use crate::error::CheckError;
use crate::fields::{resolve, ColumnIndex, LogicalField, LEDGER_FIELDS};
use crate::matcher::{LedgerIndex, MatchKey};
use crate::model::{JoinSummary, JoinedRow, RawTable, ResultSheet};
use crate::normalize::{display_date, map_course_label};

/// Ledger columns copied in front of each insurer row, in output order.
pub const LEDGER_OUTPUT: [LogicalField; 3] = [
    LogicalField::Department,
    LogicalField::PatientName,
    LogicalField::Sex,
];

/// Insurer columns holding `YYYYMMDD` dates.
const DATE_COLS: [usize; 2] = [4, 5];
/// Insurer column holding the submission course code.
const COURSE_COL: usize = 6;

/// Join the insurer result against the ledger and lay out the result sheet.
pub fn compose(insurer: &RawTable, ledger: &RawTable) -> Result<ResultSheet, CheckError> {
    let columns = resolve(ledger, LEDGER_FIELDS, "reservation ledger")?;
    Ok(compose_with(insurer, ledger, &columns))
}

pub fn compose_with(insurer: &RawTable, ledger: &RawTable, columns: &ColumnIndex) -> ResultSheet {
    let header: Vec<String> = LEDGER_OUTPUT
        .iter()
        .map(|f| f.label().to_string())
        .chain(insurer.header().iter().cloned())
        .collect();

    let index = LedgerIndex::build(ledger, columns);
    if index.is_empty() {
        log::warn!("reservation ledger has no data rows; no insurer row can match");
    } else {
        log::debug!("ledger index holds {} distinct keys", index.len());
    }
    let mut summary = JoinSummary::default();
    let mut rows = Vec::with_capacity(insurer.data_rows().len());

    for insurer_row in insurer.data_rows() {
        let key = MatchKey::from_insurer_row(insurer_row);
        let matched = index.lookup(&key);
        let ledger_value = |field| {
            matched
                .map(|row| columns.value(row, field).to_string())
                .unwrap_or_default()
        };

        summary.insurer_rows += 1;
        if matched.is_some() {
            summary.matched += 1;
        } else {
            log::info!(
                "no ledger row for symbol {} card {}",
                key.symbol,
                key.card_number
            );
            summary.unmatched += 1;
        }

        rows.push(JoinedRow {
            department: ledger_value(LogicalField::Department),
            patient_name: ledger_value(LogicalField::PatientName),
            sex: ledger_value(LogicalField::Sex),
            insurer_fields: render_insurer_row(insurer_row),
        });
    }

    ResultSheet { header, rows, summary }
}

/// Dates get slashes back and the course code becomes its label; every other
/// column passes through.
fn render_insurer_row(row: &[String]) -> Vec<String> {
    row.iter()
        .enumerate()
        .map(|(i, cell)| match i {
            i if DATE_COLS.contains(&i) => display_date(cell),
            COURSE_COL => map_course_label(cell).unwrap_or_default().to_string(),
            _ => cell.clone(),
        })
        .collect()
}
