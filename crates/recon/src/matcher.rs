use std::collections::HashMap;

use crate::eligibility::{CARD_NUMBER_WIDTH, SYMBOL_WIDTH};
use crate::fields::{ColumnIndex, LogicalField};
use crate::model::RawTable;
use crate::normalize::zero_pad;

/// Symbol column in the insurer result file.
pub const INSURER_SYMBOL_COL: usize = 1;
/// Card number column in the insurer result file.
pub const INSURER_CARD_COL: usize = 2;

/// Join key: (symbol, card number), both zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchKey {
    pub symbol: String,
    pub card_number: String,
}

impl MatchKey {
    pub fn new(symbol: &str, card_number: &str) -> Self {
        Self {
            symbol: zero_pad(symbol, SYMBOL_WIDTH),
            card_number: zero_pad(card_number, CARD_NUMBER_WIDTH),
        }
    }

    /// Key of an insurer result row. Missing cells read as empty.
    pub fn from_insurer_row(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).map(|s| s.as_str()).unwrap_or("");
        Self::new(cell(INSURER_SYMBOL_COL), cell(INSURER_CARD_COL))
    }

    pub fn from_ledger_row(row: &[String], columns: &ColumnIndex) -> Self {
        Self::new(
            columns.value(row, LogicalField::Symbol),
            columns.value(row, LogicalField::CardNumber),
        )
    }
}

/// Ledger data rows indexed by key. Built once before the join.
///
/// When several ledger rows share a key the earliest one wins, the same row
/// a top-to-bottom scan would stop at.
pub struct LedgerIndex<'a> {
    rows: &'a [Vec<String>],
    by_key: HashMap<MatchKey, usize>,
}

impl<'a> LedgerIndex<'a> {
    pub fn build(ledger: &'a RawTable, columns: &ColumnIndex) -> Self {
        let rows = ledger.data_rows();
        let mut by_key = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            by_key.entry(MatchKey::from_ledger_row(row, columns)).or_insert(i);
        }
        Self { rows, by_key }
    }

    pub fn lookup(&self, key: &MatchKey) -> Option<&'a [String]> {
        self.by_key.get(key).map(|&i| self.rows[i].as_slice())
    }

    /// Distinct keys in the ledger.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// First ledger data row whose key equals `key`, by linear scan.
///
/// Reference behavior for [`LedgerIndex::lookup`]; the join itself uses the
/// index.
pub fn find_first<'a>(
    ledger: &'a RawTable,
    columns: &ColumnIndex,
    key: &MatchKey,
) -> Option<&'a [String]> {
    ledger
        .data_rows()
        .iter()
        .find(|row| MatchKey::from_ledger_row(row, columns) == *key)
        .map(|row| row.as_slice())
}
