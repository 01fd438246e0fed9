//! # Selector
//!
//! Pure functions that pick a subset of the working records, returned as
//! [`RowId`]s so later operations target the same records that were shown.
//!
//! The aggregate selectors make a single pass in file order. The first record
//! seeds the running extreme; a strictly better quantity resets the set to that
//! row alone, an equal quantity is appended. The result is every row tied for
//! the extreme, in file order, and an empty list selects nothing.

use crate::model::{Code, Record};
use std::fmt;

/// Identifies a record by its 0-based position in the working list.
///
/// Displayed 1-based, which is how rows are numbered for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl RowId {
    /// From a 1-based row number; `0` has no row.
    pub fn from_row_number(row: usize) -> Option<Self> {
        row.checked_sub(1).map(RowId)
    }

    pub fn row_number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.row_number())
    }
}

pub fn lowest_quantity(records: &[Record]) -> Vec<RowId> {
    extreme_quantity(records, |candidate, current| candidate < current)
}

pub fn highest_quantity(records: &[Record]) -> Vec<RowId> {
    extreme_quantity(records, |candidate, current| candidate > current)
}

fn extreme_quantity(records: &[Record], beats: impl Fn(u64, u64) -> bool) -> Vec<RowId> {
    let mut selected = Vec::new();
    let mut current = match records.first() {
        Some(first) => first.quantity,
        None => return selected,
    };
    selected.push(RowId(0));

    for (idx, record) in records.iter().enumerate().skip(1) {
        if beats(record.quantity, current) {
            current = record.quantity;
            selected.clear();
            selected.push(RowId(idx));
        } else if record.quantity == current {
            selected.push(RowId(idx));
        }
    }

    selected
}

/// Every record carrying `code`, in file order.
pub fn by_code(records: &[Record], code: &Code) -> Vec<RowId> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| &record.code == code)
        .map(|(idx, _)| RowId(idx))
        .collect()
}
