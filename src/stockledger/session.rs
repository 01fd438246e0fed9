//! The working session: the record list read at start-up plus the store it
//! came from.
//!
//! A [`Ledger`] is owned by whoever drives the session and handed to each
//! command by reference. Mutations go through [`Ledger::record_mut`] or
//! [`Ledger::push`] and are then written back with [`Ledger::persist`], which
//! always serializes the complete current list.

use crate::error::{LedgerError, Result};
use crate::model::Record;
use crate::select::RowId;
use crate::store::{self, LedgerStore};

pub struct Ledger<S: LedgerStore> {
    store: S,
    records: Vec<Record>,
}

impl<S: LedgerStore> Ledger<S> {
    /// Loads the store; fails with `MissingFile` or `MalformedFile` without
    /// building a partial ledger.
    pub fn open(store: S) -> Result<Self> {
        let records = store::load(&store)?;
        Ok(Self { store, records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, id: RowId) -> Result<&Record> {
        self.records
            .get(id.0)
            .ok_or(LedgerError::NotSelectable(id.row_number()))
    }

    pub(crate) fn record_mut(&mut self, id: RowId) -> Result<&mut Record> {
        self.records
            .get_mut(id.0)
            .ok_or(LedgerError::NotSelectable(id.row_number()))
    }

    /// Appends at the end of file order and returns the new row.
    pub(crate) fn push(&mut self, record: Record) -> RowId {
        self.records.push(record);
        RowId(self.records.len() - 1)
    }

    /// Rewrites the store from the full record list.
    pub fn persist(&mut self) -> Result<()> {
        store::persist(&mut self.store, &self.records)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
