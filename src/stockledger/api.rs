//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for ledger operations, whatever the UI.
//!
//! It owns the session ([`Ledger`]) for its whole life, so there is no
//! process-wide record list: every operation borrows the session through
//! `&self` / `&mut self`.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*` function
//! - **Normalizes inputs** (1-based row numbers to [`RowId`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never formats for display.
//!
//! ## Generic Over LedgerStore
//!
//! - Production: `LedgerApi<FileStore>`
//! - Testing: `LedgerApi<InMemoryStore>`

use crate::commands;
use crate::country::{CountryResolver, SanitizingResolver};
use crate::error::{LedgerError, Result};
use crate::select::RowId;
use crate::session::Ledger;
use crate::store::LedgerStore;

pub struct LedgerApi<S: LedgerStore> {
    ledger: Ledger<S>,
    resolver: Box<dyn CountryResolver>,
}

impl<S: LedgerStore> LedgerApi<S> {
    /// Loads the store. Fails with `MissingFile` or `MalformedFile`.
    pub fn open(store: S) -> Result<Self> {
        Ok(Self {
            ledger: Ledger::open(store)?,
            resolver: Box::new(SanitizingResolver),
        })
    }

    pub fn with_resolver(mut self, resolver: Box<dyn CountryResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn capture(&mut self, input: &commands::capture::ItemInput) -> Result<commands::CmdResult> {
        commands::capture::run(&mut self.ledger, self.resolver.as_ref(), input)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.ledger)
    }

    pub fn restock_candidates(&self) -> Result<commands::CmdResult> {
        commands::restock::candidates(&self.ledger)
    }

    pub fn restock(&mut self, row: usize, amount: &str) -> Result<commands::CmdResult> {
        commands::restock::run(&mut self.ledger, parse_row(row)?, amount)
    }

    pub fn search(&self, code: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.ledger, code)
    }

    pub fn values(&self) -> Result<commands::CmdResult> {
        commands::value::run(&self.ledger)
    }

    pub fn discount_candidates(&self) -> Result<commands::CmdResult> {
        commands::discount::candidates(&self.ledger)
    }

    pub fn discount(&mut self, row: usize, price: &str) -> Result<commands::CmdResult> {
        commands::discount::run(&mut self.ledger, parse_row(row)?, price)
    }

    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }
}

/// Format check without loading; usable on a file [`LedgerApi::open`] rejects.
pub fn validate<S: LedgerStore>(store: &S) -> Result<commands::CmdResult> {
    commands::validate::run(store)
}

fn parse_row(row: usize) -> Result<RowId> {
    RowId::from_row_number(row).ok_or(LedgerError::NotSelectable(row))
}

pub use crate::commands::capture::ItemInput;
pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ItemValue, ListedRecord, MessageLevel};
