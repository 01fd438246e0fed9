//! # Storage Layer
//!
//! The [`LedgerStore`] trait is the raw boundary to wherever the inventory text
//! lives. It only moves lines in and whole contents out; the record codec sits
//! on top of it in this module so every backend shares the same format rules.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the production flat file (`inventory.txt` by default)
//! - [`memory::InMemoryStore`]: in-memory contents for tests, with an optional
//!   write failure switch
//!
//! ## File Format
//!
//! ```text
//! Country,Code,Product,Cost,Quantity
//! France,SKU00012,Running Shoe,50,10
//! ```
//!
//! [`load`] refuses to build any record until the whole file passes
//! [`format::check`]. [`persist`] always rewrites the full file from the
//! complete record list, never appends.

use crate::error::{LedgerError, Result};
use crate::format::{self, DELIMITER, HEADER};
use crate::model::Record;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for the inventory text.
pub trait LedgerStore {
    /// Read the contents as lines without terminators.
    ///
    /// Returns [`LedgerError::MissingFile`] when there is nothing to read.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Replace the whole contents.
    fn write_all(&mut self, contents: &str) -> std::io::Result<()>;

    /// Where the contents live, for messages.
    fn location(&self) -> PathBuf;
}

fn source_name<S: LedgerStore>(store: &S) -> String {
    let location = store.location();
    location
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| location.display().to_string())
}

/// Runs the format check on the stored lines without loading anything.
pub fn inspect<S: LedgerStore>(store: &S) -> Result<format::FormatReport> {
    let lines = store.read_lines()?;
    Ok(format::check(&source_name(store), &lines))
}

/// Loads every record, in file order, from a store whose contents pass the
/// format check.
pub fn load<S: LedgerStore>(store: &S) -> Result<Vec<Record>> {
    let lines = store.read_lines()?;
    let report = format::check(&source_name(store), &lines);
    if !report.is_valid() {
        tracing::warn!(
            location = %store.location().display(),
            defects = report.defects().len(),
            "inventory file failed format check"
        );
        return Err(LedgerError::MalformedFile(report));
    }

    let records = lines
        .iter()
        .skip(1)
        .map(|line| parse_line(line))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        location = %store.location().display(),
        records = records.len(),
        "loaded inventory"
    );
    Ok(records)
}

/// Builds a record from a line that already passed [`format::check`].
fn parse_line(line: &str) -> Result<Record> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [country, code, product, cost, quantity] = fields.as_slice() else {
        return Err(LedgerError::Store(format!("unexpected line: {}", line)));
    };
    Ok(Record {
        country: country.to_string(),
        code: code.parse()?,
        product: product.to_string(),
        cost: cost.parse()?,
        quantity: quantity
            .parse()
            .map_err(|_| LedgerError::Store(format!("unexpected quantity: {}", quantity)))?,
    })
}

pub fn to_line(record: &Record) -> String {
    let mut buf = [0u8; 4];
    let delimiter: &str = DELIMITER.encode_utf8(&mut buf);
    [
        record.country.clone(),
        record.code.to_string(),
        record.product.clone(),
        record.cost.to_string(),
        record.quantity.to_string(),
    ]
    .join(delimiter)
}

/// Header plus one newline-terminated line per record.
pub fn serialize(records: &[Record]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + records.len() * 48);
    out.push_str(HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&to_line(record));
        out.push('\n');
    }
    out
}

/// Rewrites the whole store from `records`.
pub fn persist<S: LedgerStore>(store: &mut S, records: &[Record]) -> Result<()> {
    let contents = serialize(records);
    store.write_all(&contents).map_err(|source| {
        tracing::warn!(
            location = %store.location().display(),
            error = %source,
            "inventory rewrite failed; in-memory records are ahead of the file"
        );
        LedgerError::Persist {
            path: store.location(),
            source,
        }
    })?;
    tracing::debug!(
        location = %store.location().display(),
        records = records.len(),
        "persisted inventory"
    );
    Ok(())
}
