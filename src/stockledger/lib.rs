//! # Stockledger Architecture
//!
//! Stockledger is a **single-user stock ledger library** kept in one flat,
//! comma-delimited text file. The `stock` binary is a thin client over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, prints messages        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session, dispatches to commands                 │
//! │  - Normalizes inputs (row numbers → RowIds)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Select → mutate → persist, one module per operation      │
//! │  - Returns structured `CmdResult`s                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session & Storage (session.rs, store/, format.rs)          │
//! │  - Format check gates every load                            │
//! │  - Every mutation rewrites the whole file                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Load / Mutate / Persist Cycle
//!
//! The file is read once when a [`session::Ledger`] opens. [`format::check`]
//! must pass before a single [`model::Record`] is built; a missing file and a
//! malformed file are different errors. Selection ([`select`]) is pure and
//! returns stable row ids. Mutations change the in-memory records and then
//! [`store::persist`] serializes the complete list. If that write fails the
//! change stays applied in memory and the caller gets
//! [`error::LedgerError::Persist`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`session`]: The working record list and its store
//! - [`store`]: Storage trait, file and in-memory stores, record codec
//! - [`format`]: Line-level format validation and its report
//! - [`select`]: Lowest / highest quantity and code selection
//! - [`model`]: `Record`, `Code`, `Cost`
//! - [`fields`]: Validation of entered values
//! - [`country`]: Country resolution seam
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod country;
pub mod error;
pub mod fields;
pub mod format;
pub mod model;
pub mod select;
pub mod session;
pub mod store;
