use crate::config::LedgerConfig;
use crate::format::FormatReport;
use crate::model::{Record, StockValue};
use crate::select::RowId;
use crate::session::Ledger;
use crate::store::LedgerStore;

pub mod capture;
pub mod config;
pub mod discount;
pub mod list;
pub mod restock;
pub mod search;
pub mod validate;
pub mod value;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record together with the row it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRecord {
    pub row: RowId,
    pub record: Record,
}

/// `cost × quantity` for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemValue {
    pub row: RowId,
    pub code: String,
    pub product: String,
    pub total: StockValue,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<ListedRecord>,
    pub listed_records: Vec<ListedRecord>,
    pub values: Vec<ItemValue>,
    pub report: Option<FormatReport>,
    pub config: Option<LedgerConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_values(mut self, values: Vec<ItemValue>) -> Self {
        self.values = values;
        self
    }

    pub fn with_report(mut self, report: FormatReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: LedgerConfig) -> Self {
        self.config = Some(config);
        self
    }
}

pub(crate) fn listed<S: LedgerStore>(ledger: &Ledger<S>, rows: &[RowId]) -> Vec<ListedRecord> {
    rows.iter()
        .filter_map(|&row| {
            ledger.record(row).ok().map(|record| ListedRecord {
                row,
                record: record.clone(),
            })
        })
        .collect()
}
