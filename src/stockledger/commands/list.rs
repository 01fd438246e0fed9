use crate::commands::{CmdResult, ListedRecord};
use crate::error::Result;
use crate::select::RowId;
use crate::session::Ledger;
use crate::store::LedgerStore;

pub fn run<S: LedgerStore>(ledger: &Ledger<S>) -> Result<CmdResult> {
    let listed = ledger
        .records()
        .iter()
        .enumerate()
        .map(|(idx, record)| ListedRecord {
            row: RowId(idx),
            record: record.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_listed_records(listed))
}
