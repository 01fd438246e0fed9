use crate::commands::{CmdResult, ItemValue};
use crate::error::Result;
use crate::select::RowId;
use crate::session::Ledger;
use crate::store::LedgerStore;

/// Total stock value (`cost × quantity`) per record.
pub fn run<S: LedgerStore>(ledger: &Ledger<S>) -> Result<CmdResult> {
    let values = ledger
        .records()
        .iter()
        .enumerate()
        .map(|(idx, record)| ItemValue {
            row: RowId(idx),
            code: record.code.to_string(),
            product: record.product.clone(),
            total: record.total_value(),
        })
        .collect();
    Ok(CmdResult::default().with_values(values))
}
