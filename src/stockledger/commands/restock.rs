use crate::commands::{listed, CmdMessage, CmdResult};
use crate::error::{FieldError, LedgerError, Result};
use crate::fields::parse_quantity;
use crate::select::{lowest_quantity, RowId};
use crate::session::Ledger;
use crate::store::LedgerStore;

/// Lists the items tied for the lowest quantity.
pub fn candidates<S: LedgerStore>(ledger: &Ledger<S>) -> Result<CmdResult> {
    let rows = lowest_quantity(ledger.records());
    Ok(CmdResult::default().with_listed_records(listed(ledger, &rows)))
}

/// Adds `amount` to the quantity of `row`, which must be one of the
/// lowest-quantity items, then rewrites the file.
pub fn run<S: LedgerStore>(ledger: &mut Ledger<S>, row: RowId, amount: &str) -> Result<CmdResult> {
    let amount = parse_quantity(amount)?;
    if !lowest_quantity(ledger.records()).contains(&row) {
        return Err(LedgerError::NotSelectable(row.row_number()));
    }

    let record = ledger.record_mut(row)?;
    let new_quantity = record
        .quantity
        .checked_add(amount)
        .ok_or_else(|| FieldError::BadQuantity(amount.to_string()))?;
    record.quantity = new_quantity;
    let code = record.code.clone();
    tracing::info!(row = row.row_number(), %code, quantity = new_quantity, "restocked item");

    ledger.persist()?;

    let mut result = CmdResult::default().with_affected_records(listed(ledger, &[row]));
    result.add_message(CmdMessage::success(format!(
        "Stock quantity for {} (row {}) is now {}.",
        code, row, new_quantity
    )));
    Ok(result)
}
