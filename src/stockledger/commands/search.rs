use crate::commands::{listed, CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::parse_code;
use crate::select::by_code;
use crate::session::Ledger;
use crate::store::LedgerStore;

/// Finds every record with the given code. No match is not an error: the
/// result carries a warning and an empty listing.
pub fn run<S: LedgerStore>(ledger: &Ledger<S>, code: &str) -> Result<CmdResult> {
    let code = parse_code(code)?;
    let rows = by_code(ledger.records(), &code);
    let mut result = CmdResult::default().with_listed_records(listed(ledger, &rows));
    if rows.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Code {} is not in stock.",
            code
        )));
    }
    Ok(result)
}
