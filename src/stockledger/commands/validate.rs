use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{self, LedgerStore};

/// Runs the format check alone. Works on files that would refuse to load.
pub fn run<S: LedgerStore>(store: &S) -> Result<CmdResult> {
    let report = store::inspect(store)?;
    let mut result = CmdResult::default();
    if report.is_valid() {
        result.add_message(CmdMessage::success(format!(
            "No errors in '{}'.",
            store.location().display()
        )));
    }
    Ok(result.with_report(report))
}
