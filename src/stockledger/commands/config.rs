use crate::commands::{CmdMessage, CmdResult};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes the config stored in `dir`. An unknown key or a rejected
/// value is an error and leaves the file untouched.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = LedgerConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(value_of(&config, &key)?));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(dir)?;
            let stored = value_of(&config, &key)?;
            tracing::info!(%key, value = %stored, "config updated");
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
            result = result.with_config(config);
        }
    }
    Ok(result)
}

fn value_of(config: &LedgerConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| LedgerError::Config(format!("Unknown config key: {}", key)))
}
