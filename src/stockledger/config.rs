use crate::error::{LedgerError, Result};
use crate::store::fs::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the ledger, stored in `.stockledger/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Inventory file; relative paths are resolved against the working directory
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,
}

fn default_inventory_file() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
        }
    }
}

impl LedgerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LedgerError::Io)?;
        let config: LedgerConfig =
            serde_json::from_str(&content).map_err(LedgerError::Serialization)?;
        Ok(config)
    }

    /// Load from the first directory that has a config file.
    pub fn load_first<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        for dir in dirs {
            if dir.as_ref().join(CONFIG_FILENAME).exists() {
                return Self::load(dir);
            }
        }
        Ok(Self::default())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LedgerError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LedgerError::Serialization)?;
        fs::write(config_path, content).map_err(LedgerError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "inventory-file" => Some(self.inventory_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "inventory-file" => {
                if value.trim().is_empty() {
                    return Err(LedgerError::Config(
                        "inventory-file cannot be empty".to_string(),
                    ));
                }
                self.inventory_file = value.trim().to_string();
                Ok(())
            }
            other => Err(LedgerError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// The inventory path, with relative paths joined onto `base`.
    pub fn inventory_path(&self, base: &Path) -> PathBuf {
        let path = PathBuf::from(&self.inventory_file);
        if path.is_absolute() {
            path
        } else {
            base.join(path)
        }
    }
}
