use crate::error::{DressError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "dress.json";
const DEFAULT_DATA_DIR: &str = "dados";
const DEFAULT_PRODUCTS_FILE: &str = "produtos.csv";
const DEFAULT_LOG_FILE: &str = "log.txt";
const DEFAULT_LOG_TAIL_LINES: usize = 10;

/// Configuration for the inventory, stored in `dress.json` at the inventory root.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Directory holding the products file and the audit log, relative to the root
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_products_file")]
    pub products_file: String,

    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// How many audit lines "view log" shows when the operator just hits Enter
    #[serde(default = "default_log_tail_lines")]
    pub log_tail_lines: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_products_file() -> String {
    DEFAULT_PRODUCTS_FILE.to_string()
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_log_tail_lines() -> usize {
    DEFAULT_LOG_TAIL_LINES
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            products_file: default_products_file(),
            log_file: default_log_file(),
            log_tail_lines: default_log_tail_lines(),
        }
    }
}

impl InventoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DressError::Io)?;
        let config: InventoryConfig =
            serde_json::from_str(&content).map_err(DressError::Serialization)?;
        Ok(config)
    }

    /// Resolve file locations against the inventory root.
    pub fn paths(&self, root: &Path) -> InventoryPaths {
        let data_dir = root.join(&self.data_dir);
        InventoryPaths {
            products_file: data_dir.join(&self.products_file),
            log_file: data_dir.join(&self.log_file),
            data_dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryPaths {
    pub data_dir: PathBuf,
    pub products_file: PathBuf,
    pub log_file: PathBuf,
}
