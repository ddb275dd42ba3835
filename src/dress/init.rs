use crate::api::InventoryApi;
use crate::audit::FileAuditLog;
use crate::config::InventoryConfig;
use crate::store::fs::FileStore;
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Overrides the inventory root (default: the current directory).
pub const HOME_ENV: &str = "DRESS_HOME";

pub struct InventoryContext {
    pub api: InventoryApi<FileStore, FileAuditLog>,
    pub config: InventoryConfig,
}

pub fn resolve_root(cwd: &Path) -> PathBuf {
    match env::var_os(HOME_ENV) {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => cwd.to_path_buf(),
    }
}

/// Wire the production API. A broken config file falls back to defaults.
pub fn initialize(root: &Path, data_dir: Option<PathBuf>) -> InventoryContext {
    let mut config = InventoryConfig::load(root).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        InventoryConfig::default()
    });
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    let paths = config.paths(root);
    let store = FileStore::new(paths.products_file.clone());
    let audit = FileAuditLog::new(paths.log_file.clone());
    let api = InventoryApi::new(store, audit, paths);

    InventoryContext { api, config }
}
