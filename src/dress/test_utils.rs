use crate::audit::FileAuditLog;
use crate::config::{InventoryConfig, InventoryPaths};
use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Keeps the directory alive until the test is done
    pub _temp_dir: TempDir,
    pub store: FileStore,
    pub audit: FileAuditLog,
    pub paths: InventoryPaths,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let paths = InventoryConfig::default().paths(&root);
        let store = FileStore::new(paths.products_file.clone());
        let audit = FileAuditLog::new(paths.log_file.clone());
        Self {
            _temp_dir: temp_dir,
            store,
            audit,
            paths,
            root,
        }
    }
}
