//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every inventory operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the storage backend and the audit log
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! The product collection is *not* owned here. The caller loads it once with
//! [`InventoryApi::load_products`], keeps it, and lends it to each workflow
//! by reference. Workflows replace it only after a successful save.
//!
//! ## Generic Over DataStore and AuditLog
//!
//! - Production: `InventoryApi<FileStore, FileAuditLog>`
//! - Testing: `InventoryApi<InMemoryStore, MemoryAuditLog>`

use crate::audit::AuditLog;
use crate::commands;
use crate::config::InventoryPaths;
use crate::error::Result;
use crate::model::{NewProduct, Product, ProductUpdate};
use crate::store::{find_by_id, DataStore};

pub struct InventoryApi<S: DataStore, A: AuditLog> {
    store: S,
    audit: A,
    paths: InventoryPaths,
}

impl<S: DataStore, A: AuditLog> InventoryApi<S, A> {
    pub fn new(store: S, audit: A, paths: InventoryPaths) -> Self {
        Self { store, audit, paths }
    }

    /// Create the data directory, a header-only products file and an empty log.
    ///
    /// Both are attempted even if the first fails; the first error wins.
    pub fn ensure_storage(&self) -> Result<()> {
        let store_result = self.store.ensure_storage();
        let audit_result = self.audit.ensure();
        store_result.and(audit_result)
    }

    pub fn load_products(&self) -> Result<Vec<Product>> {
        self.store.load_all()
    }

    pub fn find_product<'a>(&self, products: &'a [Product], id: &str) -> Option<&'a Product> {
        find_by_id(products, id).map(|(product, _)| product)
    }

    pub fn create_product(
        &mut self,
        products: &mut Vec<Product>,
        new_product: NewProduct,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &self.audit, products, new_product)
    }

    pub fn update_product(
        &mut self,
        products: &mut Vec<Product>,
        id: &str,
        update: &ProductUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &self.audit, products, id, update)
    }

    pub fn delete_product(
        &mut self,
        products: &mut Vec<Product>,
        id: &str,
        confirmed: bool,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &self.audit, products, id, confirmed)
    }

    pub fn list_products(&self, products: &[Product]) -> Result<commands::CmdResult> {
        commands::list::run(&self.audit, products)
    }

    pub fn category_stats(&self, products: &[Product]) -> Result<commands::CmdResult> {
        commands::stats::run(&self.audit, products)
    }

    pub fn view_log(&self, lines: usize) -> Result<commands::CmdResult> {
        commands::log_tail::run(&self.audit, lines)
    }

    pub fn exit(&self) -> Result<commands::CmdResult> {
        commands::exit::run(&self.audit)
    }

    pub fn paths(&self) -> &InventoryPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }
}

pub use crate::commands::delete::{confirms, CONFIRM_TOKEN};
pub use commands::{CategoryCount, CmdMessage, CmdResult, MessageLevel};
