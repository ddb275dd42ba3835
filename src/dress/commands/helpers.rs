use crate::audit::AuditLog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DressError, Result};
use crate::model::Product;
use crate::store::{find_by_id, DataStore};
use tracing::warn;

/// Persist `next` and only then make it the live collection.
///
/// On a failed save `products` is left untouched, so memory and disk agree.
pub fn commit<S: DataStore>(
    store: &mut S,
    products: &mut Vec<Product>,
    next: Vec<Product>,
) -> Result<()> {
    store.save_all(&next)?;
    *products = next;
    Ok(())
}

/// Append an audit entry. A failed append becomes a warning on `result`.
pub fn record<A: AuditLog>(audit: &A, action: &str, result: &mut CmdResult) {
    if let Err(e) = audit.log_action(action) {
        warn!(error = %e, action, "failed to write audit entry");
        result.add_message(CmdMessage::warning(format!(
            "Could not write to the audit log: {}",
            e
        )));
    }
}

pub fn locate(products: &[Product], id: &str) -> Result<usize> {
    find_by_id(products, id)
        .map(|(_, idx)| idx)
        .ok_or_else(|| DressError::ProductNotFound(id.to_string()))
}
