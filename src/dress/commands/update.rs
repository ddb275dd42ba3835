use crate::audit::AuditLog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, ProductUpdate};
use crate::store::DataStore;

use super::helpers::{commit, locate, record};

pub fn run<S: DataStore, A: AuditLog>(
    store: &mut S,
    audit: &A,
    products: &mut Vec<Product>,
    id: &str,
    update: &ProductUpdate,
) -> Result<CmdResult> {
    let idx = locate(products, id)?;

    let mut next = products.clone();
    update.apply_to(&mut next[idx]);
    let product = next[idx].clone();
    commit(store, products, next)?;

    let mut result = CmdResult::default();
    record(
        audit,
        &format!("Product edited: id={}, name='{}'", product.id, product.name),
        &mut result,
    );
    result.add_message(CmdMessage::success(format!(
        "Product updated (ID {}): {}",
        product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
