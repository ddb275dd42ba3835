use crate::audit::AuditLog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DressError, Result};
use crate::model::{NewProduct, Product};
use crate::store::{generate_id, DataStore};

use super::helpers::{commit, record};

pub fn run<S: DataStore, A: AuditLog>(
    store: &mut S,
    audit: &A,
    products: &mut Vec<Product>,
    new_product: NewProduct,
) -> Result<CmdResult> {
    // Validate before touching ids so a rejected create consumes nothing
    if new_product.name.trim().is_empty() {
        return Err(DressError::Validation(
            "Name cannot be empty. Product not created.".to_string(),
        ));
    }

    let product = new_product.into_product(generate_id(products));
    let mut next = products.clone();
    next.push(product.clone());
    commit(store, products, next)?;

    let mut result = CmdResult::default();
    record(
        audit,
        &format!(
            "Product created: id={}, name='{}'",
            product.id, product.name
        ),
        &mut result,
    );
    result.add_message(CmdMessage::success(format!(
        "Product created (ID {}): {}",
        product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
