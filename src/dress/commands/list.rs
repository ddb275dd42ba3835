use crate::audit::AuditLog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;

use super::helpers::record;

pub fn run<A: AuditLog>(audit: &A, products: &[Product]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info("No products registered."));
    }
    record(audit, "Products viewed", &mut result);
    Ok(result.with_listed_products(products.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAuditLog;
    use crate::model::NewProduct;

    #[test]
    fn lists_in_collection_order() {
        let audit = MemoryAuditLog::new();
        let products = vec![
            NewProduct::new("Saia", 80.0, 2).into_product("5".into()),
            NewProduct::new("Blusa", 45.0, 6).into_product("2".into()),
        ];

        let result = run(&audit, &products).unwrap();

        let ids: Vec<&str> = result.listed_products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "2"]);
        assert!(result.messages.is_empty());
        assert!(audit.entries()[0].ends_with("Products viewed"));
    }

    #[test]
    fn empty_collection_gets_a_notice() {
        let audit = MemoryAuditLog::new();
        let result = run(&audit, &[]).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages[0].content, "No products registered.");
    }
}
