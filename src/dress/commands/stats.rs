use crate::audit::AuditLog;
use crate::commands::{CategoryCount, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;

use super::helpers::record;

pub const UNCATEGORIZED: &str = "(no category)";

/// Products per category, in the order each category first appears.
pub fn count_by_category(products: &[Product]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for product in products {
        let category = if product.category.is_empty() {
            UNCATEGORIZED
        } else {
            product.category.as_str()
        };
        match counts.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: category.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

pub fn run<A: AuditLog>(audit: &A, products: &[Product]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Record count: {}",
        products.len()
    )));
    record(audit, "Query: record count by category", &mut result);
    Ok(result.with_category_counts(count_by_category(products)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAuditLog;
    use crate::model::NewProduct;

    fn product(id: &str, category: &str) -> Product {
        let mut p = NewProduct::new("Item", 1.0, 1).into_product(id.into());
        p.category = category.into();
        p
    }

    #[test]
    fn counts_in_first_seen_order() {
        let products = vec![
            product("1", "Calça"),
            product("2", "Camiseta"),
            product("3", "Calça"),
            product("4", ""),
        ];

        let counts = count_by_category(&products);

        assert_eq!(
            counts,
            vec![
                CategoryCount { category: "Calça".into(), count: 2 },
                CategoryCount { category: "Camiseta".into(), count: 1 },
                CategoryCount { category: UNCATEGORIZED.into(), count: 1 },
            ]
        );
    }

    #[test]
    fn reports_total_and_logs() {
        let audit = MemoryAuditLog::new();
        let products = vec![product("1", "Boné"), product("2", "Boné")];

        let result = run(&audit, &products).unwrap();

        assert_eq!(result.messages[0].content, "Record count: 2");
        assert_eq!(result.category_counts.len(), 1);
        assert!(audit.entries()[0].ends_with("Query: record count by category"));
    }
}
