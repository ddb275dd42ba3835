use crate::audit::AuditLog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;

use super::helpers::{commit, locate, record};

/// The single-letter answer that confirms a deletion (any case).
pub const CONFIRM_TOKEN: &str = "y";

pub fn confirms(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(CONFIRM_TOKEN)
}

pub fn run<S: DataStore, A: AuditLog>(
    store: &mut S,
    audit: &A,
    products: &mut Vec<Product>,
    id: &str,
    confirmed: bool,
) -> Result<CmdResult> {
    let idx = locate(products, id)?;

    if !confirmed {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(res);
    }

    let mut next = products.clone();
    let removed = next.remove(idx);
    commit(store, products, next)?;

    let mut result = CmdResult::default();
    record(
        audit,
        &format!("Product deleted: id={}, name='{}'", removed.id, removed.name),
        &mut result,
    );
    result.add_message(CmdMessage::success(format!(
        "Product deleted (ID {}): {}",
        removed.id, removed.name
    )));
    Ok(result.with_affected_products(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAuditLog;
    use crate::commands::create;
    use crate::error::DressError;
    use crate::model::NewProduct;
    use crate::store::memory::InMemoryStore;
    use crate::store::{find_by_id, generate_id};

    fn seeded(names: &[&str]) -> (InMemoryStore, MemoryAuditLog, Vec<Product>) {
        let mut store = InMemoryStore::new();
        let audit = MemoryAuditLog::new();
        let mut products = Vec::new();
        for name in names {
            create::run(&mut store, &audit, &mut products, NewProduct::new(*name, 10.0, 1))
                .unwrap();
        }
        (store, audit, products)
    }

    #[test]
    fn confirmation_token_is_case_insensitive() {
        assert!(confirms("y"));
        assert!(confirms(" Y "));
        assert!(!confirms(""));
        assert!(!confirms("yes"));
        assert!(!confirms("n"));
    }

    #[test]
    fn removes_confirmed_product() {
        let (mut store, audit, mut products) = seeded(&["A", "B", "C"]);

        let result = run(&mut store, &audit, &mut products, "2", true).unwrap();

        assert_eq!(result.affected_products[0].name, "B");
        assert!(find_by_id(&products, "2").is_none());
        assert_eq!(products.len(), 2);
        assert_eq!(store.stored().len(), 2);
        assert!(audit
            .entries()
            .last()
            .unwrap()
            .ends_with("Product deleted: id=2, name='B'"));
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let (mut store, audit, mut products) = seeded(&["A", "B"]);
        let before = products.clone();
        let saves_before = store.save_count();
        let log_before = audit.entries();

        let result = run(&mut store, &audit, &mut products, "1", false).unwrap();

        assert!(result.affected_products.is_empty());
        assert_eq!(products, before);
        assert_eq!(store.save_count(), saves_before);
        assert_eq!(audit.entries(), log_before);
    }

    #[test]
    fn declined_confirmation_leaves_files_byte_for_byte() {
        use crate::store::DataStore;
        use crate::test_utils::TestEnv;
        use std::fs;

        let mut env = TestEnv::new();
        env.store.ensure_storage().unwrap();
        let mut products = Vec::new();
        create::run(
            &mut env.store,
            &env.audit,
            &mut products,
            NewProduct::new("Casaco, lã", 199.9, 1),
        )
        .unwrap();
        let csv_before = fs::read(&env.paths.products_file).unwrap();
        let log_before = fs::read(&env.paths.log_file).unwrap();

        run(&mut env.store, &env.audit, &mut products, "1", false).unwrap();

        assert_eq!(fs::read(&env.paths.products_file).unwrap(), csv_before);
        assert_eq!(fs::read(&env.paths.log_file).unwrap(), log_before);
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let (mut store, audit, mut products) = seeded(&["A"]);
        let err = run(&mut store, &audit, &mut products, "9", true);
        assert!(matches!(err, Err(DressError::ProductNotFound(_))));
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn ids_stay_unique_across_creates_and_deletes() {
        let (mut store, audit, mut products) = seeded(&["A", "B", "C"]);
        run(&mut store, &audit, &mut products, "3", true).unwrap();
        run(&mut store, &audit, &mut products, "1", true).unwrap();
        assert_eq!(generate_id(&products), "3");

        for name in ["D", "E"] {
            create::run(&mut store, &audit, &mut products, NewProduct::new(name, 1.0, 1))
                .unwrap();
        }

        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
