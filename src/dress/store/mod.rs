//! # Storage Layer
//!
//! The [`DataStore`] trait is the record store: whole-collection load and save
//! of [`Product`]s. Business logic in `commands/` only talks to the trait, so
//! it can be exercised without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production CSV storage
//!   - One file, header row first, one product per row
//!   - Saves rewrite the whole file through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! dados/
//! ├── produtos.csv   # id,nome,categoria,tamanho,preco,quantidade,descricao
//! └── log.txt        # audit trail, see crate::audit
//! ```
//!
//! Id generation and lookup operate on an already loaded collection and live
//! here as free functions ([`generate_id`], [`find_by_id`]).

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

/// Abstract interface for product persistence.
///
/// There are no partial writes: callers hand the full collection to
/// [`DataStore::save_all`] after every mutation.
pub trait DataStore {
    /// Create whatever backing storage is missing. Must be idempotent.
    fn ensure_storage(&self) -> Result<()>;

    /// Load every product, in storage order. Missing storage is an empty collection.
    fn load_all(&self) -> Result<Vec<Product>>;

    /// Replace the stored collection with `products`.
    fn save_all(&mut self, products: &[Product]) -> Result<()>;
}

/// Next free id: one past the largest numeric id, or `"1"`.
///
/// Ids that are not made of ASCII digits only are ignored. The arithmetic is
/// done on the decimal text, so ids of any length work.
pub fn generate_id(products: &[Product]) -> String {
    products
        .iter()
        .filter(|p| !p.id.is_empty() && p.id.bytes().all(|b| b.is_ascii_digit()))
        .map(|p| strip_leading_zeros(&p.id))
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .map_or_else(|| "1".to_string(), increment_decimal)
}

fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// `digits` must be non-empty ASCII digits without leading zeros.
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    // Every digit carried
    let mut out = String::with_capacity(bytes.len() + 1);
    out.push('1');
    out.push_str(&String::from_utf8_lossy(&bytes));
    out
}

/// Linear scan by id. Ids compare as text, so `"07"` does not match `"7"`.
pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<(&'a Product, usize)> {
    products
        .iter()
        .enumerate()
        .find(|(_, p)| p.id == id)
        .map(|(idx, p)| (p, idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewProduct;

    fn with_ids(ids: &[&str]) -> Vec<Product> {
        ids.iter()
            .map(|id| NewProduct::new("Item", 1.0, 1).into_product(id.to_string()))
            .collect()
    }

    #[test]
    fn generate_id_picks_max_plus_one() {
        assert_eq!(generate_id(&with_ids(&["3", "1"])), "4");
    }

    #[test]
    fn generate_id_on_empty_collection() {
        assert_eq!(generate_id(&[]), "1");
    }

    #[test]
    fn generate_id_ignores_non_numeric_ids() {
        assert_eq!(generate_id(&with_ids(&["abc"])), "1");
        assert_eq!(generate_id(&with_ids(&["abc", "-5", "2"])), "3");
    }

    #[test]
    fn generate_id_reads_leading_zeros_numerically() {
        assert_eq!(generate_id(&with_ids(&["07", "3"])), "8");
    }

    #[test]
    fn generate_id_beyond_u64_range() {
        assert_eq!(
            generate_id(&with_ids(&["99999999999999999999", "1"])),
            "100000000000000000000"
        );
        assert_eq!(
            generate_id(&with_ids(&["18446744073709551615"])),
            "18446744073709551616"
        );
    }

    #[test]
    fn generate_id_compares_by_magnitude() {
        assert_eq!(generate_id(&with_ids(&["9", "10", "0000011"])), "12");
        assert_eq!(generate_id(&with_ids(&["0"])), "1");
        assert_eq!(generate_id(&with_ids(&["199"])), "200");
    }

    #[test]
    fn find_by_id_returns_index() {
        let products = with_ids(&["1", "5", "9"]);
        let (found, idx) = find_by_id(&products, "5").unwrap();
        assert_eq!(found.id, "5");
        assert_eq!(idx, 1);
    }

    #[test]
    fn find_by_id_compares_as_text() {
        let products = with_ids(&["7"]);
        assert!(find_by_id(&products, "07").is_none());
        assert!(find_by_id(&products, "7").is_some());
    }
}
