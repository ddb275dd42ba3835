use super::DataStore;
use crate::error::{DressError, Result};
use crate::model::Product;

/// In-memory product store for testing.
///
/// `save_count` tracks successful writes so tests can assert that a workflow
/// did not persist anything.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn stored(&self) -> &[Product] {
        &self.products
    }
}

impl DataStore for InMemoryStore {
    fn ensure_storage(&self) -> Result<()> {
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn save_all(&mut self, products: &[Product]) -> Result<()> {
        if self.simulate_write_error {
            return Err(DressError::Store("Simulated write error".to_string()));
        }
        self.products = products.to_vec();
        self.saves += 1;
        Ok(())
    }
}
