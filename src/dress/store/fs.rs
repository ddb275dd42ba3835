use super::DataStore;
use crate::error::{DressError, Result};
use crate::model::{Product, RawProduct, CSV_HEADERS};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// CSV-backed product store.
pub struct FileStore {
    products_file: PathBuf,
}

impl FileStore {
    pub fn new(products_file: PathBuf) -> Self {
        Self { products_file }
    }

    pub fn products_file(&self) -> &Path {
        &self.products_file
    }

    fn store_dir(&self) -> PathBuf {
        match self.products_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(DressError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .products_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("products");
        self.store_dir()
            .join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }

    fn write_rows(path: &Path, products: &[Product]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(CSV_HEADERS)?;
        for product in products {
            writer.serialize(product)?;
        }
        writer.flush().map_err(DressError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn ensure_storage(&self) -> Result<()> {
        self.ensure_dir(&self.store_dir())?;
        if !self.products_file.exists() {
            debug!(path = %self.products_file.display(), "creating empty products file");
            Self::write_rows(&self.products_file, &[])?;
        }
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Product>> {
        let file = match fs::File::open(&self.products_file) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DressError::Io(e)),
        };

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let mut products = Vec::new();

        for (row, record) in reader.deserialize::<RawProduct>().enumerate() {
            match record {
                Ok(raw) => {
                    if let Some(product) = raw.into_product() {
                        products.push(product);
                    }
                }
                Err(e) if e.is_io_error() => return Err(DressError::Csv(e)),
                Err(e) => {
                    // Row numbers are 1-based and skip the header line.
                    warn!(row = row + 1, error = %e, "skipping unreadable product row");
                }
            }
        }

        debug!(count = products.len(), path = %self.products_file.display(), "loaded products");
        Ok(products)
    }

    fn save_all(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_dir(&self.store_dir())?;

        // Atomic write: a crash mid-save leaves the previous file intact
        let tmp_file = self.tmp_path();
        if let Err(e) = Self::write_rows(&tmp_file, products) {
            let _ = fs::remove_file(&tmp_file);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp_file, &self.products_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(DressError::Io(e));
        }

        debug!(count = products.len(), path = %self.products_file.display(), "saved products");
        Ok(())
    }
}
