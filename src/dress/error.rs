use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DressError {
    #[error("Product with ID {0} not found")]
    ProductNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Log file not found: {}", .0.display())]
    LogNotFound(PathBuf),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, DressError>;
