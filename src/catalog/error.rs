//! Error types for catalog loading
//!
//! Catalog errors cover reading a product file, decoding it, and rejecting
//! records that the filtering core cannot reason about (negative prices,
//! missing identifiers).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading products
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file does not exist
    #[error("Catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The catalog could not be decoded
    #[error("Invalid catalog format: {0}")]
    Format(#[from] serde_json::Error),

    /// A product record failed validation
    #[error("Invalid product '{id}': {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Two records share the same identifier
    #[error("Duplicate product id '{0}'")]
    DuplicateId(String),
}

impl CatalogError {
    pub(crate) fn invalid(id: &str, reason: impl Into<String>) -> Self {
        Self::InvalidProduct {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
