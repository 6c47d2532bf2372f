//! Product catalog
//!
//! Products are read-only input to the filtering core. This module defines
//! the product record and the [`ProductSource`] seam through which the core
//! receives them.
//!
//! # Examples
//!
//! ```no_run
//! use vitrine::catalog::{JsonCatalog, ProductSource};
//!
//! let catalog = JsonCatalog::new("products.json");
//! let products = catalog.products().unwrap();
//! println!("{} products", products.len());
//! ```

pub mod error;
pub mod scope;
pub mod source;
pub mod types;

pub use error::CatalogError;
pub use scope::{CatalogScope, ScopedSource};
pub use source::{InMemoryCatalog, JsonCatalog, ProductSource};
pub use types::{Category, Product, SleeveType};
