//! Collection scoping
//!
//! A storefront collection page (a category, the new arrivals) narrows the
//! catalog before any filter sees it, so the observed price range and the
//! generated brackets describe the collection rather than the whole shop.

use super::error::CatalogError;
use super::source::ProductSource;
use super::types::{Category, Product};
use std::fmt;

/// Which products a collection shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogScope {
    pub category: Option<Category>,
    pub new_arrivals: bool,
}

impl CatalogScope {
    /// The whole catalog
    #[must_use]
    pub const fn all() -> Self {
        Self {
            category: None,
            new_arrivals: false,
        }
    }

    #[must_use]
    pub const fn category(category: Category) -> Self {
        Self {
            category: Some(category),
            new_arrivals: false,
        }
    }

    #[must_use]
    pub const fn new_arrivals() -> Self {
        Self {
            category: None,
            new_arrivals: true,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        self.category.is_none() && !self.new_arrivals
    }

    #[must_use]
    pub fn includes(&self, product: &Product) -> bool {
        self.category.is_none_or(|c| product.category == c)
            && (!self.new_arrivals || product.is_new_arrival)
    }

    /// Keep the products in scope, preserving catalog order
    #[must_use]
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        if self.is_all() {
            return products;
        }
        products.into_iter().filter(|p| self.includes(p)).collect()
    }
}

impl fmt::Display for CatalogScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.category, self.new_arrivals) {
            (None, false) => f.write_str("all products"),
            (None, true) => f.write_str("new arrivals"),
            (Some(category), false) => write!(f, "{category}"),
            (Some(category), true) => write!(f, "new arrivals in {category}"),
        }
    }
}

/// A [`ProductSource`] limited to a collection
#[derive(Debug, Clone)]
pub struct ScopedSource<S> {
    inner: S,
    scope: CatalogScope,
}

impl<S: ProductSource> ScopedSource<S> {
    #[must_use]
    pub const fn new(inner: S, scope: CatalogScope) -> Self {
        Self { inner, scope }
    }

    #[must_use]
    pub const fn scope(&self) -> CatalogScope {
        self.scope
    }
}

impl<S: ProductSource> ProductSource for ScopedSource<S> {
    fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let all = self.inner.products()?;
        let total = all.len();
        let scoped = self.scope.apply(all);
        log::debug!("scope '{}' kept {} of {total} products", self.scope, scoped.len());
        Ok(scoped)
    }
}
