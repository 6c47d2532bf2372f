//! Filter engine
//!
//! `FilterEngine` owns the product set and the shopper's [`FilterSelection`],
//! and derives the visible product list from them. Every mutation goes
//! through the methods below so the two price mechanisms stay mutually
//! exclusive:
//!
//! - checkbox-style changes (color, size, sleeve, bracket, chip removal)
//!   put the numeric interval back to the full observed range
//! - moving the interval clears every selected bracket label and leaves the
//!   other facets alone
//!
//! # Examples
//!
//! ```
//! use vitrine::catalog::Product;
//! use vitrine::filters::FilterEngine;
//!
//! let mut engine = FilterEngine::new(vec![
//!     Product::new("1", 500.0).with_colors(["Red"]).with_sizes(["M"]),
//!     Product::new("2", 700.0).with_colors(["Blue"]).with_sizes(["M"]),
//! ]);
//! engine.toggle_color("Red");
//! let ids: Vec<_> = engine.filtered_products().iter().map(|p| p.id.as_str()).collect();
//! assert_eq!(ids, ["1"]);
//! ```

use super::brackets::{self, PriceBracket};
use super::types::{ActiveFilter, FilterKind, FilterSelection, PriceInfo, PriceInterval, SortMode};
use super::vocabulary::{COLORS, FilterOptions, SIZES};
use crate::catalog::{CatalogError, Product, ProductSource, SleeveType};
use std::cmp::Ordering;

/// Selection state plus derivation of the filtered, sorted product list
#[derive(Debug, Clone)]
pub struct FilterEngine {
    products: Vec<Product>,
    price_info: PriceInfo,
    brackets: Vec<PriceBracket>,
    selection: FilterSelection,
}

impl FilterEngine {
    /// Create an engine over `products` with nothing selected
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let price_info = PriceInfo::from_products(&products);
        Self {
            brackets: brackets::generate(price_info),
            selection: FilterSelection::new(price_info.full_interval()),
            price_info,
            products,
        }
    }

    /// Create an engine from a product source
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the source cannot produce its products.
    pub fn from_source(source: &dyn ProductSource) -> Result<Self, CatalogError> {
        Ok(Self::new(source.products()?))
    }

    /// Replace the product set
    ///
    /// Price extremes and brackets are recomputed, the interval returns to
    /// the new full range, and selected bracket labels that no longer exist
    /// are dropped. Facet selections are kept.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.price_info = PriceInfo::from_products(&products);
        self.brackets = brackets::generate(self.price_info);
        self.products = products;
        self.selection.price_interval = self.price_info.full_interval();

        let brackets = &self.brackets;
        self.selection
            .price_brackets
            .retain(|label| brackets.iter().any(|b| &b.label == label));
        log::debug!(
            "product set replaced: {} products, price range {}",
            self.products.len(),
            self.selection.price_interval
        );
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub const fn price_info(&self) -> PriceInfo {
        self.price_info
    }

    #[must_use]
    pub fn brackets(&self) -> &[PriceBracket] {
        &self.brackets
    }

    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub const fn price_interval(&self) -> PriceInterval {
        self.selection.price_interval
    }

    #[must_use]
    pub const fn sort_mode(&self) -> SortMode {
        self.selection.sort
    }

    /// Whether the numeric interval currently narrows the result
    ///
    /// The full observed range is the neutral state and filters nothing.
    #[must_use]
    pub fn is_price_interval_active(&self) -> bool {
        self.selection.price_interval != self.price_info.full_interval()
    }

    /// Filter panel vocabulary for the current product set
    #[must_use]
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            colors: &COLORS,
            sizes: &SIZES,
            sleeves: SleeveType::SELECTABLE,
            price_brackets: self.brackets.clone(),
            min_price: self.price_info.min_price,
            max_price: self.price_info.max_price,
            slider_step: brackets::slider_step(self.price_info),
        }
    }

    /// Toggle a color; returns true if it is now selected
    pub fn toggle_color(&mut self, color: &str) -> bool {
        let selected = toggle(&mut self.selection.colors, color);
        self.reset_price_interval();
        log::trace!("color '{color}' selected={selected}");
        selected
    }

    /// Toggle a size; returns true if it is now selected
    pub fn toggle_size(&mut self, size: &str) -> bool {
        let selected = toggle(&mut self.selection.sizes, size);
        self.reset_price_interval();
        log::trace!("size '{size}' selected={selected}");
        selected
    }

    /// Toggle a sleeve style; returns true if it is now selected
    ///
    /// [`SleeveType::None`] is not selectable and leaves the state untouched.
    pub fn toggle_sleeve(&mut self, sleeve: SleeveType) -> bool {
        if sleeve == SleeveType::None {
            return false;
        }
        let sleeves = &mut self.selection.sleeves;
        let selected = if sleeves.remove(&sleeve) {
            false
        } else {
            sleeves.insert(sleeve);
            true
        };
        self.reset_price_interval();
        log::trace!("sleeve '{sleeve}' selected={selected}");
        selected
    }

    /// Toggle a price bracket by label; returns true if it is now selected
    pub fn toggle_price_bracket(&mut self, label: &str) -> bool {
        let selected = toggle(&mut self.selection.price_brackets, label);
        self.reset_price_interval();
        log::trace!("bracket '{label}' selected={selected}");
        selected
    }

    /// Narrow the numeric price interval
    ///
    /// Bounds are clamped into the observed range and reordered if needed.
    /// Every selected bracket label is cleared.
    pub fn set_price_interval(&mut self, low: f64, high: f64) {
        let PriceInfo { min_price, max_price } = self.price_info;
        self.selection.price_interval = PriceInterval { low, high }.clamped(min_price, max_price);
        self.selection.price_brackets.clear();
        log::trace!("price interval set to {}", self.selection.price_interval);
    }

    pub const fn set_sort(&mut self, sort: SortMode) {
        self.selection.sort = sort;
    }

    /// Remove one selected value from a facet
    ///
    /// Unknown values are ignored. The interval always returns to the full
    /// range, as with the toggles.
    pub fn remove_filter(&mut self, kind: FilterKind, value: &str) {
        let selection = &mut self.selection;
        match kind {
            FilterKind::Color => {
                selection.colors.remove(value);
            }
            FilterKind::Size => {
                selection.sizes.remove(value);
            }
            FilterKind::Sleeve => {
                if let Some(sleeve) = SleeveType::from_label(value) {
                    selection.sleeves.remove(&sleeve);
                }
            }
            FilterKind::Price => {
                selection.price_brackets.remove(value);
            }
        }
        self.reset_price_interval();
    }

    /// Remove an active filter chip
    pub fn remove_active(&mut self, filter: &ActiveFilter) {
        self.remove_filter(filter.kind(), filter.value());
    }

    /// Selected facet values in facet order: colors, sizes, sleeves, brackets
    #[must_use]
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let s = &self.selection;
        s.colors
            .iter()
            .cloned()
            .map(ActiveFilter::Color)
            .chain(s.sizes.iter().cloned().map(ActiveFilter::Size))
            .chain(s.sleeves.iter().copied().map(ActiveFilter::Sleeve))
            .chain(s.price_brackets.iter().cloned().map(ActiveFilter::PriceBracket))
            .collect()
    }

    /// Clear every selection, restore the full interval and default order
    pub fn reset_all(&mut self) {
        self.selection = FilterSelection::new(self.price_info.full_interval());
        log::debug!("filters reset");
    }

    /// Replace the whole selection with a saved one
    ///
    /// The interval is clamped into the current observed range. A selection
    /// that carries bracket labels is restored with the full interval so the
    /// two price mechanisms never combine.
    pub fn restore(&mut self, selection: FilterSelection) {
        let PriceInfo { min_price, max_price } = self.price_info;
        let mut selection = selection;
        selection.sleeves.remove(&SleeveType::None);
        selection.price_interval = if selection.price_brackets.is_empty() {
            selection.price_interval.clamped(min_price, max_price)
        } else {
            self.price_info.full_interval()
        };
        self.selection = selection;
    }

    /// The filtered and sorted product list
    ///
    /// Facets apply in a fixed order (color, size, sleeve, interval,
    /// brackets). Values within a facet combine with OR, facets with AND,
    /// and an empty facet constrains nothing.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        let s = &self.selection;
        let interval = self.is_price_interval_active().then_some(s.price_interval);
        let selected_brackets: Vec<&PriceBracket> = self
            .brackets
            .iter()
            .filter(|b| s.price_brackets.contains(&b.label))
            .collect();

        let mut result: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| s.colors.is_empty() || p.has_any_color(&s.colors))
            .filter(|p| s.sizes.is_empty() || p.has_any_size(&s.sizes))
            .filter(|p| s.sleeves.is_empty() || s.sleeves.contains(&p.sleeves))
            .filter(|p| interval.is_none_or(|i| i.contains(p.price)))
            .filter(|p| selected_brackets.is_empty() || selected_brackets.iter().any(|b| b.contains(p.price)))
            .collect();

        sort_products(&mut result, s.sort);
        log::debug!(
            "{} of {} products match (sort: {})",
            result.len(),
            self.products.len(),
            s.sort
        );
        result
    }

    fn reset_price_interval(&mut self) {
        self.selection.price_interval = self.price_info.full_interval();
    }
}

fn toggle(set: &mut std::collections::BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

/// Stable in-place ordering; `Default` keeps input order
fn sort_products(products: &mut [&Product], sort: SortMode) {
    let compare: fn(&&Product, &&Product) -> Ordering = match sort {
        SortMode::Default => return,
        SortMode::PriceAsc => |a, b| a.price.total_cmp(&b.price),
        SortMode::PriceDesc => |a, b| b.price.total_cmp(&a.price),
        SortMode::NewestFirst => |a, b| b.id.cmp(&a.id),
    };
    products.sort_by(compare);
}
