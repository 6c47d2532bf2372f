//! Filter selection state
//!
//! This module defines the values the engine keeps between interactions:
//! - `FilterSelection`: chosen facet values, the numeric price interval and sort order
//! - `PriceInterval`: closed `[low, high]` price range
//! - `PriceInfo`: observed price extremes of the current product set
//! - `SortMode`, `FilterKind`, `ActiveFilter`: typed facet vocabulary

use super::error::FilterError;
use crate::catalog::{Product, SleeveType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Price domain used when there are no products to observe
pub const EMPTY_CATALOG_PRICE_RANGE: (f64, f64) = (0.0, 10_000.0);

/// Observed price extremes of a product set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceInfo {
    pub min_price: f64,
    pub max_price: f64,
}

impl PriceInfo {
    /// Compute the price extremes, falling back to
    /// [`EMPTY_CATALOG_PRICE_RANGE`] for an empty set
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let mut prices = products.iter().map(|p| p.price);
        let Some(first) = prices.next() else {
            let (min_price, max_price) = EMPTY_CATALOG_PRICE_RANGE;
            return Self { min_price, max_price };
        };
        let (min_price, max_price) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self { min_price, max_price }
    }

    /// Width of the observed range
    #[must_use]
    pub fn span(self) -> f64 {
        self.max_price - self.min_price
    }

    /// The neutral interval covering every observed price
    #[must_use]
    pub const fn full_interval(self) -> PriceInterval {
        PriceInterval {
            low: self.min_price,
            high: self.max_price,
        }
    }
}

/// Closed price interval `[low, high]` with `low <= high`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceInterval {
    pub low: f64,
    pub high: f64,
}

impl PriceInterval {
    /// Build an interval, swapping the bounds if they arrive reversed
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self { low: high, high: low }
        }
    }

    /// Clamp both bounds into `[min, max]`
    ///
    /// A NaN bound is replaced by the corresponding domain edge.
    #[must_use]
    pub fn clamped(self, min: f64, max: f64) -> Self {
        let clamp = |v: f64, fallback: f64| if v.is_nan() { fallback } else { v.clamp(min, max) };
        Self::new(clamp(self.low, min), clamp(self.high, max))
    }

    #[must_use]
    pub fn contains(self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.high - self.low
    }
}

impl fmt::Display for PriceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Product ordering applied after filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep catalog order
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "price-low-high")]
    PriceAsc,
    #[serde(rename = "price-high-low")]
    PriceDesc,
    /// Reverse lexicographic product id
    #[serde(rename = "newest")]
    NewestFirst,
}

impl SortMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-low-high",
            Self::PriceDesc => "price-high-low",
            Self::NewestFirst => "newest",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "price-low-high" | "price-asc" => Ok(Self::PriceAsc),
            "price-high-low" | "price-desc" => Ok(Self::PriceDesc),
            "newest" => Ok(Self::NewestFirst),
            other => Err(FilterError::UnknownSortMode(other.to_string())),
        }
    }
}

/// Filter facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Color,
    Size,
    Sleeve,
    /// Checkbox price brackets (the slider interval is not a removable chip)
    Price,
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(Self::Color),
            "size" => Ok(Self::Size),
            "sleeve" | "sleeves" => Ok(Self::Sleeve),
            "price" => Ok(Self::Price),
            other => Err(FilterError::UnknownKind(other.to_string())),
        }
    }
}

/// A single selected facet value, as shown in the "active filters" row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveFilter {
    Color(String),
    Size(String),
    Sleeve(SleeveType),
    PriceBracket(String),
}

impl ActiveFilter {
    /// Build a typed filter value from its facet and text form
    ///
    /// # Errors
    ///
    /// Returns `FilterError::UnknownSleeve` if a sleeve value is not one of
    /// the selectable labels.
    pub fn parse(kind: FilterKind, value: &str) -> Result<Self, FilterError> {
        Ok(match kind {
            FilterKind::Color => Self::Color(value.to_string()),
            FilterKind::Size => Self::Size(value.to_string()),
            FilterKind::Sleeve => Self::Sleeve(parse_sleeve(value)?),
            FilterKind::Price => Self::PriceBracket(value.to_string()),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        match self {
            Self::Color(_) => FilterKind::Color,
            Self::Size(_) => FilterKind::Size,
            Self::Sleeve(_) => FilterKind::Sleeve,
            Self::PriceBracket(_) => FilterKind::Price,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Color(v) | Self::Size(v) | Self::PriceBracket(v) => v,
            Self::Sleeve(s) => s.label(),
        }
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(v) => write!(f, "Color: {v}"),
            Self::Size(v) => write!(f, "Size: {v}"),
            Self::Sleeve(s) => write!(f, "Sleeves: {s}"),
            Self::PriceBracket(v) => write!(f, "Price: {v}"),
        }
    }
}

/// Parse a selectable sleeve label or wire value
///
/// # Errors
///
/// Returns `FilterError::UnknownSleeve` for anything else, including `none`.
pub fn parse_sleeve(value: &str) -> Result<SleeveType, FilterError> {
    value
        .parse::<SleeveType>()
        .ok()
        .filter(|s| *s != SleeveType::None)
        .ok_or_else(|| FilterError::UnknownSleeve(value.to_string()))
}

/// Everything a shopper has chosen
///
/// Exactly one price mechanism is in effect at a time: either some bracket
/// labels are selected and `price_interval` is the full observed range, or
/// no labels are selected and `price_interval` may be narrowed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub sleeves: BTreeSet<SleeveType>,
    /// Bracket labels, by name rather than position
    pub price_brackets: BTreeSet<String>,
    pub price_interval: PriceInterval,
    pub sort: SortMode,
}

impl FilterSelection {
    /// Empty selection over the given price domain
    #[must_use]
    pub const fn new(full: PriceInterval) -> Self {
        Self {
            colors: BTreeSet::new(),
            sizes: BTreeSet::new(),
            sleeves: BTreeSet::new(),
            price_brackets: BTreeSet::new(),
            price_interval: full,
            sort: SortMode::Default,
        }
    }

    /// True when no facet has a selection (sort order is not a filter)
    #[must_use]
    pub fn has_no_facets(&self) -> bool {
        self.colors.is_empty()
            && self.sizes.is_empty()
            && self.sleeves.is_empty()
            && self.price_brackets.is_empty()
    }
}
