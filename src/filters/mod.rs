//! Product filtering
//!
//! This module turns a product set and a shopper's selections into the list
//! of products to show.
//!
//! # Features
//!
//! - **Facets**: colors, sizes and sleeve styles, OR within a facet, AND across facets
//! - **Price brackets**: named checkbox ranges generated from the catalog's price extremes
//! - **Price interval**: a numeric `[low, high]` range driven by the slider
//! - **Sorting**: price ascending/descending, newest first, or catalog order
//!
//! Bracket selection and the numeric interval are mutually exclusive; see
//! [`FilterEngine`] for how the engine keeps them that way.

pub mod brackets;
pub mod engine;
pub mod error;
pub mod types;
pub mod vocabulary;

pub use brackets::{PriceBracket, group_digits, slider_step};
pub use engine::FilterEngine;
pub use error::FilterError;
pub use types::{
    ActiveFilter, FilterKind, FilterSelection, PriceInfo, PriceInterval, SortMode, parse_sleeve,
};
pub use vocabulary::{COLORS, ColorSwatch, FilterOptions, SIZES, color_hex};
