//! Filter vocabulary offered to shoppers
//!
//! Colors and sizes are fixed lists independent of the catalog; price
//! brackets and the price domain are derived from the current products.

use super::brackets::PriceBracket;
use crate::catalog::SleeveType;
use serde::Serialize;

/// A named color and the swatch used to display it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub hex: &'static str,
}

const fn swatch(name: &'static str, hex: &'static str) -> ColorSwatch {
    ColorSwatch { name, hex }
}

/// Selectable colors, in display order
pub const COLORS: [ColorSwatch; 23] = [
    swatch("Brown", "#964B00"),
    swatch("Blue", "#0000FF"),
    swatch("Navy Blue", "#000080"),
    swatch("Light Blue", "#ADD8E6"),
    swatch("Black", "#000000"),
    swatch("Orange", "#FFA500"),
    swatch("Yellow", "#FFFF00"),
    swatch("Red", "#FF0000"),
    swatch("Green", "#008000"),
    swatch("Purple", "#800080"),
    swatch("Pink", "#FFC0CB"),
    swatch("Gray", "#808080"),
    swatch("Maroon", "#800000"),
    swatch("Teal", "#008080"),
    swatch("Olive", "#808000"),
    swatch("Lime", "#00FF00"),
    swatch("Aqua", "#00FFFF"),
    swatch("Silver", "#C0C0C0"),
    swatch("Navy", "#000080"),
    swatch("Fuchsia", "#FF00FF"),
    swatch("Coral", "#FF7F50"),
    swatch("Indigo", "#4B0082"),
    swatch("White", "#FFFFFF"),
];

/// Swatch for colors outside the fixed list
pub const FALLBACK_HEX: &str = "#CCCCCC";

/// Selectable sizes: letter sizes then waist sizes
pub const SIZES: [&str; 17] = [
    "XS", "S", "M", "L", "XL", "2XL", "3XL", "4XL", "5XL", "28", "30", "32", "34", "36", "38",
    "40", "42",
];

/// Display hex for a color name
#[must_use]
pub fn color_hex(name: &str) -> &'static str {
    COLORS
        .iter()
        .find(|c| c.name == name)
        .map_or(FALLBACK_HEX, |c| c.hex)
}

/// Everything a rendering layer needs to draw the filter panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub colors: &'static [ColorSwatch],
    pub sizes: &'static [&'static str],
    pub sleeves: [SleeveType; 3],
    pub price_brackets: Vec<PriceBracket>,
    pub min_price: f64,
    pub max_price: f64,
    /// Suggested slider granularity for this price domain
    pub slider_step: f64,
}
