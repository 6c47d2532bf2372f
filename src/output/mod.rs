//! Output formatting for CLI display
//!
//! Helpers that turn products, brackets and intervals into terminal lines,
//! plus the [`OutputWriter`] abstraction the commands print through.

pub mod writer;

pub use writer::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};

use crate::catalog::{Product, SleeveType};
use crate::filters::{PriceBracket, PriceInterval, group_digits};
use colored::Colorize;

/// Format an amount with the currency symbol and thousands separators
///
/// Whole amounts print without decimals; fractional ones keep two places.
#[must_use]
pub fn format_price(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let whole = amount.abs().trunc();
    let fraction = amount.abs() - whole;
    if fraction < 0.005 {
        format!("{sign}{symbol}{}", group_digits(whole))
    } else {
        let cents = format!("{fraction:.2}");
        // "0.50" -> ".50"; a fraction that rounds up to 1.00 carries into the whole part
        if cents.starts_with('1') {
            format!("{sign}{symbol}{}", group_digits(whole + 1.0))
        } else {
            format!("{sign}{symbol}{}{}", group_digits(whole), &cents[1..])
        }
    }
}

/// Format an interval as `low - high`
#[must_use]
pub fn format_interval(interval: PriceInterval, symbol: &str) -> String {
    format!("{} - {}", format_price(interval.low, symbol), format_price(interval.high, symbol))
}

/// Format a product for the listing
///
/// In quiet mode only the id is printed so output can be piped.
#[must_use]
pub fn product_line(product: &Product, symbol: &str, quiet: bool) -> String {
    if quiet {
        return product.id.clone();
    }

    let mut line = format!(
        "  {} {} {}",
        product.id.bold(),
        product.name,
        format_price(product.price, symbol).green()
    );
    if let Some(original) = product.original_price
        && original > product.price
    {
        line.push_str(&format!(" {}", format_price(original, symbol).dimmed().strikethrough()));
    }
    if !product.colors.is_empty() {
        line.push_str(&format!(" [{}]", product.colors.join(", ")));
    }
    if !product.sizes.is_empty() {
        line.push_str(&format!(" ({})", product.sizes.join(", ")));
    }
    if product.sleeves != SleeveType::None {
        line.push_str(&format!(" {}", product.sleeves.label().cyan()));
    }
    if !product.in_stock {
        line.push_str(&format!(" {}", "out of stock".red()));
    }
    line
}

/// Format a bracket with the number of products it holds
#[must_use]
pub fn bracket_line(bracket: &PriceBracket, count: usize, selected: bool) -> String {
    let marker = if selected { "[x]" } else { "[ ]" };
    format!("  {marker} {} ({count})", bracket.label)
}
