//! Options command implementation
//!
//! Prints what a filter panel would offer for the current catalog.

use super::{Context, Result, apply_filter_args};
use crate::cli::OptionsArgs;
use crate::output::{OutputWriter, bracket_line, format_price};
use colored::Colorize;

/// Show the filter vocabulary, the generated brackets and the price domain
///
/// Brackets and the price range describe the scoped collection. Filters in
/// `args` mark their brackets as selected.
///
/// # Errors
///
/// Returns `VitrineError` if the catalog cannot be loaded or a filter value
/// is invalid.
pub fn execute(args: &OptionsArgs, ctx: &Context, output: &dyn OutputWriter) -> Result<()> {
    let scope = args.scope.scope();
    let mut engine = ctx.engine(scope)?;
    apply_filter_args(&mut engine, &args.filters)?;
    let options = engine.options();
    let symbol = ctx.symbol();

    if ctx.quiet {
        for bracket in &options.price_brackets {
            output.write(&bracket.label);
        }
        return Ok(());
    }

    output.write(&"Colors:".bold().to_string());
    for swatch in options.colors {
        output.write(&format!("  {:<12} {}", swatch.name, swatch.hex.dimmed()));
    }

    output.write(&"Sizes:".bold().to_string());
    output.write(&format!("  {}", options.sizes.join(", ")));

    output.write(&"Sleeves:".bold().to_string());
    let sleeves: Vec<&str> = options.sleeves.iter().map(|s| s.label()).collect();
    output.write(&format!("  {}", sleeves.join(", ")));

    output.write(&"Price brackets:".bold().to_string());
    let selected = &engine.selection().price_brackets;
    for bracket in &options.price_brackets {
        let count = engine
            .products()
            .iter()
            .filter(|p| bracket.contains(p.price))
            .count();
        output.write(&bracket_line(bracket, count, selected.contains(&bracket.label)));
    }

    let step = ctx.config.slider_step.unwrap_or(options.slider_step);
    if !scope.is_all() {
        output.info(&format!("Collection: {scope} ({} products)", engine.products().len()));
    }
    output.info(&format!(
        "Price range: {} - {} (slider step {})",
        format_price(options.min_price, symbol),
        format_price(options.max_price, symbol),
        step
    ));
    Ok(())
}
