//! Products command implementation

use super::{Context, Result, apply_filter_args};
use crate::cli::ProductsArgs;
use crate::filters::FilterEngine;
use crate::output::{OutputWriter, format_interval, product_line};

/// List the products that match the filters
///
/// A preset, if named, is restored first and its use recorded; the other
/// options then refine it.
///
/// # Errors
///
/// Returns `VitrineError` if the catalog or preset cannot be loaded or a
/// filter value is invalid.
pub fn execute(args: &ProductsArgs, ctx: &Context, output: &dyn OutputWriter) -> Result<()> {
    let mut engine = ctx.engine(args.scope.scope())?;

    if let Some(name) = &args.preset {
        let presets = ctx.presets()?;
        let preset = presets.get(name)?;
        engine.restore(preset.selection.to_selection(engine.price_info().full_interval()));
        presets.record_use(name)?;
        log::debug!("restored preset '{name}'");
    }

    apply_filter_args(&mut engine, &args.filters)?;
    print_products(&engine, ctx, output);
    Ok(())
}

/// Print the active filters and the filtered list
pub fn print_products(engine: &FilterEngine, ctx: &Context, output: &dyn OutputWriter) {
    let products = engine.filtered_products();

    if !ctx.quiet {
        let active = engine.active_filters();
        if !active.is_empty() {
            let chips: Vec<String> = active.iter().map(ToString::to_string).collect();
            output.info(&format!("Filters: {}", chips.join(" | ")));
        }
        if engine.is_price_interval_active() {
            output.info(&format!("Price: {}", format_interval(engine.price_interval(), ctx.symbol())));
        }
        output.info(&format!(
            "Showing {} of {} products (sorted: {})",
            products.len(),
            engine.products().len(),
            engine.sort_mode()
        ));
    }

    if products.is_empty() {
        if !ctx.quiet {
            output.warning("No products match the current filters");
        }
        return;
    }

    for product in products {
        output.write(&product_line(product, ctx.symbol(), ctx.quiet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::cli::{FilterArgs, ScopeArgs};
    use crate::config::VitrineConfig;
    use crate::output::{BufferWriter, MessageLevel};
    use crate::presets::{PresetManager, PresetSelection};
    use crate::testing::wardrobe;
    use std::path::Path;
    use tempfile::TempDir;

    fn context(dir: &Path, quiet: bool) -> Context {
        let catalog = dir.join("products.json");
        std::fs::write(&catalog, serde_json::to_string(&wardrobe()).unwrap()).unwrap();
        let config = VitrineConfig {
            presets_path: Some(dir.join("presets.toml")),
            ..Default::default()
        };
        Context::new(config, quiet, Some(catalog))
    }

    #[test]
    fn test_quiet_listing_prints_ids_only() {
        let dir = TempDir::new().unwrap();
        let ctx = context(dir.path(), true);
        let output = BufferWriter::new();
        let args = ProductsArgs {
            filters: FilterArgs {
                colors: vec!["Red".to_string()],
                ..Default::default()
            },
            preset: None,
            ..Default::default()
        };

        execute(&args, &ctx, &output).unwrap();
        assert_eq!(output.lines(MessageLevel::Normal), vec!["w01", "w06"]);
        assert!(output.lines(MessageLevel::Info).is_empty());
    }

    #[test]
    fn test_empty_result_warns() {
        let dir = TempDir::new().unwrap();
        let ctx = context(dir.path(), false);
        let output = BufferWriter::new();
        let args = ProductsArgs {
            filters: FilterArgs {
                colors: vec!["Maroon".to_string()],
                ..Default::default()
            },
            preset: None,
            ..Default::default()
        };

        execute(&args, &ctx, &output).unwrap();
        assert_eq!(output.lines(MessageLevel::Warning).len(), 1);
        assert!(output.lines(MessageLevel::Info)[0].contains("Color: Maroon"));
    }

    #[test]
    fn test_preset_is_restored_and_recorded() {
        let dir = TempDir::new().unwrap();
        let ctx = context(dir.path(), true);
        let manager = PresetManager::without_backup(dir.path().join("presets.toml"));
        manager
            .create(
                "jackets",
                String::new(),
                PresetSelection {
                    colors: vec!["Black".to_string()],
                    brackets: vec!["₹5000 - ₹7999".to_string(), "₹10,000 & Above".to_string()],
                    ..Default::default()
                },
            )
            .unwrap();

        let output = BufferWriter::new();
        let args = ProductsArgs {
            preset: Some("jackets".to_string()),
            ..Default::default()
        };
        execute(&args, &ctx, &output).unwrap();

        assert_eq!(output.lines(MessageLevel::Normal), vec!["w08", "w10"]);
        assert_eq!(manager.get("jackets").unwrap().use_count, 1);
    }

    #[test]
    fn test_scoped_listing() {
        let dir = TempDir::new().unwrap();
        let ctx = context(dir.path(), true);
        let output = BufferWriter::new();
        let args = ProductsArgs {
            scope: ScopeArgs {
                category: None,
                new_arrivals: true,
            },
            filters: FilterArgs {
                sort: Some(crate::filters::SortMode::PriceDesc),
                ..Default::default()
            },
            preset: None,
        };
        execute(&args, &ctx, &output).unwrap();
        assert_eq!(output.lines(MessageLevel::Normal), vec!["w06", "w02"]);
    }

    #[test]
    fn test_category_scope_sets_interval_domain() {
        let dir = TempDir::new().unwrap();
        let ctx = context(dir.path(), false);
        let output = BufferWriter::new();
        let args = ProductsArgs {
            scope: ScopeArgs {
                category: Some(Category::Jackets),
                new_arrivals: false,
            },
            filters: FilterArgs {
                max: Some(6_000.0),
                ..Default::default()
            },
            preset: None,
        };
        execute(&args, &ctx, &output).unwrap();

        let info = output.lines(MessageLevel::Info);
        assert!(info.contains(&"Price: ₹3,499 - ₹6,000".to_string()), "{info:?}");
        assert!(info.contains(&"Showing 2 of 3 products (sorted: default)".to_string()), "{info:?}");
    }
}
