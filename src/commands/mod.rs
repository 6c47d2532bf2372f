//! Command implementations
//!
//! Each command is a module with an `execute` function that takes parsed CLI
//! args, a [`Context`] and an [`OutputWriter`](crate::output::OutputWriter).

pub mod config;
pub mod options;
pub mod preset;
pub mod products;
pub mod slide;

pub use options::execute as options;
pub use preset::execute as preset;
pub use products::execute as products;
pub use slide::execute as slide;

use crate::VitrineError;
use crate::catalog::{CatalogScope, JsonCatalog, ScopedSource, SleeveType};
use crate::cli::FilterArgs;
use crate::config::VitrineConfig;
use crate::filters::{FilterEngine, parse_sleeve};
use crate::presets::PresetManager;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, VitrineError>;

/// Settings resolved from the config file and global flags
#[derive(Debug, Clone)]
pub struct Context {
    pub config: VitrineConfig,
    pub quiet: bool,
    pub catalog: Option<PathBuf>,
}

impl Context {
    /// Combine the loaded config with the global flags; flags win
    #[must_use]
    pub fn new(config: VitrineConfig, quiet: bool, catalog: Option<PathBuf>) -> Self {
        Self {
            quiet: quiet || config.quiet,
            catalog: catalog.or_else(|| config.catalog.clone()),
            config,
        }
    }

    /// Currency symbol for printed prices
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Load the products in `scope` into a fresh engine
    ///
    /// # Errors
    ///
    /// Returns `VitrineError` if no catalog is configured or it cannot be loaded.
    pub fn engine(&self, scope: CatalogScope) -> Result<FilterEngine> {
        let path = self.catalog.as_ref().ok_or_else(|| {
            VitrineError::InvalidInput(
                "No catalog set. Pass --catalog <PATH> or run 'vitrine config set catalog=<PATH>'.".into(),
            )
        })?;
        let source = ScopedSource::new(JsonCatalog::new(path), scope);
        Ok(FilterEngine::from_source(&source)?)
    }

    /// Manager for the configured presets file
    ///
    /// # Errors
    ///
    /// Returns `VitrineError` if the presets location cannot be determined.
    pub fn presets(&self) -> Result<PresetManager> {
        Ok(PresetManager::new(self.config.presets_file()?))
    }
}

/// Apply filter options to an engine, facet by facet
///
/// Values are toggled on, so a value that is already selected (from a preset)
/// stays selected.
///
/// # Errors
///
/// Returns `VitrineError` if a sleeve label is not recognised.
pub fn apply_filter_args(engine: &mut FilterEngine, args: &FilterArgs) -> Result<()> {
    let sleeves = args
        .sleeves
        .iter()
        .map(String::as_str)
        .map(parse_sleeve)
        .collect::<std::result::Result<Vec<SleeveType>, _>>()?;

    for color in &args.colors {
        if !engine.selection().colors.contains(color) {
            engine.toggle_color(color);
        }
    }
    for size in &args.sizes {
        if !engine.selection().sizes.contains(size) {
            engine.toggle_size(size);
        }
    }
    for sleeve in sleeves {
        if !engine.selection().sleeves.contains(&sleeve) {
            engine.toggle_sleeve(sleeve);
        }
    }
    for label in &args.brackets {
        if !engine.brackets().iter().any(|b| &b.label == label) {
            log::warn!("price bracket '{label}' does not exist for this catalog");
        }
        if !engine.selection().price_brackets.contains(label) {
            engine.toggle_price_bracket(label);
        }
    }
    if args.min.is_some() || args.max.is_some() {
        let current = engine.price_interval();
        engine.set_price_interval(
            args.min.unwrap_or(current.low),
            args.max.unwrap_or(current.high),
        );
    }
    if let Some(sort) = args.sort {
        engine.set_sort(sort);
    }
    Ok(())
}
