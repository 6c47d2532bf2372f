//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **products**: List the catalog through a set of filters (default)
//! - **options**: Show the filter vocabulary and the generated price brackets
//! - **slide**: Replay a price slider drag and show the resulting interval
//! - **preset**: Manage saved filter selections
//! - **config**: Read and change settings
//!
//! # Examples
//!
//! ```
//! use vitrine::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["vitrine", "products", "--color", "Red", "--sort", "newest"]);
//! assert!(matches!(cli.get_command(), Commands::Products(_)));
//! ```

use crate::catalog::{CatalogScope, Category};
use crate::filters::SortMode;
use crate::slider::Handle;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filter choices shared by every command that builds a selection
///
/// They are applied in declaration order: colors, sizes, sleeves, brackets,
/// then the numeric interval, then the sort order.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// Colors to include (repeatable: -c Red -c Blue)
    #[arg(short = 'c', long = "color", value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Sizes to include (repeatable)
    #[arg(short = 's', long = "size", value_name = "SIZE")]
    pub sizes: Vec<String>,

    /// Sleeve styles to include ("Full Sleeves", "half", "sleeveless", ...)
    #[arg(long = "sleeve", value_name = "SLEEVE")]
    pub sleeves: Vec<String>,

    /// Price brackets to include, by label ("₹500 - ₹999")
    #[arg(short = 'b', long = "bracket", value_name = "LABEL")]
    pub brackets: Vec<String>,

    /// Lowest price of a custom interval (clears brackets)
    #[arg(long = "min", value_name = "PRICE", allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Highest price of a custom interval (clears brackets)
    #[arg(long = "max", value_name = "PRICE", allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Sort order: default, price-low-high, price-high-low, newest
    #[arg(long = "sort", value_name = "MODE")]
    pub sort: Option<SortMode>,
}

impl FilterArgs {
    /// True when no filter or sort option was given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Collection the catalog is narrowed to before filtering
///
/// Scoping changes the observed price range, so brackets and the slider
/// domain follow the collection.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeArgs {
    /// Only products in this category (t-shirts, shirts, bottoms, jackets, accessories)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// Only new arrivals
    #[arg(long = "new-arrivals")]
    pub new_arrivals: bool,
}

impl ScopeArgs {
    #[must_use]
    pub const fn scope(&self) -> CatalogScope {
        CatalogScope {
            category: self.category,
            new_arrivals: self.new_arrivals,
        }
    }
}

/// Arguments of the products command
#[derive(Args, Debug, Clone, Default)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Start from a saved preset; other options refine it
    #[arg(short = 'p', long = "preset", value_name = "NAME")]
    pub preset: Option<String>,
}

/// Arguments of the options command
///
/// Filters given here are marked as selected in the listing.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments of the slide command
#[derive(Args, Debug, Clone)]
pub struct SlideArgs {
    /// Handle to drag
    #[arg(long = "handle", value_name = "min|max", default_value = "max")]
    pub handle: Handle,

    /// Rendered track width in pixels
    #[arg(long = "width", value_name = "PX", default_value_t = 100.0)]
    pub width: f64,

    /// Track left edge in pixels
    #[arg(long = "left", value_name = "PX", default_value_t = 0.0, allow_negative_numbers = true)]
    pub left: f64,

    /// Replay the drag as touch events
    #[arg(long = "touch")]
    pub touch: bool,

    /// Pointer positions; the last one is where the handle is released
    #[arg(value_name = "X", required = true, num_args = 1.., allow_negative_numbers = true)]
    pub positions: Vec<f64>,

    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Preset management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PresetCommands {
    /// List all saved presets
    #[command(visible_alias = "ls")]
    List,

    /// Show a preset's selection and usage
    Show {
        name: String,
    },

    /// Save the given filters as a preset
    Save {
        name: String,

        /// Description of the preset
        #[arg(short = 'd', long = "description")]
        description: Option<String>,

        #[command(flatten)]
        scope: ScopeArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Delete a preset
    #[command(visible_alias = "rm")]
    Delete {
        name: String,
    },

    /// Rename a preset
    #[command(visible_alias = "mv")]
    Rename {
        old_name: String,
        new_name: String,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., catalog)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Filter a clothing catalog by color, size, sleeve and price", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Product catalog JSON file (overrides config)
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List products matching the filters (default)
    #[command(visible_alias = "p")]
    Products(ProductsArgs),

    /// Show available colors, sizes, sleeves and price brackets
    #[command(visible_alias = "o")]
    Options(OptionsArgs),

    /// Replay a price slider drag over the catalog
    Slide(SlideArgs),

    /// Manage saved presets
    Preset {
        #[command(subcommand)]
        command: PresetCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// The command to run, defaulting to an unfiltered product listing
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Products(ProductsArgs::default()))
    }
}

/// Split a `KEY=VALUE` setting
///
/// Returns `None` when there is no `=` or the key is empty.
#[must_use]
pub fn parse_setting(setting: &str) -> Option<(&str, &str)> {
    let (key, value) = setting.split_once('=')?;
    let key = key.trim();
    (!key.is_empty()).then_some((key, value.trim()))
}
