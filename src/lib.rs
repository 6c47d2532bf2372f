//! Vitrine - product filtering for a clothing storefront
//!
//! This library narrows a product catalog by color, size, sleeve style and
//! price, and provides the dual-handle range slider used to pick a custom
//! price interval.
//!
//! - [`filters::FilterEngine`] holds the selection and derives the visible list
//! - [`slider::RangeSlider`] turns pointer and touch input into a price interval
//! - [`catalog`] loads products, [`presets`] saves named selections

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filters;
pub mod output;
pub mod presets;
pub mod slider;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum VitrineError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Filter input could not be parsed
    #[error("Filter error: {0}")]
    Filter(#[from] filters::FilterError),
    /// Preset storage error
    #[error("Preset error: {0}")]
    Preset(#[from] presets::PresetError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
