//! Error types for filter input parsing
//!
//! The engine itself never fails: out-of-range numbers are clamped and
//! toggling unknown values is harmless. These errors only arise where text
//! from the command line or a preset file is turned into typed filter values.

use thiserror::Error;

/// Errors that can occur while parsing filter values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Sleeve label does not name a selectable sleeve style
    #[error("Unknown sleeve type '{0}' (expected one of: Full Sleeves, Half Sleeves, Sleeveless)")]
    UnknownSleeve(String),

    /// Sort mode is not recognised
    #[error("Unknown sort mode '{0}' (expected one of: default, price-low-high, price-high-low, newest)")]
    UnknownSortMode(String),

    /// Facet name is not recognised
    #[error("Unknown filter kind '{0}' (expected one of: color, size, sleeve, price)")]
    UnknownKind(String),
}
