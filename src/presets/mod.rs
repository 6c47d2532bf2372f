//! Saved filter presets
//!
//! A preset is a named snapshot of a shopper's filter selection, stored as
//! `[[preset]]` tables in a TOML file.
//!
//! # File format
//!
//! ```toml
//! [[preset]]
//! name = "summer-reds"
//! description = "Red half-sleeve tops"
//! created = "2025-01-15T10:30:00Z"
//! last_used = "2025-01-20T14:22:00Z"
//! use_count = 3
//!
//! [preset.selection]
//! colors = ["Red"]
//! sizes = []
//! sleeves = ["half-sleeves"]
//! brackets = ["₹500 - ₹999"]
//! sort = "price-low-high"
//! ```
//!
//! A selection stores either bracket labels or a custom `price` interval,
//! never both.

pub mod error;
pub mod operations;
pub mod types;

pub use error::PresetError;
pub use operations::PresetManager;
pub use types::{Preset, PresetSelection, PresetStorage, validate_preset_name};
