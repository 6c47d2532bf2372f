//! Preset data structures
//!
//! - `PresetSelection`: the stored form of a shopper's filter choices
//! - `Preset`: a named selection with usage metadata
//! - `PresetStorage`: the root of the presets file

use crate::catalog::SleeveType;
use crate::filters::{FilterSelection, PriceInterval, SortMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter choices as written to disk
///
/// A custom interval is only stored when it narrows the catalog's range, so
/// reloading a preset against a changed catalog does not pin stale extremes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PresetSelection {
    #[serde(default)]
    pub colors: Vec<String>,

    #[serde(default)]
    pub sizes: Vec<String>,

    #[serde(default)]
    pub sleeves: Vec<SleeveType>,

    /// Price bracket labels
    #[serde(default)]
    pub brackets: Vec<String>,

    #[serde(default)]
    pub sort: SortMode,

    /// Custom slider interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceInterval>,
}

impl PresetSelection {
    /// Capture an engine selection
    ///
    /// `full` is the engine's full observed interval; an interval equal to it
    /// is the neutral state and is not stored.
    #[must_use]
    pub fn from_selection(selection: &FilterSelection, full: PriceInterval) -> Self {
        let price = (selection.price_brackets.is_empty() && selection.price_interval != full)
            .then_some(selection.price_interval);
        Self {
            colors: selection.colors.iter().cloned().collect(),
            sizes: selection.sizes.iter().cloned().collect(),
            sleeves: selection.sleeves.iter().copied().collect(),
            brackets: selection.price_brackets.iter().cloned().collect(),
            sort: selection.sort,
            price,
        }
    }

    /// Expand into an engine selection over the given full interval
    #[must_use]
    pub fn to_selection(&self, full: PriceInterval) -> FilterSelection {
        let mut selection = FilterSelection::new(full);
        selection.colors.extend(self.colors.iter().cloned());
        selection.sizes.extend(self.sizes.iter().cloned());
        selection.sleeves.extend(self.sleeves.iter().copied());
        selection.price_brackets.extend(self.brackets.iter().cloned());
        selection.sort = self.sort;
        if let Some(price) = self.price {
            selection.price_interval = price;
        }
        selection
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.sizes.is_empty()
            && self.sleeves.is_empty()
            && self.brackets.is_empty()
            && self.price.is_none()
    }

    /// Validate the selection
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Both bracket labels and a custom interval are present
    /// - The custom interval has a non-finite or negative bound
    /// - A sleeve entry is `none`, which is not selectable
    pub fn validate(&self) -> Result<(), String> {
        if let Some(price) = self.price {
            if !self.brackets.is_empty() {
                return Err("a preset cannot combine price brackets with a custom interval".to_string());
            }
            if !price.low.is_finite() || !price.high.is_finite() || price.low < 0.0 {
                return Err(format!("invalid price interval {price}"));
            }
        }

        if self.sleeves.contains(&SleeveType::None) {
            return Err("sleeve type 'none' cannot be selected".to_string());
        }

        Ok(())
    }
}

/// Named selection with usage metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Unique preset name
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub created: DateTime<Utc>,

    pub last_used: DateTime<Utc>,

    #[serde(default)]
    pub use_count: u32,

    pub selection: PresetSelection,
}

impl Preset {
    #[must_use]
    pub fn new(name: String, description: String, selection: PresetSelection) -> Self {
        let now = Utc::now();
        Self {
            name,
            description,
            created: now,
            last_used: now,
            use_count: 0,
            selection,
        }
    }

    /// Record that this preset was applied
    pub fn record_use(&mut self) {
        self.use_count += 1;
        self.last_used = Utc::now();
    }

    /// Validate name and selection
    ///
    /// # Errors
    ///
    /// Returns an error if the name or the selection is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_preset_name(&self.name)?;
        self.selection.validate()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Preset: {}", self.name)?;
        if !self.description.is_empty() {
            writeln!(f, "Description: {}", self.description)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.selection)?;
        writeln!(f)?;
        writeln!(f, "Created: {}", self.created.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Last Used: {}", self.last_used.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Use Count: {}", self.use_count)
    }
}

impl fmt::Display for PresetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn line(f: &mut fmt::Formatter<'_>, title: &str, values: &[String]) -> fmt::Result {
            if values.is_empty() {
                writeln!(f, "{title}: (any)")
            } else {
                writeln!(f, "{title}: {}", values.join(", "))
            }
        }

        line(f, "Colors", &self.colors)?;
        line(f, "Sizes", &self.sizes)?;
        let sleeves: Vec<String> = self.sleeves.iter().map(|s| s.label().to_string()).collect();
        line(f, "Sleeves", &sleeves)?;
        match self.price {
            Some(price) => writeln!(f, "Price: {price}")?,
            None => line(f, "Price", &self.brackets)?,
        }
        writeln!(f, "Sort: {}", self.sort)
    }
}

/// Root of the presets file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PresetStorage {
    #[serde(rename = "preset", default)]
    pub presets: Vec<Preset>,
}

impl PresetStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self { presets: Vec::new() }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Preset> {
        self.presets.iter_mut().find(|p| p.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p.name == name)
    }

    /// Add a preset
    ///
    /// # Errors
    ///
    /// Returns an error if a preset with the same name already exists or the
    /// preset fails validation.
    pub fn add(&mut self, preset: Preset) -> Result<(), String> {
        if self.contains(&preset.name) {
            return Err(format!("Preset '{}' already exists", preset.name));
        }
        preset.validate()?;
        self.presets.push(preset);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<Preset> {
        let pos = self.presets.iter().position(|p| p.name == name)?;
        Some(self.presets.remove(pos))
    }

    /// Presets ordered by use count, most used first
    #[must_use]
    pub fn most_used(&self) -> Vec<&Preset> {
        let mut sorted: Vec<&Preset> = self.presets.iter().collect();
        sorted.sort_by(|a, b| b.use_count.cmp(&a.use_count));
        sorted
    }
}

/// Validate a preset name
///
/// Names are 1 to 64 characters of ASCII letters, digits, `-` and `_`.
///
/// # Errors
///
/// Returns a description of the first rule the name breaks.
pub fn validate_preset_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Preset name cannot be empty".to_string());
    }

    if name.len() > 64 {
        return Err(format!("Preset name too long (max 64 chars): {}", name.len()));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "Preset name '{name}' contains invalid characters (only letters, digits, '-' and '_' allowed)"
        ));
    }

    Ok(())
}
