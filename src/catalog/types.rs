//! Product records consumed by the filtering core
//!
//! Products are immutable from the engine's point of view. Optional
//! attributes are explicit `Option`s rather than absent keys; a missing
//! sleeve style deserializes as [`SleeveType::None`].

use super::error::CatalogError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[serde(rename = "t-shirts")]
    TShirts,
    #[default]
    Shirts,
    Bottoms,
    Jackets,
    Accessories,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TShirts => "t-shirts",
            Self::Shirts => "shirts",
            Self::Bottoms => "bottoms",
            Self::Jackets => "jackets",
            Self::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "t-shirts" | "tshirts" => Ok(Self::TShirts),
            "shirts" => Ok(Self::Shirts),
            "bottoms" => Ok(Self::Bottoms),
            "jackets" => Ok(Self::Jackets),
            "accessories" => Ok(Self::Accessories),
            _ => Err(format!(
                "unknown category '{s}' (expected t-shirts, shirts, bottoms, jackets or accessories)"
            )),
        }
    }
}

/// Sleeve style of a garment
///
/// The wire values match the stored catalog (`full-sleeves`, `half-sleeves`,
/// `sleeveless`). [`SleeveType::None`] marks products the sleeve facet does
/// not apply to; it has no filter label and can never be selected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SleeveType {
    #[serde(rename = "full-sleeves")]
    Full,
    #[serde(rename = "half-sleeves")]
    Half,
    Sleeveless,
    #[default]
    None,
}

impl SleeveType {
    /// Sleeve styles offered as filter checkboxes, in display order
    pub const SELECTABLE: [Self; 3] = [Self::Full, Self::Half, Self::Sleeveless];

    /// Filter label shown to shoppers
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Full Sleeves",
            Self::Half => "Half Sleeves",
            Self::Sleeveless => "Sleeveless",
            Self::None => "None",
        }
    }

    /// Map a filter label back to its sleeve style
    ///
    /// Only the three selectable labels resolve; matching is exact.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::SELECTABLE.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for SleeveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SleeveType {
    type Err = String;

    /// Accepts either the filter label ("Half Sleeves") or the wire value
    /// ("half-sleeves").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(sleeve) = Self::from_label(s) {
            return Ok(sleeve);
        }
        match s.to_ascii_lowercase().as_str() {
            "full-sleeves" | "full" => Ok(Self::Full),
            "half-sleeves" | "half" => Ok(Self::Half),
            "sleeveless" => Ok(Self::Sleeveless),
            _ => Err(format!("unknown sleeve type '{s}'")),
        }
    }
}

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub colors: Vec<String>,

    #[serde(default)]
    pub sizes: Vec<String>,

    #[serde(default)]
    pub sleeves: SleeveType,

    #[serde(default)]
    pub is_new_arrival: bool,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Create a product with the attributes the filtering core looks at
    ///
    /// Everything else takes its catalog default.
    #[must_use]
    pub fn new(id: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            price,
            original_price: None,
            discount: None,
            category: Category::default(),
            colors: Vec::new(),
            sizes: Vec::new(),
            sleeves: SleeveType::None,
            is_new_arrival: false,
            in_stock: true,
            rating: None,
            reviews: None,
            created_at: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_sleeves(mut self, sleeves: SleeveType) -> Self {
        self.sleeves = sleeves;
        self
    }

    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub const fn with_new_arrival(mut self, is_new_arrival: bool) -> Self {
        self.is_new_arrival = is_new_arrival;
        self
    }

    /// Check that the record can take part in filtering
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidProduct` if the id is empty or the price
    /// is negative or not finite.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::invalid(&self.name, "missing id"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::invalid(
                &self.id,
                format!("price must be a non-negative number, got {}", self.price),
            ));
        }
        if let Some(original) = self.original_price
            && (!original.is_finite() || original < 0.0)
        {
            return Err(CatalogError::invalid(
                &self.id,
                format!("original price must be a non-negative number, got {original}"),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn has_any_color<'a>(&self, colors: impl IntoIterator<Item = &'a String>) -> bool {
        colors.into_iter().any(|c| self.colors.contains(c))
    }

    #[must_use]
    pub fn has_any_size<'a>(&self, sizes: impl IntoIterator<Item = &'a String>) -> bool {
        sizes.into_iter().any(|s| self.sizes.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleeve_labels_round_trip() {
        for sleeve in SleeveType::SELECTABLE {
            assert_eq!(SleeveType::from_label(sleeve.label()), Some(sleeve));
        }
        assert_eq!(SleeveType::from_label("None"), None);
        assert_eq!(SleeveType::from_label("half sleeves"), None);
    }

    #[test]
    fn test_sleeve_from_str_accepts_wire_values() {
        assert_eq!("half-sleeves".parse::<SleeveType>(), Ok(SleeveType::Half));
        assert_eq!("Full Sleeves".parse::<SleeveType>(), Ok(SleeveType::Full));
        assert!("raglan".parse::<SleeveType>().is_err());
    }

    #[test]
    fn test_deserialize_original_record() {
        let json = r#"{
            "_id": "2",
            "name": "Blue Ombre Structured Shirt",
            "price": 999,
            "originalPrice": 1299,
            "discount": "23% OFF",
            "category": "shirts",
            "sizes": ["S", "M"],
            "colors": ["Blue"],
            "sleeves": "half-sleeves",
            "isNewArrival": true,
            "inStock": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "2");
        assert_eq!(product.original_price, Some(1299.0));
        assert_eq!(product.sleeves, SleeveType::Half);
        assert!(product.is_new_arrival);
    }

    #[test]
    fn test_missing_sleeves_defaults_to_none() {
        let json = r#"{"id": "cap", "price": 299, "category": "accessories"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.sleeves, SleeveType::None);
        assert_eq!(product.category, Category::Accessories);
        assert!(product.in_stock);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("bottoms".parse::<Category>(), Ok(Category::Bottoms));
        assert_eq!("T-Shirts".parse::<Category>(), Ok(Category::TShirts));
        assert!("hats".parse::<Category>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        assert!(Product::new("a", -1.0).validate().is_err());
        assert!(Product::new("a", f64::NAN).validate().is_err());
        assert!(Product::new("", 10.0).validate().is_err());
        assert!(Product::new("a", 0.0).validate().is_ok());
    }
}
