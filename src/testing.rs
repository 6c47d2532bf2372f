//! Testing utilities for vitrine
//!
//! Product fixtures shared by unit tests and a helper for comparing
//! filtered results by id.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Category, Product, SleeveType};
use crate::slider::{CaptureGuard, PointerCapture, PointerSource};
use std::cell::Cell;
use std::rc::Rc;

/// Three products used by the facet scenarios
///
/// | id   | price | colors | sizes |
/// |------|-------|--------|-------|
/// | p500 | 500   | Red    | M     |
/// | p700 | 700   | Blue   | M     |
/// | p900 | 900   | Red    | L     |
#[must_use]
pub fn scenario_products() -> Vec<Product> {
    vec![
        Product::new("p500", 500.0).with_colors(["Red"]).with_sizes(["M"]),
        Product::new("p700", 700.0).with_colors(["Blue"]).with_sizes(["M"]),
        Product::new("p900", 900.0).with_colors(["Red"]).with_sizes(["L"]),
    ]
}

/// A small catalog spanning 299 to 10000, with every sleeve style
///
/// The top price is a multiple of 5000 so the open "& Above" bracket
/// contains a product. Jackets are w07, w08 and w10 (3499 to 10000); the
/// new arrivals are w02 and w06.
#[must_use]
pub fn wardrobe() -> Vec<Product> {
    vec![
        Product::new("w01", 299.0)
            .with_name("Graphic Tee")
            .with_category(Category::TShirts)
            .with_colors(["Black", "Red"])
            .with_sizes(["S", "M"])
            .with_sleeves(SleeveType::Half),
        Product::new("w02", 499.0)
            .with_name("Ribbed Tank")
            .with_category(Category::TShirts)
            .with_colors(["White"])
            .with_sizes(["M", "L"])
            .with_sleeves(SleeveType::Sleeveless)
            .with_new_arrival(true),
        Product::new("w03", 799.0)
            .with_name("Oxford Shirt")
            .with_colors(["Black"])
            .with_sizes(["L", "XL"])
            .with_sleeves(SleeveType::Full),
        Product::new("w04", 999.0)
            .with_name("Chinos")
            .with_category(Category::Bottoms)
            .with_colors(["Blue", "Navy Blue"])
            .with_sizes(["32", "34"]),
        Product::new("w05", 1_299.0)
            .with_name("Light Blue Plain Shirt")
            .with_colors(["Light Blue"])
            .with_sizes(["S", "M", "L", "XL"])
            .with_sleeves(SleeveType::Full),
        Product::new("w06", 1_999.0)
            .with_name("Camp Collar Shirt")
            .with_colors(["Red"])
            .with_sizes(["M"])
            .with_sleeves(SleeveType::Half)
            .with_new_arrival(true),
        Product::new("w07", 3_499.0)
            .with_name("Utility Jacket")
            .with_category(Category::Jackets)
            .with_colors(["Olive"])
            .with_sizes(["L"])
            .with_sleeves(SleeveType::Full),
        Product::new("w08", 5_999.0)
            .with_name("Bomber Jacket")
            .with_category(Category::Jackets)
            .with_colors(["Black"])
            .with_sizes(["M", "L"])
            .with_sleeves(SleeveType::Full),
        Product::new("w09", 7_999.0)
            .with_name("Leather Belt")
            .with_category(Category::Accessories)
            .with_colors(["Brown"])
            .with_sizes(["XL"]),
        Product::new("w10", 10_000.0)
            .with_name("Wool Overcoat")
            .with_category(Category::Jackets)
            .with_colors(["Black"])
            .with_sizes(["L"])
            .with_sleeves(SleeveType::Full),
    ]
}

/// Product ids of a filtered result, in order
#[must_use]
pub fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

/// Pointer capture that counts live listener registrations
///
/// Clones share the same counters, so a test can keep one handle while the
/// slider owns another.
#[derive(Debug, Clone, Default)]
pub struct CountingCapture {
    active: Rc<Cell<usize>>,
    acquired: Rc<Cell<usize>>,
}

impl CountingCapture {
    /// Listener sets currently attached
    #[must_use]
    pub fn active(&self) -> usize {
        self.active.get()
    }

    /// Listener sets attached over the capture's lifetime
    #[must_use]
    pub fn acquired(&self) -> usize {
        self.acquired.get()
    }
}

impl PointerCapture for CountingCapture {
    fn capture(&mut self, _source: PointerSource) -> CaptureGuard {
        self.active.set(self.active.get() + 1);
        self.acquired.set(self.acquired.get() + 1);
        let active = Rc::clone(&self.active);
        CaptureGuard::new(move || active.set(active.get() - 1))
    }
}
