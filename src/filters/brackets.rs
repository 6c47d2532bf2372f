//! Checkbox price brackets
//!
//! Brackets are regenerated from the observed price extremes whenever the
//! product set changes. They come from a fixed ladder of whole-rupee rungs
//! plus one open-ended "& Above" bracket for expensive catalogs:
//!
//! ```text
//! 0-499  500-999  1000-1999  2000-2999  3000-4999  5000-7999
//! 8000-14999  15000-24999  25000-49999  X & Above
//! ```
//!
//! A rung is generated only if the observed range reaches into it. The open
//! bracket starts at the next multiple of 5000 at or above the most expensive
//! product (at least 5000, at most where the ladder ends), and a rung that
//! would run past that start is cut short so no price lands in two brackets.

use super::types::PriceInfo;
use serde::Serialize;

/// Currency symbol used in bracket labels
pub const CURRENCY: &str = "₹";

const LADDER: [(f64, f64); 9] = [
    (0.0, 499.0),
    (500.0, 999.0),
    (1_000.0, 1_999.0),
    (2_000.0, 2_999.0),
    (3_000.0, 4_999.0),
    (5_000.0, 7_999.0),
    (8_000.0, 14_999.0),
    (15_000.0, 24_999.0),
    (25_000.0, 49_999.0),
];

const OPEN_BRACKET_MULTIPLE: f64 = 5_000.0;
const LADDER_END: f64 = 50_000.0;

/// A named price sub-range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBracket {
    pub min: f64,
    /// Inclusive whole-rupee upper bound; `None` for the open bracket
    pub max: Option<f64>,
    pub label: String,
}

impl PriceBracket {
    fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
            label: format!("{CURRENCY}{min:.0} - {CURRENCY}{max:.0}"),
        }
    }

    fn open(min: f64) -> Self {
        Self {
            min,
            max: None,
            label: format!("{CURRENCY}{} & Above", group_digits(min)),
        }
    }

    /// Whether `price` falls in this bracket
    ///
    /// Rungs are whole-rupee bands, so a fractional price between 499 and
    /// 500 belongs to the lower rung.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price < max + 1.0)
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.max.is_none()
    }
}

/// Generate the bracket list for the observed price extremes
#[must_use]
pub fn generate(info: PriceInfo) -> Vec<PriceBracket> {
    let open_start = (info.max_price >= OPEN_BRACKET_MULTIPLE).then(|| {
        let next_multiple = (info.max_price / OPEN_BRACKET_MULTIPLE).ceil() * OPEN_BRACKET_MULTIPLE;
        next_multiple.clamp(OPEN_BRACKET_MULTIPLE, LADDER_END)
    });

    let mut brackets: Vec<PriceBracket> = LADDER
        .iter()
        .filter(|(lo, hi)| info.min_price < hi + 1.0 && info.max_price >= *lo)
        .filter_map(|&(lo, hi)| {
            let hi = match open_start {
                Some(start) if hi >= start => start - 1.0,
                _ => hi,
            };
            (hi >= lo).then(|| PriceBracket::closed(lo, hi))
        })
        .collect();

    if let Some(start) = open_start {
        brackets.push(PriceBracket::open(start));
    }
    brackets
}

/// Suggested slider granularity for a price span
///
/// Narrow catalogs get fine steps so the handles stay useful; wide ones get
/// roughly twenty positions.
#[must_use]
pub fn slider_step(info: PriceInfo) -> f64 {
    let span = info.span();
    if span <= 200.0 {
        10.0
    } else if span <= 500.0 {
        25.0
    } else if span <= 1_000.0 {
        50.0
    } else {
        (span / 20.0).floor().max(50.0)
    }
}

/// Format a whole amount with comma thousands separators
#[must_use]
pub fn group_digits(amount: f64) -> String {
    let rounded = format!("{:.0}", amount.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0.0 && rounded != "0" {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn info(min_price: f64, max_price: f64) -> PriceInfo {
        PriceInfo { min_price, max_price }
    }

    fn labels(brackets: &[PriceBracket]) -> Vec<&str> {
        brackets.iter().map(|b| b.label.as_str()).collect()
    }

    #[test]
    fn test_small_catalog() {
        let brackets = generate(info(299.0, 899.0));
        assert_eq!(labels(&brackets), vec!["₹0 - ₹499", "₹500 - ₹999"]);
    }

    #[test]
    fn test_rungs_below_min_are_skipped() {
        let brackets = generate(info(1_200.0, 1_500.0));
        assert_eq!(labels(&brackets), vec!["₹1000 - ₹1999"]);
    }

    #[test]
    fn test_open_bracket_rounds_up_to_multiple() {
        let brackets = generate(info(499.0, 6_000.0));
        assert_eq!(brackets.last().unwrap().label, "₹10,000 & Above");
        assert!(brackets.last().unwrap().is_open());
        assert_eq!(brackets[brackets.len() - 2].label, "₹5000 - ₹7999");
    }

    #[test]
    fn test_rung_truncated_at_open_bracket() {
        let brackets = generate(info(1_000.0, 20_000.0));
        let tail = labels(&brackets[brackets.len() - 2..]);
        assert_eq!(tail, vec!["₹15000 - ₹19999", "₹20,000 & Above"]);
    }

    #[test]
    fn test_rung_starting_at_open_bracket_dropped() {
        let brackets = generate(info(1_000.0, 15_000.0));
        let tail = labels(&brackets[brackets.len() - 2..]);
        assert_eq!(tail, vec!["₹8000 - ₹14999", "₹15,000 & Above"]);
    }

    #[test]
    fn test_open_bracket_capped_at_ladder_end() {
        let brackets = generate(info(30_000.0, 80_000.0));
        assert_eq!(labels(&brackets), vec!["₹25000 - ₹49999", "₹50,000 & Above"]);
    }

    #[test]
    fn test_no_open_bracket_below_5000() {
        let brackets = generate(info(100.0, 4_999.0));
        assert!(brackets.iter().all(|b| !b.is_open()));
    }

    #[test]
    fn test_slider_step_tiers() {
        assert!((slider_step(info(699.0, 799.0)) - 10.0).abs() < f64::EPSILON);
        assert!((slider_step(info(0.0, 400.0)) - 25.0).abs() < f64::EPSILON);
        assert!((slider_step(info(0.0, 1_000.0)) - 50.0).abs() < f64::EPSILON);
        assert!((slider_step(info(0.0, 1_500.0)) - 75.0).abs() < f64::EPSILON);
        assert!((slider_step(info(0.0, 1_100.0)) - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0.0), "0");
        assert_eq!(group_digits(999.0), "999");
        assert_eq!(group_digits(10_000.0), "10,000");
        assert_eq!(group_digits(1_234_567.0), "1,234,567");
    }

    proptest! {
        /// Every price between the observed extremes lands in exactly one bracket
        #[test]
        fn test_every_price_in_exactly_one_bracket(
            min in 0.0f64..60_000.0,
            span in 0.0f64..120_000.0,
            picks in prop::collection::vec(0.0f64..=1.0, 1..50),
        ) {
            let max = min + span;
            let brackets = generate(info(min, max));
            for price in picks.into_iter().map(|t| t.mul_add(span, min)).chain([min, max]) {
                let hits = brackets.iter().filter(|b| b.contains(price)).count();
                prop_assert_eq!(hits, 1, "price {} in [{}, {}] hit {} brackets", price, min, max, hits);
            }
        }

        /// Brackets are sorted and never overlap
        #[test]
        fn test_brackets_are_disjoint(min in 0.0f64..60_000.0, span in 0.0f64..120_000.0) {
            let brackets = generate(info(min, min + span));
            for pair in brackets.windows(2) {
                let upper = pair[0].max.map(|hi| hi + 1.0);
                prop_assert!(
                    upper.is_some_and(|upper| upper <= pair[1].min),
                    "{} overlaps {}",
                    pair[0].label,
                    pair[1].label
                );
            }
        }
    }
}
