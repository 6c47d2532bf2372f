//! Slider geometry
//!
//! Conversions between pointer positions, track percentages and domain
//! values, plus step quantization. A domain whose bounds coincide (a catalog
//! with a single price) maps every value to 0%.

/// Rendered bounding box of the slider track, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRect {
    pub left: f64,
    pub width: f64,
}

impl TrackRect {
    #[must_use]
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Percentage of the track at `client_x`, unclamped
    ///
    /// Returns `None` for a collapsed track or a non-finite coordinate.
    #[must_use]
    pub fn percentage_at(&self, client_x: f64) -> Option<f64> {
        if self.width.is_nan() || self.width <= 0.0 || !client_x.is_finite() {
            return None;
        }
        Some((client_x - self.left) / self.width * 100.0)
    }
}

/// Value domain and quantization rules of a range slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDomain {
    min: f64,
    max: f64,
    step: f64,
}

impl SliderDomain {
    /// Build a domain from its bounds and the caller's requested step
    ///
    /// The effective step is never finer than a twentieth of the domain
    /// (and never below 1), whatever step is requested.
    #[must_use]
    pub fn new(min: f64, max: f64, requested_step: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let dynamic_step = ((max - min) / 20.0).floor().max(1.0);
        let requested_step = if requested_step.is_finite() { requested_step } else { 0.0 };
        Self {
            min,
            max,
            step: requested_step.max(dynamic_step),
        }
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub const fn effective_step(&self) -> f64 {
        self.step
    }

    /// Smallest permitted distance between the two handles
    ///
    /// The larger of one step and 5% of the domain, capped at the domain
    /// width so it can always be satisfied.
    #[must_use]
    pub fn minimum_gap(&self) -> f64 {
        self.step.max(self.width() * 0.05).min(self.width())
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Round to the nearest step counted from the domain minimum
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((self.clamp(value) - self.min) / self.step).round();
        self.clamp(steps.mul_add(self.step, self.min))
    }

    /// Position of `value` along the track, 0 to 100
    #[must_use]
    pub fn percentage(&self, value: f64) -> f64 {
        let width = self.width();
        if width <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / width * 100.0).clamp(0.0, 100.0)
    }

    /// Domain value at a track percentage (clamped to 0..=100)
    #[must_use]
    pub fn value_at(&self, percentage: f64) -> f64 {
        let percentage = percentage.clamp(0.0, 100.0);
        self.min + percentage / 100.0 * self.width()
    }
}
