//! Slider state types

use super::capture::{CaptureGuard, PointerSource};
use crate::filters::{FilterEngine, PriceInterval};
use std::fmt;

/// One of the two slider handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Min,
    Max,
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Min => "min",
            Self::Max => "max",
        })
    }
}

impl std::str::FromStr for Handle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" | "low" => Ok(Self::Min),
            "max" | "high" => Ok(Self::Max),
            other => Err(format!("unknown handle '{other}' (expected min or max)")),
        }
    }
}

/// A drag in progress
///
/// Owns the capture guard: the global listeners live exactly as long as
/// the session.
#[derive(Debug)]
pub struct DragSession {
    pub handle: Handle,
    pub source: PointerSource,
    /// Last pointer position seen during the drag
    pub pointer_x: Option<f64>,
    _capture: CaptureGuard,
}

impl DragSession {
    pub(crate) const fn new(handle: Handle, source: PointerSource, capture: CaptureGuard) -> Self {
        Self {
            handle,
            source,
            pointer_x: None,
            _capture: capture,
        }
    }
}

/// Drag lifecycle: `Idle -> Dragging(handle) -> Idle`
#[derive(Debug, Default)]
pub enum SliderState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl SliderState {
    #[must_use]
    pub const fn active_handle(&self) -> Option<Handle> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session.handle),
        }
    }
}

/// Interval reported by the slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChange {
    pub interval: PriceInterval,
    /// False for live drag feedback, true once a release or click commits
    /// a snapped value
    pub committed: bool,
}

impl SliderChange {
    /// Forward the interval to the engine
    pub fn apply(self, engine: &mut FilterEngine) {
        engine.set_price_interval(self.interval.low, self.interval.high);
    }
}

/// What a rendering layer needs to draw the slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderView {
    pub low: f64,
    pub high: f64,
    pub low_percent: f64,
    pub high_percent: f64,
    /// Handle being dragged, for active styling
    pub active: Option<Handle>,
}
