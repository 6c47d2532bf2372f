//! Dual-handle price range slider
//!
//! A [`RangeSlider`] owns the pointer interaction for picking a numeric
//! `[low, high]` price interval. It reports every change as a
//! [`SliderChange`]; committed changes are meant to be forwarded to a
//! [`FilterEngine`](crate::filters::FilterEngine).
//!
//! # Example
//!
//! ```
//! use vitrine::catalog::Product;
//! use vitrine::filters::FilterEngine;
//! use vitrine::slider::{Handle, RangeSlider, TrackRect};
//!
//! let mut engine = FilterEngine::new(vec![
//!     Product::new("a", 200.0),
//!     Product::new("b", 1_200.0),
//! ]);
//! let mut slider = RangeSlider::for_engine(&engine);
//! slider.set_track(TrackRect::new(0.0, 100.0));
//!
//! slider.pointer_down(Handle::Max);
//! if let Some(change) = slider.pointer_up(50.0) {
//!     change.apply(&mut engine);
//! }
//! assert_eq!(engine.filtered_products().len(), 1);
//! ```

pub mod capture;
pub mod geometry;
pub mod interaction;
pub mod state;

pub use capture::{CaptureGuard, NoCapture, PointerCapture, PointerSource};
pub use geometry::{SliderDomain, TrackRect};
pub use interaction::RangeSlider;
pub use state::{DragSession, Handle, SliderChange, SliderState, SliderView};
