//! Pointer capture for drags
//!
//! While a handle is dragged the slider must keep receiving move and release
//! events even after the pointer leaves the track, which in a browser means
//! document-level listeners. Attaching them yields a [`CaptureGuard`];
//! dropping the guard detaches them. The slider stores the guard inside its
//! dragging state, so leaving that state through any path detaches exactly
//! once.

use std::fmt;

/// Input device that started a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Attaches global move/release listeners for the duration of a drag
pub trait PointerCapture {
    /// Start receiving move and release events for `source` everywhere
    ///
    /// The returned guard must detach the listeners when dropped.
    fn capture(&mut self, source: PointerSource) -> CaptureGuard;
}

/// Scoped listener registration; detaches on drop
pub struct CaptureGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl CaptureGuard {
    /// Guard that runs `release` when dropped
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to detach
    #[must_use]
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("attached", &self.release.is_some())
            .finish()
    }
}

/// Capture for hosts that already deliver every pointer event to the slider
/// (terminals, tests, headless replays)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn capture(&mut self, _source: PointerSource) -> CaptureGuard {
        CaptureGuard::noop()
    }
}
