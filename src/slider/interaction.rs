//! Dual-handle range slider
//!
//! Translates pointer and touch events into a validated price interval.
//! Moves report the raw (unsnapped) value so the handle tracks the pointer
//! smoothly; the release snaps it to the step grid. A click on the track
//! moves whichever handle is nearer, snapped immediately. After every update
//! the handles are at least [`SliderDomain::minimum_gap`] apart.

use super::capture::{NoCapture, PointerCapture, PointerSource};
use super::geometry::{SliderDomain, TrackRect};
use super::state::{DragSession, Handle, SliderChange, SliderState, SliderView};
use crate::filters::{FilterEngine, PriceInterval};

/// Range slider over a price domain
#[derive(Debug)]
pub struct RangeSlider<C: PointerCapture = NoCapture> {
    domain: SliderDomain,
    value: PriceInterval,
    track: Option<TrackRect>,
    state: SliderState,
    capture: C,
}

impl RangeSlider<NoCapture> {
    /// Create an idle slider
    ///
    /// The initial interval is clamped into the domain and widened to the
    /// minimum gap if needed.
    #[must_use]
    pub fn new(domain_min: f64, domain_max: f64, initial: PriceInterval, step: f64) -> Self {
        let domain = SliderDomain::new(domain_min, domain_max, step);
        Self {
            value: normalize(domain, initial),
            domain,
            track: None,
            state: SliderState::Idle,
            capture: NoCapture,
        }
    }

    /// Create a slider bound to the engine's price domain and interval
    #[must_use]
    pub fn for_engine(engine: &FilterEngine) -> Self {
        let options = engine.options();
        Self::new(
            options.min_price,
            options.max_price,
            engine.price_interval(),
            options.slider_step,
        )
    }
}

impl<C: PointerCapture> RangeSlider<C> {
    /// Use `capture` to attach global listeners during drags
    #[must_use]
    pub fn with_capture<D: PointerCapture>(self, capture: D) -> RangeSlider<D> {
        RangeSlider {
            domain: self.domain,
            value: self.value,
            track: self.track,
            state: SliderState::Idle,
            capture,
        }
    }

    #[must_use]
    pub const fn domain(&self) -> &SliderDomain {
        &self.domain
    }

    #[must_use]
    pub const fn value(&self) -> PriceInterval {
        self.value
    }

    #[must_use]
    pub const fn state(&self) -> &SliderState {
        &self.state
    }

    #[must_use]
    pub const fn active_handle(&self) -> Option<Handle> {
        self.state.active_handle()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, SliderState::Dragging(_))
    }

    #[must_use]
    pub const fn capture(&self) -> &C {
        &self.capture
    }

    /// Record the track's rendered bounding box
    pub const fn set_track(&mut self, track: TrackRect) {
        self.track = Some(track);
    }

    /// Sync the handles to an interval chosen elsewhere (e.g. a reset)
    pub fn set_value(&mut self, value: PriceInterval) {
        self.value = normalize(self.domain, value);
    }

    /// Change the domain, keeping the current interval where possible
    pub fn set_domain(&mut self, domain_min: f64, domain_max: f64, step: f64) {
        self.domain = SliderDomain::new(domain_min, domain_max, step);
        self.value = normalize(self.domain, self.value);
    }

    /// Drawing state for the rendering layer
    #[must_use]
    pub fn view(&self) -> SliderView {
        SliderView {
            low: self.value.low,
            high: self.value.high,
            low_percent: self.domain.percentage(self.value.low),
            high_percent: self.domain.percentage(self.value.high),
            active: self.active_handle(),
        }
    }

    /// Mouse button pressed on a handle
    ///
    /// Returns false if a drag is already in progress.
    pub fn pointer_down(&mut self, handle: Handle) -> bool {
        self.begin_drag(handle, PointerSource::Mouse)
    }

    /// Touch started on a handle
    ///
    /// Ignored when the event carries no touch points.
    pub fn touch_start(&mut self, handle: Handle, touches: &[f64]) -> bool {
        if touches.is_empty() {
            return false;
        }
        self.begin_drag(handle, PointerSource::Touch)
    }

    /// Mouse moved anywhere while captured
    pub fn pointer_move(&mut self, client_x: f64) -> Option<SliderChange> {
        self.drag_to(PointerSource::Mouse, client_x)
    }

    /// Touch moved anywhere while captured
    pub fn touch_move(&mut self, touches: &[f64]) -> Option<SliderChange> {
        let &client_x = touches.first()?;
        self.drag_to(PointerSource::Touch, client_x)
    }

    /// Mouse released; commits a snapped value and ends the drag
    pub fn pointer_up(&mut self, client_x: f64) -> Option<SliderChange> {
        self.end_drag(Some(client_x))
    }

    /// Touch ended; commits a snapped value if the event reports where
    pub fn touch_end(&mut self, changed_touches: &[f64]) -> Option<SliderChange> {
        self.end_drag(changed_touches.first().copied())
    }

    /// Click on the track outside any drag
    ///
    /// Moves exactly one handle, whichever is nearer the click (the max
    /// handle on a tie), snapped to the step grid.
    pub fn track_click(&mut self, client_x: f64) -> Option<SliderChange> {
        if self.is_dragging() {
            return None;
        }
        let clicked = self.value_at(client_x)?;
        let handle = if (clicked - self.value.low).abs() < (clicked - self.value.high).abs() {
            Handle::Min
        } else {
            Handle::Max
        };
        Some(self.emit(handle, clicked, true))
    }

    fn begin_drag(&mut self, handle: Handle, source: PointerSource) -> bool {
        if self.is_dragging() {
            return false;
        }
        let guard = self.capture.capture(source);
        self.state = SliderState::Dragging(DragSession::new(handle, source, guard));
        log::trace!("drag started on {handle} handle ({source:?})");
        true
    }

    fn drag_to(&mut self, source: PointerSource, client_x: f64) -> Option<SliderChange> {
        let handle = match &mut self.state {
            SliderState::Dragging(session) if session.source == source => {
                session.pointer_x = Some(client_x);
                session.handle
            }
            _ => return None,
        };
        let raw = self.value_at(client_x)?;
        Some(self.emit(handle, raw, false))
    }

    /// The only way out of `Dragging`; replacing the state drops the
    /// session and with it the capture guard.
    fn end_drag(&mut self, client_x: Option<f64>) -> Option<SliderChange> {
        let SliderState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        let handle = session.handle;
        drop(session);

        let change = client_x
            .and_then(|x| self.value_at(x))
            .map(|raw| self.emit(handle, raw, true));
        log::trace!("drag ended on {handle} handle at {}", self.value);
        change
    }

    fn value_at(&self, client_x: f64) -> Option<f64> {
        let percentage = self.track?.percentage_at(client_x)?;
        Some(self.domain.value_at(percentage))
    }

    fn emit(&mut self, handle: Handle, raw: f64, snap: bool) -> SliderChange {
        self.value = self.position_handle(handle, raw, snap);
        SliderChange {
            interval: self.value,
            committed: snap,
        }
    }

    /// Place `handle` at `raw`, keeping the other handle fixed and the two
    /// at least the minimum gap apart
    fn position_handle(&self, handle: Handle, raw: f64, snap: bool) -> PriceInterval {
        let domain = &self.domain;
        let gap = domain.minimum_gap();
        let target = if snap { domain.snap(raw) } else { domain.clamp(raw) };
        match handle {
            Handle::Min => {
                let high = self.value.high;
                let low = target.min(high - gap).max(domain.min());
                PriceInterval {
                    low: lower_until_gap(low, high, gap, domain.min()),
                    high,
                }
            }
            Handle::Max => {
                let low = self.value.low;
                let high = target.max(low + gap).min(domain.max());
                PriceInterval {
                    low,
                    high: raise_until_gap(low, high, gap, domain.max()),
                }
            }
        }
    }
}

fn normalize(domain: SliderDomain, value: PriceInterval) -> PriceInterval {
    let value = value.clamped(domain.min(), domain.max());
    let gap = domain.minimum_gap();
    if value.width() >= gap {
        return value;
    }
    let high = (value.low + gap).min(domain.max());
    let low = lower_until_gap(
        (high - gap).max(domain.min()),
        high,
        gap,
        domain.min(),
    );
    PriceInterval {
        low,
        high: raise_until_gap(low, high, gap, domain.max()),
    }
}

/// Step `low` down one ulp at a time until `high - low >= gap` or it
/// reaches `floor`
///
/// `high - gap` and `low + gap` can land a few ulps short of the gap once
/// subtracted back, so the bound is walked outward until the width holds.
fn lower_until_gap(mut low: f64, high: f64, gap: f64, floor: f64) -> f64 {
    while high - low < gap && low > floor {
        low = low.next_down().max(floor);
    }
    low
}

/// Counterpart of [`lower_until_gap`] for the upper bound
fn raise_until_gap(low: f64, mut high: f64, gap: f64, ceiling: f64) -> f64 {
    while high - low < gap && high < ceiling {
        high = high.next_up().min(ceiling);
    }
    high
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingCapture, wardrobe};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    /// Domain [0, 1000], step 50, on a 500px track starting at x=100
    fn slider(low: f64, high: f64) -> RangeSlider<CountingCapture> {
        let mut slider = RangeSlider::new(0.0, 1_000.0, PriceInterval::new(low, high), 50.0)
            .with_capture(CountingCapture::default());
        slider.set_track(TrackRect::new(100.0, 500.0));
        slider
    }

    /// Client x for a domain value on the test track
    fn x(value: f64) -> f64 {
        100.0 + value / 2.0
    }

    #[test]
    fn test_drag_min_stops_at_gap() {
        let mut s = slider(0.0, 600.0);
        assert!(s.pointer_down(Handle::Min));
        let change = s.pointer_move(x(590.0)).unwrap();
        assert!(!change.committed);
        assert!(change.interval.low <= 550.0);
        assert!(change.interval.width() >= s.domain().minimum_gap());
        assert!((change.interval.high - 600.0).abs() < EPS);

        let change = s.pointer_move(x(900.0)).unwrap();
        assert!((change.interval.low - 550.0).abs() < EPS);
    }

    #[test]
    fn test_drag_max_stops_at_gap() {
        let mut s = slider(400.0, 1_000.0);
        s.pointer_down(Handle::Max);
        let change = s.pointer_move(x(100.0)).unwrap();
        assert!((change.interval.high - 450.0).abs() < EPS);
        assert!((change.interval.low - 400.0).abs() < EPS);
    }

    #[test]
    fn test_move_is_unsnapped_release_is_snapped() {
        let mut s = slider(0.0, 1_000.0);
        s.pointer_down(Handle::Min);
        let live = s.pointer_move(x(237.0)).unwrap();
        assert!((live.interval.low - 237.0).abs() < EPS);

        let committed = s.pointer_up(x(237.0)).unwrap();
        assert!(committed.committed);
        assert!((committed.interval.low - 250.0).abs() < EPS);
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_drag_clamps_outside_track() {
        let mut s = slider(200.0, 800.0);
        s.pointer_down(Handle::Max);
        let change = s.pointer_move(5_000.0).unwrap();
        assert!((change.interval.high - 1_000.0).abs() < EPS);

        s.pointer_up(5_000.0);
        s.pointer_down(Handle::Min);
        let change = s.pointer_move(-5_000.0).unwrap();
        assert!((change.interval.low - 0.0).abs() < EPS);
    }

    #[test]
    fn test_moves_without_drag_are_ignored() {
        let mut s = slider(200.0, 800.0);
        assert_eq!(s.pointer_move(x(500.0)), None);
        assert_eq!(s.pointer_up(x(500.0)), None);
        assert_eq!(s.value(), PriceInterval::new(200.0, 800.0));
    }

    #[test]
    fn test_second_press_during_drag_is_rejected() {
        let mut s = slider(200.0, 800.0);
        assert!(s.pointer_down(Handle::Min));
        assert!(!s.pointer_down(Handle::Max));
        assert!(!s.touch_start(Handle::Max, &[x(700.0)]));
        assert_eq!(s.active_handle(), Some(Handle::Min));
        assert_eq!(s.capture().acquired(), 1);
    }

    #[test]
    fn test_capture_released_on_every_exit() {
        let mut s = slider(200.0, 800.0);
        let capture = s.capture().clone();

        s.pointer_down(Handle::Min);
        assert_eq!(capture.active(), 1);
        s.pointer_up(x(300.0));
        assert_eq!(capture.active(), 0);

        s.touch_start(Handle::Max, &[x(800.0)]);
        assert_eq!(capture.active(), 1);
        assert_eq!(s.touch_end(&[]), None);
        assert_eq!(capture.active(), 0);

        s.touch_start(Handle::Min, &[x(200.0)]);
        s.pointer_up(x(100.0));
        assert_eq!(capture.active(), 0);

        s.pointer_down(Handle::Max);
        drop(s);
        assert_eq!(capture.active(), 0);
        assert_eq!(capture.acquired(), 4);
    }

    #[test]
    fn test_touch_drag() {
        let mut s = slider(200.0, 800.0);
        assert!(!s.touch_start(Handle::Max, &[]));
        assert!(s.touch_start(Handle::Max, &[x(800.0)]));

        assert_eq!(s.touch_move(&[]), None);
        assert_eq!(s.pointer_move(x(500.0)), None);
        let live = s.touch_move(&[x(612.0), x(10.0)]).unwrap();
        assert!((live.interval.high - 612.0).abs() < EPS);

        let done = s.touch_end(&[x(612.0)]).unwrap();
        assert!((done.interval.high - 600.0).abs() < EPS);
        assert_eq!(s.active_handle(), None);
    }

    #[test]
    fn test_track_click_moves_nearest_handle() {
        let mut s = slider(200.0, 800.0);
        let change = s.track_click(x(320.0)).unwrap();
        assert!(change.committed);
        assert_eq!(change.interval, PriceInterval::new(300.0, 800.0));

        let change = s.track_click(x(690.0)).unwrap();
        assert_eq!(change.interval, PriceInterval::new(300.0, 700.0));
    }

    #[test]
    fn test_track_click_tie_moves_max() {
        let mut s = slider(200.0, 800.0);
        let change = s.track_click(x(500.0)).unwrap();
        assert_eq!(change.interval, PriceInterval::new(200.0, 500.0));
    }

    #[test]
    fn test_track_click_respects_gap() {
        let mut s = slider(400.0, 600.0);
        let change = s.track_click(x(590.0)).unwrap();
        assert_eq!(change.interval, PriceInterval::new(400.0, 600.0));

        let change = s.track_click(x(420.0)).unwrap();
        assert_eq!(change.interval, PriceInterval::new(400.0, 600.0));
    }

    #[test]
    fn test_track_click_ignored_while_dragging() {
        let mut s = slider(200.0, 800.0);
        s.pointer_down(Handle::Min);
        assert_eq!(s.track_click(x(900.0)), None);
    }

    #[test]
    fn test_no_track_means_no_updates() {
        let mut s = RangeSlider::new(0.0, 1_000.0, PriceInterval::new(0.0, 1_000.0), 50.0);
        assert_eq!(s.track_click(300.0), None);
        s.pointer_down(Handle::Min);
        assert_eq!(s.pointer_move(300.0), None);
        assert_eq!(s.pointer_up(300.0), None);
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_gap_exact_when_sum_rounds_short() {
        // 5% of 9734 is not representable; low + gap rounds below the gap
        let mut s = RangeSlider::new(137.0, 9_871.0, PriceInterval::new(1_595.0, 9_871.0), 0.0);
        s.set_track(TrackRect::new(0.0, 1_000.0));
        let gap = s.domain().minimum_gap();

        s.pointer_down(Handle::Max);
        s.pointer_move(0.0);
        assert!(s.value().width() >= gap, "{} narrower than {gap}", s.value());
        s.pointer_up(0.0);
        assert!(s.value().width() >= gap, "{} narrower than {gap}", s.value());
        assert!((s.value().low - 1_595.0).abs() < f64::EPSILON);

        s.set_value(PriceInterval::new(4_000.0, 4_000.0));
        assert!(s.value().width() >= gap);
        s.set_value(PriceInterval::new(9_871.0, 9_871.0));
        assert!(s.value().width() >= gap);
        assert!(s.value().high <= 9_871.0);
    }

    /// Pointer, touch and click events as (kind, track fraction) pairs
    fn events() -> impl Strategy<Value = Vec<(u8, f64)>> {
        prop::collection::vec((0u8..9, -0.2f64..1.2), 1..60)
    }

    proptest! {
        #[test]
        fn test_gap_holds_for_any_event_sequence(
            min in 0.0f64..20_000.0,
            span in 0.0f64..60_000.0,
            step in 0.0f64..1_000.0,
            start in (0.0f64..=1.0, 0.0f64..=1.0),
            events in events(),
        ) {
            let max = min + span;
            let initial = PriceInterval::new(start.0.mul_add(span, min), start.1.mul_add(span, min));
            let mut s = RangeSlider::new(min, max, initial, step)
                .with_capture(CountingCapture::default());
            s.set_track(TrackRect::new(40.0, 600.0));
            let gap = s.domain().minimum_gap();
            prop_assert!(s.value().width() >= gap);

            for (kind, at) in events {
                let x = at.mul_add(600.0, 40.0);
                match kind {
                    0 => { s.pointer_down(Handle::Min); }
                    1 => { s.pointer_down(Handle::Max); }
                    2 => { s.touch_start(Handle::Min, &[x]); }
                    3 => { s.pointer_move(x); }
                    4 => { s.touch_move(&[x]); }
                    5 => { s.pointer_up(x); }
                    6 => { s.touch_end(&[x]); }
                    7 => { s.touch_end(&[]); }
                    _ => { s.track_click(x); }
                }
                let value = s.value();
                prop_assert!(value.width() >= gap, "{} narrower than {}", value, gap);
                prop_assert!(value.low >= min && value.high <= max, "{} outside [{}, {}]", value, min, max);
            }
            let capture = s.capture().clone();
            drop(s);
            prop_assert_eq!(capture.active(), 0);
        }

        #[test]
        fn test_set_value_normalizes_any_interval(
            min in 0.0f64..20_000.0,
            span in 0.0f64..60_000.0,
            low in -10_000.0f64..100_000.0,
            high in -10_000.0f64..100_000.0,
        ) {
            let mut s = RangeSlider::new(min, min + span, PriceInterval::new(min, min + span), 0.0);
            s.set_value(PriceInterval::new(low, high));
            let value = s.value();
            prop_assert!(value.width() >= s.domain().minimum_gap());
            prop_assert!(value.low >= min && value.high <= min + span);
        }
    }

    #[test]
    fn test_initial_value_normalized() {
        let s = RangeSlider::new(0.0, 1_000.0, PriceInterval::new(980.0, 2_000.0), 50.0);
        assert_eq!(s.value(), PriceInterval::new(950.0, 1_000.0));
    }

    #[test]
    fn test_degenerate_domain_view() {
        let mut s = RangeSlider::new(799.0, 799.0, PriceInterval::new(799.0, 799.0), 50.0);
        s.set_track(TrackRect::new(0.0, 200.0));
        let view = s.view();
        assert!((view.low_percent - 0.0).abs() < f64::EPSILON);
        assert!((view.high_percent - 0.0).abs() < f64::EPSILON);

        let change = s.track_click(150.0).unwrap();
        assert_eq!(change.interval, PriceInterval::new(799.0, 799.0));
    }

    #[test]
    fn test_view_reports_active_handle() {
        let mut s = slider(250.0, 750.0);
        let view = s.view();
        assert!((view.low_percent - 25.0).abs() < EPS);
        assert!((view.high_percent - 75.0).abs() < EPS);
        assert_eq!(view.active, None);

        s.pointer_down(Handle::Max);
        assert_eq!(s.view().active, Some(Handle::Max));
    }

    #[test]
    fn test_committed_change_drives_engine() {
        let mut engine = FilterEngine::new(wardrobe());
        engine.toggle_price_bracket("₹500 - ₹999");

        let mut s = RangeSlider::for_engine(&engine);
        s.set_track(TrackRect::new(0.0, 970.1));
        s.pointer_down(Handle::Max);
        let change = s.pointer_up(100.0).unwrap();
        change.apply(&mut engine);

        assert!(engine.selection().price_brackets.is_empty());
        assert!(engine.is_price_interval_active());
        assert!(engine.filtered_products().iter().all(|p| p.price <= change.interval.high));
    }
}
