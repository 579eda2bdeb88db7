// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use loupe_event_state::drag::DragState;
use loupe_event_state::pointer::PointerId;
use loupe_geometry::NO_SCALE;

/// Per-series gesture bookkeeping.
///
/// Besides pointer tracking, a session records how far the user *tried* to
/// pan or scale. Those attempts decide whether the closing up/cancel event is
/// consumed, so that a gesture which ends exactly where it started (a pinch
/// that overshot and snapped back, say) is not mistaken for a tap by an
/// ancestor.
#[derive(Clone, Debug)]
pub struct GestureSession {
    pub(crate) drag: DragState,
    pub(crate) pan_pointer: Option<PointerId>,
    pub(crate) multi_pointer: bool,
    pub(crate) last_focus: Point,
    attempted_pan_max: f64,
    attempted_scale_max: f64,
    attempted_scale_min: f64,
    scale_max: f64,
    scale_min: f64,
}

impl GestureSession {
    pub(crate) fn new() -> Self {
        Self {
            drag: DragState::default(),
            pan_pointer: None,
            multi_pointer: false,
            last_focus: Point::ORIGIN,
            attempted_pan_max: 0.0,
            attempted_scale_max: NO_SCALE,
            attempted_scale_min: NO_SCALE,
            scale_max: NO_SCALE,
            scale_min: NO_SCALE,
        }
    }

    /// Starts a series at `pos`.
    pub(crate) fn begin(&mut self, pos: Point, multi_pointer: bool) {
        self.drag.begin(pos);
        self.multi_pointer = multi_pointer;
    }

    /// Starts a series whose down event carried no position.
    ///
    /// Nothing is tracked until a move arrives, but state from the previous
    /// series must not leak into this one.
    pub(crate) fn begin_without_position(&mut self) {
        self.drag.end();
        self.multi_pointer = false;
    }

    /// Ends a series, clearing every accumulator.
    ///
    /// The realized scale range collapses onto `current_scale`, which is where
    /// the next series starts from. The multi-pointer flag is left for the
    /// next series to overwrite.
    pub(crate) fn end(&mut self, current_scale: f64) {
        self.drag.end();
        self.pan_pointer = None;
        self.attempted_pan_max = 0.0;
        self.attempted_scale_max = NO_SCALE;
        self.attempted_scale_min = NO_SCALE;
        self.snapshot_scale(current_scale);
    }

    /// Collapses the realized scale range onto `scale`.
    pub(crate) fn snapshot_scale(&mut self, scale: f64) {
        self.scale_max = scale;
        self.scale_min = scale;
    }

    pub(crate) fn record_pan_attempt(&mut self, distance: f64) {
        self.attempted_pan_max = self.attempted_pan_max.max(distance);
    }

    pub(crate) fn record_scale_attempt(&mut self, factor: f64) {
        self.attempted_scale_max = self.attempted_scale_max.max(factor);
        self.attempted_scale_min = self.attempted_scale_min.min(factor);
    }

    pub(crate) fn record_scale(&mut self, scale: f64) {
        self.scale_max = self.scale_max.max(scale);
        self.scale_min = self.scale_min.min(scale);
    }

    /// Returns `true` if the realized scale moved during this series.
    #[must_use]
    pub fn has_scaled(&self) -> bool {
        self.scale_min != self.scale_max
    }

    /// Returns `true` if the primary pointer strayed beyond `touch_slop`
    /// from where the series began while panning.
    #[must_use]
    pub fn has_attempted_pan(&self, touch_slop: f64) -> bool {
        self.attempted_pan_max > touch_slop
    }

    /// Returns `true` if any pinch update reported a factor other than `1.0`,
    /// whether or not it changed the scale.
    #[must_use]
    pub fn has_attempted_scale(&self) -> bool {
        self.attempted_scale_max != NO_SCALE || self.attempted_scale_min != NO_SCALE
    }

    /// Returns `true` once more than one pointer was seen in this series.
    #[must_use]
    pub fn is_multi_pointer(&self) -> bool {
        self.multi_pointer
    }

    /// Pointer currently driving a single-pointer pan, if any.
    #[must_use]
    pub fn pan_pointer(&self) -> Option<PointerId> {
        self.pan_pointer
    }

    /// Largest distance from the series start seen while panning.
    #[must_use]
    pub fn attempted_pan_max(&self) -> f64 {
        self.attempted_pan_max
    }

    /// Smallest and largest raw pinch factors seen, as `(min, max)`.
    #[must_use]
    pub fn attempted_scale_range(&self) -> (f64, f64) {
        (self.attempted_scale_min, self.attempted_scale_max)
    }

    /// Smallest and largest clamped scales reached, as `(min, max)`.
    #[must_use]
    pub fn scale_range(&self) -> (f64, f64) {
        (self.scale_min, self.scale_max)
    }
}
