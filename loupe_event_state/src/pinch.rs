// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch detector: turn two-pointer movement into a focus point and a
//! per-update scale factor.
//!
//! The detector only does pointer geometry. Interpreting the factor (clamping,
//! building transforms) is left to the caller, which answers every
//! [`PinchEvent::Update`] with a [`ScaleResponse`] through
//! [`PinchDetector::resolve`].
//!
//! - The focus is the mean position of all pointers that stay down.
//! - The span is twice the mean distance of those pointers from the focus;
//!   for two pointers that is simply the distance between them.
//! - A pinch begins on the first move with at least two pointers down and a
//!   span of at least the configured minimum.
//! - Each update reports `span / previous span`. The previous span advances
//!   only when the caller answers [`ScaleResponse::Continue`].
//! - A pinch ends when fewer than two pointers remain, when pointers are added
//!   or lifted (the next move starts a fresh pinch), when the series ends, or
//!   when the caller answers [`ScaleResponse::Stop`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use loupe_event_state::pinch::{PinchDetector, PinchEvent, ScaleResponse};
//! use loupe_event_state::pointer::{PointerAction, PointerEvent, PointerId};
//!
//! fn two(action: PointerAction, gap: f64) -> PointerEvent {
//!     PointerEvent::new(action, 0)
//!         .with_pointer(PointerId(0), Point::new(50.0 - gap / 2.0, 50.0))
//!         .with_pointer(PointerId(1), Point::new(50.0 + gap / 2.0, 50.0))
//! }
//!
//! let mut pinch = PinchDetector::new();
//! assert_eq!(
//!     pinch.on_event(&two(PointerAction::Move, 20.0)),
//!     Some(PinchEvent::Begin { focus: Point::new(50.0, 50.0) })
//! );
//! let Some(PinchEvent::Update { factor, .. }) = pinch.on_event(&two(PointerAction::Move, 40.0))
//! else {
//!     panic!("expected an update");
//! };
//! assert!((factor - 2.0).abs() < 1e-9);
//! pinch.resolve(ScaleResponse::Continue);
//! ```

use kurbo::{Point, Vec2};

use crate::pointer::{PointerAction, PointerEvent};

/// The caller's answer to a [`PinchEvent::Update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleResponse {
    /// Keep tracking; the reported span becomes the new baseline.
    Continue,
    /// Stop tracking this pinch until the set of pointers changes.
    Stop,
}

/// A transition reported by [`PinchDetector::on_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchEvent {
    /// A pinch started around `focus`.
    Begin {
        /// Mean position of the pointers.
        focus: Point,
    },
    /// The pinch moved.
    Update {
        /// Mean position of the pointers.
        focus: Point,
        /// Span relative to the last accepted span.
        factor: f64,
    },
    /// The pinch ended; `focus` is the last reported focus.
    End {
        /// Last reported focus.
        focus: Point,
    },
}

/// Two-pointer scale gesture detector.
#[derive(Clone, Debug)]
pub struct PinchDetector {
    min_span: f64,
    in_progress: bool,
    suspended: bool,
    prev_span: f64,
    pending_span: Option<f64>,
    last_focus: Point,
}

impl PinchDetector {
    /// Creates a detector that begins a pinch at any non-zero span.
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_span(0.0)
    }

    /// Creates a detector that waits for pointers to be at least `min_span`
    /// apart before beginning a pinch.
    #[must_use]
    pub fn with_min_span(min_span: f64) -> Self {
        Self {
            min_span: min_span.max(0.0),
            in_progress: false,
            suspended: false,
            prev_span: 0.0,
            pending_span: None,
            last_focus: Point::ORIGIN,
        }
    }

    /// Minimum span needed to begin a pinch.
    #[must_use]
    pub fn min_span(&self) -> f64 {
        self.min_span
    }

    /// Returns `true` between a [`PinchEvent::Begin`] and the end of that pinch.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Feeds one pointer event and reports the resulting transition, if any.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<PinchEvent> {
        if event.action == PointerAction::Down {
            self.reset();
        }

        let pointers_changed = matches!(
            event.action,
            PointerAction::PointerDown { .. } | PointerAction::PointerUp { .. }
        );
        if pointers_changed || event.action.ends_series() {
            let ended = self.finish();
            // A new pointer set may pinch again even after a stop.
            self.suspended = false;
            return ended;
        }

        if event.action != PointerAction::Move {
            return None;
        }

        let (count, focus, span) = measure(event);
        if self.in_progress {
            if count < 2 {
                return self.finish();
            }
            let factor = if self.prev_span > 0.0 {
                span / self.prev_span
            } else {
                1.0
            };
            self.pending_span = Some(span);
            self.last_focus = focus;
            return Some(PinchEvent::Update { focus, factor });
        }

        if !self.suspended && count >= 2 && span > 0.0 && span >= self.min_span {
            self.in_progress = true;
            self.prev_span = span;
            self.last_focus = focus;
            return Some(PinchEvent::Begin { focus });
        }
        None
    }

    /// Applies the caller's answer to the latest [`PinchEvent::Update`].
    ///
    /// Without a pending update this does nothing.
    pub fn resolve(&mut self, response: ScaleResponse) {
        let Some(span) = self.pending_span.take() else {
            return;
        };
        match response {
            ScaleResponse::Continue => {
                if span > 0.0 {
                    self.prev_span = span;
                }
            }
            ScaleResponse::Stop => {
                self.in_progress = false;
                self.suspended = true;
            }
        }
    }

    /// Forgets any pinch in progress without reporting an end.
    pub fn reset(&mut self) {
        self.in_progress = false;
        self.suspended = false;
        self.prev_span = 0.0;
        self.pending_span = None;
    }

    fn finish(&mut self) -> Option<PinchEvent> {
        self.pending_span = None;
        if !self.in_progress {
            return None;
        }
        self.in_progress = false;
        Some(PinchEvent::End {
            focus: self.last_focus,
        })
    }
}

impl Default for PinchDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `(count, focus, span)` for the pointers that stay down.
fn measure(event: &PointerEvent) -> (usize, Point, f64) {
    let mut count = 0_usize;
    let mut sum = Vec2::ZERO;
    for p in event.remaining_pointers() {
        count += 1;
        sum += p.position.to_vec2();
    }
    if count == 0 {
        return (0, Point::ORIGIN, 0.0);
    }
    let n = count as f64;
    let focus = (sum / n).to_point();
    let total: f64 = event
        .remaining_pointers()
        .map(|p| p.position.distance(focus))
        .sum();
    (count, focus, 2.0 * total / n)
}
