// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: remember where a touch series began and where the
//! primary pointer was last seen.
//!
//! ## Usage
//!
//! 1) Call [`DragState::begin`] with the touch-down position.
//! 2) On each move, read [`DragState::step`] (movement since the last seen
//!    position) and [`DragState::total_offset`] (movement since touch-down).
//! 3) Record the new position with [`DragState::track`] once the move has been
//!    interpreted.
//! 4) Call [`DragState::end`] when the series finishes.
//!
//! Reading and recording are separate so a caller can compare a move against
//! the previous position before deciding what to do with it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.begin(Point::new(10.0, 20.0));
//! assert!(drag.is_active());
//!
//! let pos = Point::new(15.0, 25.0);
//! assert_eq!(drag.step(pos), Some(Vec2::new(5.0, 5.0)));
//! drag.track(pos);
//!
//! let pos = Point::new(18.0, 21.0);
//! assert_eq!(drag.step(pos), Some(Vec2::new(3.0, -4.0)));
//! assert_eq!(drag.total_offset(pos), Some(Vec2::new(8.0, 1.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the initial and last seen position of a touch series.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    initial: Option<Point>,
    previous: Option<Point>,
}

impl DragState {
    /// Starts a new series at `pos`, discarding any previous one.
    pub fn begin(&mut self, pos: Point) {
        self.initial = Some(pos);
        self.previous = Some(pos);
    }

    /// Records `pos` as the last seen position.
    ///
    /// This also re-anchors step computation, so the next [`Self::step`]
    /// measures from `pos`. It has no effect outside a series.
    pub fn track(&mut self, pos: Point) {
        if self.initial.is_some() {
            self.previous = Some(pos);
        }
    }

    /// Movement from the last seen position to `pos`.
    #[must_use]
    pub fn step(&self, pos: Point) -> Option<Vec2> {
        self.previous.map(|prev| pos - prev)
    }

    /// Movement from the touch-down position to `pos`.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.initial.map(|start| pos - start)
    }

    /// Touch-down position of the current series.
    #[must_use]
    pub fn initial(&self) -> Option<Point> {
        self.initial
    }

    /// Last seen position of the current series.
    #[must_use]
    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    /// Ends the current series.
    pub fn end(&mut self) {
        self.initial = None;
        self.previous = None;
    }

    /// Returns `true` between [`Self::begin`] and [`Self::end`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.initial.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_inactive() {
        let drag = DragState::default();
        assert!(!drag.is_active());
        assert_eq!(drag.step(Point::new(1.0, 1.0)), None);
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn begin_sets_both_points() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);
        drag.begin(start);

        assert_eq!(drag.initial(), Some(start));
        assert_eq!(drag.previous(), Some(start));
        assert_eq!(drag.step(start), Some(Vec2::ZERO));
    }

    #[test]
    fn step_does_not_record_position() {
        let mut drag = DragState::default();
        drag.begin(Point::new(0.0, 0.0));

        let pos = Point::new(5.0, 3.0);
        assert_eq!(drag.step(pos), Some(Vec2::new(5.0, 3.0)));
        // Reading twice gives the same answer until the position is tracked.
        assert_eq!(drag.step(pos), Some(Vec2::new(5.0, 3.0)));

        drag.track(pos);
        assert_eq!(drag.step(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn total_offset_ignores_tracking() {
        let mut drag = DragState::default();
        drag.begin(Point::new(10.0, 20.0));
        drag.track(Point::new(15.0, 25.0));
        drag.track(Point::new(12.0, 22.0));

        assert_eq!(
            drag.total_offset(Point::new(20.0, 35.0)),
            Some(Vec2::new(10.0, 15.0))
        );
    }

    #[test]
    fn track_outside_a_series_is_ignored() {
        let mut drag = DragState::default();
        drag.track(Point::new(1.0, 2.0));
        assert_eq!(drag.previous(), None);
    }

    #[test]
    fn end_clears_the_series() {
        let mut drag = DragState::default();
        drag.begin(Point::new(10.0, 20.0));
        drag.end();

        assert!(!drag.is_active());
        assert_eq!(drag.previous(), None);
    }

    #[test]
    fn begin_overwrites_previous_series() {
        let mut drag = DragState::default();
        drag.begin(Point::new(0.0, 0.0));
        drag.track(Point::new(10.0, 10.0));

        drag.begin(Point::new(50.0, 60.0));
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
        assert_eq!(drag.step(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }
}
