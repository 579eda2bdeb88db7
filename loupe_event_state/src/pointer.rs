// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event records as delivered by the host.
//!
//! A [`PointerEvent`] is one step of a touch series: an action plus the
//! positions of every pointer currently on the surface. Positions are in
//! view-local coordinates. Sample `0` is the primary pointer; it is the one
//! single-pointer tracking follows.

use kurbo::Point;
use smallvec::SmallVec;

/// Host-assigned identifier of a pointer, stable for as long as it stays down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// What happened in a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// The first pointer touched down; a new series starts.
    Down,
    /// An additional pointer touched down. `index` is its sample index.
    PointerDown {
        /// Sample index of the pointer that went down.
        index: usize,
    },
    /// One or more pointers moved.
    Move,
    /// A non-final pointer lifted. `index` is its sample index; the sample is
    /// still present in this event.
    PointerUp {
        /// Sample index of the pointer that lifted.
        index: usize,
    },
    /// The last pointer lifted; the series ends.
    Up,
    /// The series was aborted by the host.
    Cancel,
}

impl PointerAction {
    /// Returns `true` for the actions that close a series.
    #[must_use]
    pub fn ends_series(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// Position of one pointer within an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer identifier.
    pub id: PointerId,
    /// View-local position.
    pub position: Point,
}

/// One pointer event of a touch series.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// The action this event reports.
    pub action: PointerAction,
    /// Every pointer currently down, primary first.
    pub pointers: SmallVec<[PointerSample; 2]>,
    /// Host timestamp in milliseconds, monotonic within a series.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event with no pointer samples.
    #[must_use]
    pub fn new(action: PointerAction, time_ms: u64) -> Self {
        Self {
            action,
            pointers: SmallVec::new(),
            time_ms,
        }
    }

    /// Creates a single-pointer event.
    #[must_use]
    pub fn single(action: PointerAction, id: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(action, time_ms).with_pointer(id, position)
    }

    /// Appends a pointer sample.
    #[must_use]
    pub fn with_pointer(mut self, id: PointerId, position: Point) -> Self {
        self.pointers.push(PointerSample { id, position });
        self
    }

    /// Number of pointers reported in this event.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Position of the primary pointer, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.pointers.first().map(|p| p.position)
    }

    /// Identifier of the primary pointer, if any.
    #[must_use]
    pub fn primary_id(&self) -> Option<PointerId> {
        self.pointers.first().map(|p| p.id)
    }

    /// Iterates over the pointers that remain down after this event.
    ///
    /// This skips the lifting pointer of a [`PointerAction::PointerUp`] and
    /// yields nothing once the series ends.
    pub fn remaining_pointers(&self) -> impl Iterator<Item = &PointerSample> {
        let skip = match self.action {
            PointerAction::PointerUp { index } => Some(index),
            _ => None,
        };
        let ended = self.action.ends_series();
        self.pointers
            .iter()
            .enumerate()
            .filter(move |(i, _)| !ended && Some(*i) != skip)
            .map(|(_, p)| p)
    }
}
