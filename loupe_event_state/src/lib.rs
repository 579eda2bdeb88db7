// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Event State: pointer records and touch trackers for zoom gestures.
//!
//! This crate provides the input side of a pinch/pan controller. It knows
//! nothing about transforms; it only turns raw pointer positions into the
//! quantities a controller interprets:
//!
//! - [`pointer`]: the [`PointerEvent`](pointer::PointerEvent) record a host
//!   delivers for each step of a touch series.
//! - [`drag`]: where a series started and where the primary pointer was last
//!   seen, for pan deltas and touch-slop decisions.
//! - [`pinch`]: a two-pointer detector reporting a focus point and a scale
//!   factor per move.
//!
//! ## Feeding a pinch
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_event_state::pinch::{PinchDetector, PinchEvent, ScaleResponse};
//! use loupe_event_state::pointer::{PointerAction, PointerEvent, PointerId};
//!
//! let mut pinch = PinchDetector::new();
//! let ev = |gap: f64| {
//!     PointerEvent::new(PointerAction::Move, 0)
//!         .with_pointer(PointerId(0), Point::new(0.0, 0.0))
//!         .with_pointer(PointerId(1), Point::new(gap, 0.0))
//! };
//!
//! assert!(matches!(pinch.on_event(&ev(10.0)), Some(PinchEvent::Begin { .. })));
//! if let Some(PinchEvent::Update { factor, .. }) = pinch.on_event(&ev(15.0)) {
//!     assert!((factor - 1.5).abs() < 1e-9);
//!     pinch.resolve(ScaleResponse::Continue);
//! }
//! ```
//!
//! ## Tracking a drag
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.begin(Point::new(10.0, 10.0));
//! let pos = Point::new(13.0, 14.0);
//! assert_eq!(drag.total_offset(pos).map(|v| v.hypot()), Some(5.0));
//! drag.track(pos);
//! assert_eq!(drag.step(pos), Some(Vec2::ZERO));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pinch;
pub mod pointer;
