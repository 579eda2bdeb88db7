// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Zoom: a touch pan/zoom controller for a single piece of content.
//!
//! A [`ZoomController`] sits between a widget's touch input and its rendering.
//! It consumes [`PointerEvent`]s and produces content matrices, display-mode
//! switches, and parent gesture-lock requests through a [`ZoomHost`]:
//!
//! - Two-pointer pinches scale the content about the viewport center, between
//!   the fitted size (`1.0`) and [`ZoomConfig::max_scale`], following the
//!   pinch focus as it drifts.
//! - Single-pointer drags pan zoomed content without ever detaching its edges
//!   from the viewport.
//! - Single-pointer drags on unzoomed content are handed back to ancestors
//!   once they exceed the touch slop, so an enclosing list can scroll.
//! - Pinching back to the fitted size resets to fit, animated when the scale
//!   actually changed. The host drives animations with
//!   [`ZoomController::tick`].
//!
//! Geometry lives in [`loupe_geometry`] and pointer tracking in
//! [`loupe_event_state`]; the commonly needed types are re-exported here.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Size};
//! use loupe_zoom::{
//!     DisplayMode, PointerAction, PointerEvent, PointerId, Viewport, ZoomController, ZoomHost,
//! };
//!
//! #[derive(Default)]
//! struct Widget {
//!     mode: DisplayMode,
//!     matrix: Option<Affine>,
//! }
//!
//! impl ZoomHost for Widget {
//!     fn set_display_mode(&mut self, mode: DisplayMode) {
//!         self.mode = mode;
//!     }
//!     fn apply_transform(&mut self, matrix: Affine) {
//!         self.matrix = Some(matrix);
//!     }
//!     fn request_parent_gesture_lock(&mut self, _locked: bool) {}
//! }
//!
//! let mut zoom = ZoomController::default();
//! zoom.set_viewport(Viewport::new(Size::new(100.0, 100.0)));
//! zoom.set_content_size(Some(Size::new(100.0, 100.0)));
//! let mut widget = Widget::default();
//!
//! let pinch = |action: PointerAction, gap: f64| {
//!     PointerEvent::new(action, 0)
//!         .with_pointer(PointerId(0), Point::new(50.0 - gap / 2.0, 50.0))
//!         .with_pointer(PointerId(1), Point::new(50.0 + gap / 2.0, 50.0))
//! };
//!
//! let down = PointerEvent::single(PointerAction::Down, PointerId(0), Point::new(30.0, 50.0), 0);
//! assert!(zoom.on_touch_event(&down, &mut widget));
//! zoom.on_touch_event(&pinch(PointerAction::PointerDown { index: 1 }, 40.0), &mut widget);
//! zoom.on_touch_event(&pinch(PointerAction::Move, 40.0), &mut widget);
//! zoom.on_touch_event(&pinch(PointerAction::Move, 80.0), &mut widget);
//!
//! assert_eq!(zoom.scale(), 2.0);
//! assert_eq!(widget.mode, DisplayMode::FreeTransform);
//! assert_eq!(widget.matrix, Some(zoom.matrix()));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
mod config;
mod controller;
mod host;
mod session;
mod transform;

pub use animator::{ResetAnimation, ResetAnimator, ResetFrame, ResetOutcome};
pub use config::{
    ConfigError, DEFAULT_MAX_SCALE, DEFAULT_RESET_DURATION_MS, DEFAULT_TOUCH_SLOP, ZoomConfig,
};
pub use controller::{ZoomController, ZoomDebugInfo};
pub use host::ZoomHost;
pub use session::GestureSession;
pub use transform::{ContentTransform, TransformStore};

pub use loupe_event_state::pinch::ScaleResponse;
pub use loupe_event_state::pointer::{PointerAction, PointerEvent, PointerId, PointerSample};
pub use loupe_geometry::{ContentLayout, DisplayMode, NO_SCALE, Viewport};
