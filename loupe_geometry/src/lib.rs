// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Geometry: fit-center and pan clamping math for zoomable content.
//!
//! This crate holds the pure geometry behind a pinch/pan zoom controller for a
//! single rectangular raster shown inside a fixed-size viewport:
//! - The uniform scale that fits the content inside the viewport.
//! - The translation that centers the fitted content.
//! - The full content matrix for a zoom state (fit, then scale about the
//!   viewport center, then pan).
//! - Clamping a proposed pan so content edges never detach from the view.
//!
//! It does **not** track gestures or own any state. Missing content or
//! zero-size viewports degrade to neutral values (scale `1.0`, no
//! translation) instead of failing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use loupe_geometry::{Viewport, centering_translation, fit_scale_factor};
//!
//! let viewport = Viewport::new(Size::new(100.0, 100.0));
//! let content = Some(Size::new(200.0, 100.0));
//!
//! let scale = fit_scale_factor(content, &viewport);
//! assert_eq!(scale, 0.5);
//! assert_eq!(
//!     centering_translation(content, &viewport, scale),
//!     Vec2::new(0.5, 25.5)
//! );
//! ```
//!
//! ## Clamping example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use loupe_geometry::clamp_translation;
//!
//! let view = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let content = Rect::new(-20.0, 10.0, 180.0, 90.0);
//!
//! // Only 20px of room on the left; the short vertical axis is locked.
//! let clamped = clamp_translation(Vec2::new(50.0, 50.0), content, view);
//! assert_eq!(clamped, Vec2::new(20.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod layout;
mod modes;
mod viewport;

pub use fit::{
    NO_SCALE, centering_translation, clamp_translation, content_bounds, fit_center_transform,
    fit_scale_factor, zoom_transform,
};
pub use layout::ContentLayout;
pub use modes::DisplayMode;
pub use viewport::Viewport;
