// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size, Vec2};

use crate::fit;
use crate::viewport::Viewport;

/// A viewport paired with the (optional) intrinsic size of its content.
///
/// This bundles the two host-owned inputs every geometry query needs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentLayout {
    /// The viewport content is shown in.
    pub viewport: Viewport,
    /// Intrinsic content size, or `None` when nothing is loaded.
    pub content: Option<Size>,
}

impl ContentLayout {
    /// Creates a layout for `content` inside `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport, content: Option<Size>) -> Self {
        Self { viewport, content }
    }

    /// See [`crate::fit_scale_factor`].
    #[must_use]
    pub fn fit_scale(&self) -> f64 {
        fit::fit_scale_factor(self.content, &self.viewport)
    }

    /// See [`crate::fit_center_transform`].
    #[must_use]
    pub fn fit_center_transform(&self) -> Affine {
        fit::fit_center_transform(self.content, &self.viewport)
    }

    /// See [`crate::zoom_transform`].
    #[must_use]
    pub fn zoom_transform(&self, scale: f64, translation: Vec2) -> Affine {
        fit::zoom_transform(self.content, &self.viewport, scale, translation)
    }

    /// Content rectangle under `matrix`, in view-local coordinates.
    #[must_use]
    pub fn content_bounds(&self, matrix: Affine) -> Option<Rect> {
        fit::content_bounds(self.content, matrix)
    }

    /// Clamps a pan `delta` for content currently drawn through `matrix`.
    ///
    /// Content edges are kept against the viewport's
    /// [content rectangle](Viewport::content_rect).
    ///
    /// Without content there is nothing to keep in view and `delta` is
    /// returned unchanged.
    #[must_use]
    pub fn clamp_pan(&self, delta: Vec2, matrix: Affine) -> Vec2 {
        match self.content_bounds(matrix) {
            Some(bounds) => fit::clamp_translation(delta, bounds, self.viewport.content_rect()),
            None => delta,
        }
    }
}
