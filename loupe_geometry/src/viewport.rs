// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Point, Rect, Size};

/// The fixed-size area content is displayed in.
///
/// All coordinates are view-local: the viewport's top-left corner is the
/// origin, which is also the space pointer positions are reported in.
/// Padding insets the [content rectangle](Self::content_rect): content is fitted
/// and centered inside it, scaled about its center, and panned within it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    size: Size,
    padding: Insets,
}

impl Viewport {
    /// Creates a viewport of the given size with no padding.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            padding: Insets::ZERO,
        }
    }

    /// Returns this viewport with the given padding.
    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Returns the full viewport size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the padding insets.
    #[must_use]
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Returns the size left for content once padding is removed.
    ///
    /// Each dimension saturates at zero when padding exceeds the size.
    #[must_use]
    pub fn usable_size(&self) -> Size {
        Size::new(
            (self.size.width - self.padding.x_value()).max(0.0),
            (self.size.height - self.padding.y_value()).max(0.0),
        )
    }

    /// Returns the view-local bounds, `(0, 0, width, height)`.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// Returns the area inside the padding, in view-local coordinates.
    ///
    /// It starts at the leading padding and has [`Self::usable_size`].
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::from_origin_size(
            Point::new(self.padding.x0, self.padding.y0),
            self.usable_size(),
        )
    }

    /// Returns the anchor point pinch scaling happens around: the center of
    /// the [content rectangle](Self::content_rect).
    #[must_use]
    pub fn center(&self) -> Point {
        self.content_rect().center()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}
