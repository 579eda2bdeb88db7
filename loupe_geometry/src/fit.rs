// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::viewport::Viewport;

/// Scale of the unzoomed, fit-centered state.
pub const NO_SCALE: f64 = 1.0;

fn is_positive(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}

/// Returns the content size if both it and the viewport are non-degenerate.
fn usable(content: Option<Size>, viewport: &Viewport) -> Option<(Size, Size)> {
    let content = content.filter(|c| is_positive(*c))?;
    let view = viewport.usable_size();
    is_positive(view).then_some((content, view))
}

/// Returns the uniform scale that makes `content` fill one viewport dimension
/// while staying inside the other.
///
/// Falls back to [`NO_SCALE`] when the content is absent or either size is
/// degenerate.
#[must_use]
pub fn fit_scale_factor(content: Option<Size>, viewport: &Viewport) -> f64 {
    match usable(content, viewport) {
        Some((content, view)) => {
            let sx = view.width / content.width;
            let sy = view.height / content.height;
            sx.min(sy)
        }
        None => NO_SCALE,
    }
}

/// Returns the translation that centers `content` scaled by `scale` inside
/// the viewport's [content rectangle](Viewport::content_rect).
///
/// A `0.5` bias is added on both axes to match pixel-rounded placement.
/// Degenerate inputs yield a zero translation.
#[must_use]
pub fn centering_translation(content: Option<Size>, viewport: &Viewport, scale: f64) -> Vec2 {
    match usable(content, viewport) {
        Some((content, view)) => {
            let inset = viewport.padding();
            Vec2::new(
                inset.x0 + (view.width - content.width * scale) / 2.0 + 0.5,
                inset.y0 + (view.height - content.height * scale) / 2.0 + 0.5,
            )
        }
        None => Vec2::ZERO,
    }
}

/// Returns the baseline matrix: content scaled to fit, then centered.
///
/// Every zoomed matrix is built on top of this one.
#[must_use]
pub fn fit_center_transform(content: Option<Size>, viewport: &Viewport) -> Affine {
    let scale = fit_scale_factor(content, viewport);
    let offset = centering_translation(content, viewport, scale);
    Affine::translate(offset) * Affine::scale(scale)
}

/// Builds the full content matrix for a zoom state.
///
/// The composition order is fit-center, then a uniform `scale` about the
/// viewport center, then `translation` in view space.
#[must_use]
pub fn zoom_transform(
    content: Option<Size>,
    viewport: &Viewport,
    scale: f64,
    translation: Vec2,
) -> Affine {
    let base = fit_center_transform(content, viewport);
    Affine::translate(translation) * scale_about(scale, viewport.center()) * base
}

fn scale_about(scale: f64, center: Point) -> Affine {
    let c = center.to_vec2();
    Affine::translate(c) * Affine::scale(scale) * Affine::translate(-c)
}

/// Maps the content rectangle `(0, 0, width, height)` through `matrix`.
///
/// Returns `None` when there is no content to map.
#[must_use]
pub fn content_bounds(content: Option<Size>, matrix: Affine) -> Option<Rect> {
    let content = content.filter(|c| is_positive(*c))?;
    Some(matrix.transform_rect_bbox(Rect::from_origin_size(Point::ORIGIN, content)))
}

/// Limits a proposed pan so content edges never detach from the view edges.
///
/// Per axis:
/// - If the content is narrower than the view, no pan is allowed on that axis.
/// - A positive delta may move content at most until its leading edge meets
///   the view's leading edge.
/// - A zero or negative delta may move content at most until its trailing
///   edge meets the view's trailing edge.
#[must_use]
pub fn clamp_translation(delta: Vec2, content: Rect, view: Rect) -> Vec2 {
    Vec2::new(
        clamp_axis(delta.x, content.x0, content.x1, view.x0, view.x1),
        clamp_axis(delta.y, content.y0, content.y1, view.y0, view.y1),
    )
}

fn clamp_axis(
    delta: f64,
    content_min: f64,
    content_max: f64,
    view_min: f64,
    view_max: f64,
) -> f64 {
    if content_max - content_min < view_max - view_min {
        return 0.0;
    }
    if delta > 0.0 {
        delta.min(view_min - content_min)
    } else {
        delta.max(view_max - content_max)
    }
}
