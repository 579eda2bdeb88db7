// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};
use loupe_geometry::{DisplayMode, NO_SCALE};

use crate::host::ZoomHost;

/// The zoom state as a scale and a pan, on top of the fit-center baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentTransform {
    /// Uniform scale about the viewport center, relative to the fitted size.
    pub scale: f64,
    /// Pan applied after scaling, in view pixels.
    pub translation: Vec2,
}

impl ContentTransform {
    /// Unscaled and unpanned.
    pub const IDENTITY: Self = Self {
        scale: NO_SCALE,
        translation: Vec2::ZERO,
    };
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Single source of truth for the content matrix and the values it derives
/// from.
///
/// The matrix is kept alongside scale and translation rather than recomputed
/// from them: pans post-multiply it directly, and during a reset animation it
/// runs ahead of the stored scale.
#[derive(Clone, Debug)]
pub struct TransformStore {
    matrix: Affine,
    scale: f64,
    translation: Vec2,
    mode: DisplayMode,
}

impl TransformStore {
    /// Creates a store at identity in [`DisplayMode::Fit`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            matrix: Affine::IDENTITY,
            scale: NO_SCALE,
            translation: Vec2::ZERO,
            mode: DisplayMode::Fit,
        }
    }

    /// Current scale and translation.
    #[must_use]
    pub fn current(&self) -> ContentTransform {
        ContentTransform {
            scale: self.scale,
            translation: self.translation,
        }
    }

    /// Current content matrix.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Current display mode.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns `true` when the scale differs from the baseline.
    #[must_use]
    pub fn is_scaled(&self) -> bool {
        self.scale != NO_SCALE
    }

    /// Returns `true` when the matrix is the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.matrix == Affine::IDENTITY
    }

    pub(crate) fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub(crate) fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }

    pub(crate) fn set_matrix(&mut self, matrix: Affine) {
        self.matrix = matrix;
    }

    /// Adds `delta` to the translation and moves the matrix by it.
    pub(crate) fn post_translate(&mut self, delta: Vec2) {
        self.translation += delta;
        self.matrix = Affine::translate(delta) * self.matrix;
    }

    /// Pushes the matrix to the host.
    pub(crate) fn apply<H: ZoomHost + ?Sized>(&self, host: &mut H) {
        host.apply_transform(self.matrix);
    }

    /// Switches display mode, telling the host only on change.
    pub(crate) fn ensure_mode<H: ZoomHost + ?Sized>(&mut self, mode: DisplayMode, host: &mut H) {
        if self.mode != mode {
            self.mode = mode;
            host.set_display_mode(mode);
        }
    }

    /// Returns to identity and hands placement back to the host's fit mode.
    pub(crate) fn reset<H: ZoomHost + ?Sized>(&mut self, host: &mut H) {
        self.matrix = Affine::IDENTITY;
        self.scale = NO_SCALE;
        self.translation = Vec2::ZERO;
        self.ensure_mode(DisplayMode::Fit, host);
    }
}

impl Default for TransformStore {
    fn default() -> Self {
        Self::new()
    }
}
