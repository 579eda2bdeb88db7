// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_geometry::NO_SCALE;
use thiserror::Error;

/// Default upper bound for the zoom scale.
pub const DEFAULT_MAX_SCALE: f64 = 3.0;

/// Default movement, in view pixels, before a touch counts as a drag.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Default length of the animated reset back to fit.
pub const DEFAULT_RESET_DURATION_MS: u64 = 300;

/// Host-provided settings for a [`crate::ZoomController`].
///
/// Build one with [`ZoomConfig::default`] and the `with_*` methods, then pass
/// it to [`crate::ZoomController::new`], which validates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Largest scale a pinch may reach, relative to the fitted size.
    pub max_scale: f64,
    /// Movement before a touch counts as a drag rather than a tap.
    ///
    /// Platforms usually derive this from display density.
    pub touch_slop: f64,
    /// When `false`, every event is left to the host's default handling.
    pub scalable: bool,
    /// Length of the animated reset.
    pub reset_duration_ms: u64,
    /// Minimum pointer span before a pinch begins.
    pub min_pinch_span: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_scale: DEFAULT_MAX_SCALE,
            touch_slop: DEFAULT_TOUCH_SLOP,
            scalable: true,
            reset_duration_ms: DEFAULT_RESET_DURATION_MS,
            min_pinch_span: 0.0,
        }
    }
}

impl ZoomConfig {
    /// Sets [`Self::max_scale`].
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Sets [`Self::touch_slop`].
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Sets [`Self::scalable`].
    #[must_use]
    pub fn with_scalable(mut self, scalable: bool) -> Self {
        self.scalable = scalable;
        self
    }

    /// Sets [`Self::reset_duration_ms`].
    #[must_use]
    pub fn with_reset_duration_ms(mut self, reset_duration_ms: u64) -> Self {
        self.reset_duration_ms = reset_duration_ms;
        self
    }

    /// Sets [`Self::min_pinch_span`].
    #[must_use]
    pub fn with_min_pinch_span(mut self, min_pinch_span: f64) -> Self {
        self.min_pinch_span = min_pinch_span;
        self
    }

    /// Checks that every numeric setting is usable.
    ///
    /// - `max_scale` must be finite and at least `1.0`.
    /// - `touch_slop` and `min_pinch_span` must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_scale.is_finite() || self.max_scale < NO_SCALE {
            return Err(ConfigError::MaxScale(self.max_scale));
        }
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::TouchSlop(self.touch_slop));
        }
        if !self.min_pinch_span.is_finite() || self.min_pinch_span < 0.0 {
            return Err(ConfigError::MinPinchSpan(self.min_pinch_span));
        }
        Ok(())
    }
}

/// A [`ZoomConfig`] value that cannot drive a controller.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// `max_scale` was below `1.0` or not finite.
    #[error("maximum scale must be a finite value of at least 1.0, got {0}")]
    MaxScale(f64),
    /// `touch_slop` was negative or not finite.
    #[error("touch slop must be a finite, non-negative distance, got {0}")]
    TouchSlop(f64),
    /// `min_pinch_span` was negative or not finite.
    #[error("minimum pinch span must be a finite, non-negative distance, got {0}")]
    MinPinchSpan(f64),
}
