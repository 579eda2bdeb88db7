// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated return to the fit-center state.
//!
//! A reset either happens at once or runs as a [`ResetAnimation`]: a value
//! capturing where the animation started and when. Each host frame samples it
//! with [`ResetAnimation::sample`], which is a pure function of time:
//!
//! - `fraction` is elapsed time over duration, clamped to `[0, 1]`.
//! - `scale` moves linearly from the start scale to `1.0`.
//! - `translation` decays linearly from the start translation to zero.
//!
//! ```
//! use kurbo::Vec2;
//! use loupe_zoom::{ContentTransform, ResetAnimation};
//!
//! let from = ContentTransform { scale: 2.0, translation: Vec2::new(40.0, -20.0) };
//! let anim = ResetAnimation::new(from, 1_000, 300);
//!
//! let frame = anim.sample(1_150);
//! assert_eq!(frame.fraction, 0.5);
//! assert_eq!(frame.scale, 1.5);
//! assert_eq!(frame.translation, Vec2::new(20.0, -10.0));
//! ```

use kurbo::Vec2;
use loupe_geometry::{ContentLayout, NO_SCALE};

use crate::host::ZoomHost;
use crate::transform::{ContentTransform, TransformStore};

/// What a reset request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The transform went straight back to identity.
    Immediate,
    /// An animation started; drive it with [`crate::ZoomController::tick`].
    Animating,
    /// An animation was already running, so the request was ignored.
    AlreadyRunning,
}

/// One sampled step of a [`ResetAnimation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResetFrame {
    /// Progress in `[0, 1]`.
    pub fraction: f64,
    /// Scale to show at this step.
    pub scale: f64,
    /// Translation to show at this step.
    pub translation: Vec2,
}

/// Start state and timing of an animated reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResetAnimation {
    /// Transform captured when the animation started.
    pub from: ContentTransform,
    /// Host timestamp the animation started at.
    pub start_ms: u64,
    /// Total length.
    pub duration_ms: u64,
}

impl ResetAnimation {
    /// Captures `from` as the start of an animation beginning at `start_ms`.
    #[must_use]
    pub fn new(from: ContentTransform, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            start_ms,
            duration_ms,
        }
    }

    /// Progress at `now_ms`, clamped to `[0, 1]`.
    ///
    /// Timestamps before the start count as no progress; a zero duration is
    /// complete immediately.
    #[must_use]
    pub fn fraction(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).min(1.0)
    }

    /// Samples the animation at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> ResetFrame {
        let fraction = self.fraction(now_ms);
        ResetFrame {
            fraction,
            scale: self.from.scale + (NO_SCALE - self.from.scale) * fraction,
            translation: self.from.translation * (1.0 - fraction),
        }
    }
}

/// Runs resets against a [`TransformStore`], at most one at a time.
#[derive(Clone, Debug)]
pub struct ResetAnimator {
    duration_ms: u64,
    running: Option<ResetAnimation>,
}

impl ResetAnimator {
    /// Creates an idle animator whose animations last `duration_ms`.
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            running: None,
        }
    }

    /// Returns `true` while an animation is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// The running animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&ResetAnimation> {
        self.running.as_ref()
    }

    /// Starts a reset of `store` back to fit.
    ///
    /// Does nothing while an animation is already running. Resets at once when
    /// `animate` is `false` or the matrix is already the identity.
    pub fn reset_to_fit<H: ZoomHost + ?Sized>(
        &mut self,
        animate: bool,
        now_ms: u64,
        store: &mut TransformStore,
        host: &mut H,
    ) -> ResetOutcome {
        if self.running.is_some() {
            return ResetOutcome::AlreadyRunning;
        }
        if !animate || store.is_identity() {
            store.reset(host);
            tracing::debug!("zoom reset to fit");
            return ResetOutcome::Immediate;
        }
        let animation = ResetAnimation::new(store.current(), now_ms, self.duration_ms);
        tracing::debug!(
            scale = animation.from.scale,
            duration_ms = animation.duration_ms,
            "zoom reset animation started"
        );
        self.running = Some(animation);
        ResetOutcome::Animating
    }

    /// Advances the running animation to `now_ms`.
    ///
    /// Returns `true` while the animation still needs frames. On the final
    /// frame the store is reset and the animator becomes idle.
    pub fn tick<H: ZoomHost + ?Sized>(
        &mut self,
        now_ms: u64,
        layout: &ContentLayout,
        store: &mut TransformStore,
        host: &mut H,
    ) -> bool {
        let Some(animation) = self.running else {
            return false;
        };
        let frame = animation.sample(now_ms);
        if frame.fraction >= 1.0 {
            self.running = None;
            store.reset(host);
            tracing::debug!("zoom reset animation finished");
            return false;
        }
        if store.is_identity() {
            tracing::warn!("identity matrix while animating a zoom reset; skipping frame");
            return true;
        }
        store.set_matrix(layout.zoom_transform(frame.scale, frame.translation));
        store.apply(host);
        true
    }
}
