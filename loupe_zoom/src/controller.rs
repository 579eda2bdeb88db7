// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};
use loupe_event_state::pinch::{PinchDetector, PinchEvent, ScaleResponse};
use loupe_event_state::pointer::{PointerAction, PointerEvent, PointerId};
use loupe_geometry::{ContentLayout, DisplayMode, NO_SCALE, Viewport};

use crate::animator::{ResetAnimator, ResetFrame, ResetOutcome};
use crate::config::{ConfigError, ZoomConfig};
use crate::host::ZoomHost;
use crate::session::GestureSession;
use crate::transform::{ContentTransform, TransformStore};

/// Touch pan/zoom controller for one piece of content in one viewport.
///
/// Feed every pointer event of the hosting widget to
/// [`ZoomController::on_touch_event`] and return its result as the widget's
/// "consumed" answer. While [`ZoomController::is_animating`] is `true`, call
/// [`ZoomController::tick`] once per frame.
///
/// Per event the controller:
/// - Runs the pinch detector, scaling about the viewport center and panning
///   with the pinch focus.
/// - Pans zoomed content with a single pointer, clamped to the content edges.
/// - Leaves unzoomed single-pointer drags beyond the touch slop to ancestors
///   (for example a scrolling list) by releasing the parent gesture lock.
/// - Snaps back to fit, animated, when a pinch ends at or below the fitted
///   size.
#[derive(Clone, Debug)]
pub struct ZoomController {
    config: ZoomConfig,
    layout: ContentLayout,
    store: TransformStore,
    session: GestureSession,
    pinch: PinchDetector,
    animator: ResetAnimator,
}

/// What one event decided.
#[derive(Clone, Copy, Debug, Default)]
struct Verdict {
    handled: bool,
    release_parent: bool,
}

impl ZoomController {
    /// Creates a controller at identity for an empty layout.
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: ZoomConfig) -> Self {
        Self {
            config,
            layout: ContentLayout::default(),
            store: TransformStore::new(),
            session: GestureSession::new(),
            pinch: PinchDetector::with_min_span(config.min_pinch_span),
            animator: ResetAnimator::new(config.reset_duration_ms),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Replaces the viewport, for example after a layout pass.
    ///
    /// The current matrix is kept; it is rebuilt on the next gesture.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.layout.viewport = viewport;
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.layout.viewport
    }

    /// Replaces the intrinsic content size, or clears it with `None`.
    ///
    /// Hosts loading new content usually follow this with
    /// [`Self::reset_scaling`].
    pub fn set_content_size(&mut self, content: Option<Size>) {
        self.layout.content = content;
    }

    /// Current intrinsic content size.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.layout.content
    }

    /// Viewport and content together.
    #[must_use]
    pub fn layout(&self) -> &ContentLayout {
        &self.layout
    }

    /// Sets the largest reachable scale.
    ///
    /// Values below `1.0` are raised to `1.0`; non-finite values are ignored.
    /// The current scale is not changed; the next pinch update clamps it.
    pub fn set_max_scale(&mut self, max_scale: f64) {
        if max_scale.is_finite() {
            self.config.max_scale = max_scale.max(NO_SCALE);
        }
    }

    /// Largest reachable scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.config.max_scale
    }

    /// Sets the touch slop. Negative values become `0.0`; non-finite values
    /// are ignored.
    pub fn set_touch_slop(&mut self, touch_slop: f64) {
        if touch_slop.is_finite() {
            self.config.touch_slop = touch_slop.max(0.0);
        }
    }

    /// Enables or disables gesture handling.
    pub fn set_scalable(&mut self, scalable: bool) {
        self.config.scalable = scalable;
    }

    /// Returns `true` if gestures are interpreted at all.
    #[must_use]
    pub fn is_scalable(&self) -> bool {
        self.config.scalable
    }

    /// Returns `true` if the scale differs from the fitted size.
    #[must_use]
    pub fn is_scaled(&self) -> bool {
        self.store.is_scaled()
    }

    /// Returns `true` while a reset animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Current scale relative to the fitted size.
    ///
    /// While a reset animation runs this stays at the scale the animation
    /// started from; [`Self::matrix`] carries the frame on screen, and
    /// [`Self::animation_frame`] the interpolated values.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.store.scale()
    }

    /// Current pan in view pixels.
    ///
    /// Like [`Self::scale`], this holds the start value during a reset
    /// animation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.store.translation()
    }

    /// Current scale and pan, held at the start values during a reset
    /// animation.
    #[must_use]
    pub fn transform(&self) -> ContentTransform {
        self.store.current()
    }

    /// The reset animation sampled at `now_ms`, or `None` when idle.
    #[must_use]
    pub fn animation_frame(&self, now_ms: u64) -> Option<ResetFrame> {
        self.animator.animation().map(|anim| anim.sample(now_ms))
    }

    /// Matrix last computed for the content.
    ///
    /// In [`DisplayMode::Fit`] this is the identity and the host places the
    /// content itself.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.store.matrix()
    }

    /// Current display mode.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.store.display_mode()
    }

    /// State of the current (or last) touch series.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Interprets one pointer event and returns whether it was consumed.
    ///
    /// When the controller is not scalable, the event is left entirely to
    /// [`ZoomHost::default_touch_result`].
    pub fn on_touch_event<H: ZoomHost + ?Sized>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
    ) -> bool {
        if !self.config.scalable {
            return host.default_touch_result(event);
        }

        // The detector sees every event first so a pinch is known to be in
        // progress before moves are interpreted.
        if let Some(pinch) = self.pinch.on_event(event) {
            self.dispatch_pinch(pinch, event.time_ms, host);
        }

        let mut verdict = Verdict::default();
        match event.action {
            PointerAction::Down => {
                let multi_pointer = event.pointer_count() > 1;
                match event.position() {
                    Some(pos) => self.session.begin(pos, multi_pointer),
                    None => self.session.begin_without_position(),
                }
                // Claim the series; ancestors get it back if it turns out to
                // be a scroll.
                verdict.handled = true;
                host.request_parent_gesture_lock(true);
            }
            PointerAction::PointerDown { .. } => {
                self.session.multi_pointer = true;
            }
            PointerAction::PointerUp { .. } => {}
            PointerAction::Move => {
                if event.pointer_count() > 1 {
                    self.session.multi_pointer = true;
                }
                if let (Some(pos), Some(id)) = (event.position(), event.primary_id()) {
                    verdict = self.on_move(id, pos, host);
                }
            }
            PointerAction::Up | PointerAction::Cancel => {
                verdict.handled = self.session.has_scaled()
                    || self.session.has_attempted_pan(self.config.touch_slop)
                    || self.session.has_attempted_scale();
                self.session.end(self.store.scale());
            }
        }

        // Only hand the series back when we did not act on this event
        // ourselves; otherwise both we and the ancestor would react.
        if !verdict.handled && verdict.release_parent {
            host.request_parent_gesture_lock(false);
        }

        tracing::trace!(
            action = ?event.action,
            handled = verdict.handled,
            release_parent = verdict.release_parent,
            "zoom touch event"
        );
        verdict.handled || self.session.multi_pointer || host.default_touch_result(event)
    }

    fn on_move<H: ZoomHost + ?Sized>(
        &mut self,
        id: PointerId,
        pos: Point,
        host: &mut H,
    ) -> Verdict {
        let mut verdict = Verdict::default();
        if self.animator.is_running() {
            self.session.drag.track(pos);
            return verdict;
        }

        if self.pinch.is_in_progress() {
            verdict.handled = true;
            // A pan may not resume with a pointer captured before the pinch.
            self.session.pan_pointer = None;
        } else if self.store.is_scaled() {
            verdict.handled = self.pan(id, pos, host);
        } else {
            let offset = self.session.drag.total_offset(pos).unwrap_or(Vec2::ZERO);
            verdict.release_parent =
                !self.session.multi_pointer && offset.hypot() > self.config.touch_slop;
        }
        self.session.drag.track(pos);
        verdict
    }

    /// Pans zoomed content with the primary pointer. Returns `true` if this
    /// step moved farther than the touch slop.
    fn pan<H: ZoomHost + ?Sized>(&mut self, id: PointerId, pos: Point, host: &mut H) -> bool {
        if self.session.pan_pointer != Some(id) {
            self.session.pan_pointer = Some(id);
            self.session.drag.track(pos);
        }

        let total = self.session.drag.total_offset(pos).unwrap_or(Vec2::ZERO);
        self.session.record_pan_attempt(total.hypot());

        // Judge the raw step, before clamping.
        let step = self.session.drag.step(pos).unwrap_or(Vec2::ZERO);
        let handled = step.hypot() > self.config.touch_slop;

        let delta = self.layout.clamp_pan(step, self.store.matrix());
        self.store.post_translate(delta);
        if delta != Vec2::ZERO {
            self.store.apply(host);
        }
        handled
    }

    fn dispatch_pinch<H: ZoomHost + ?Sized>(
        &mut self,
        pinch: PinchEvent,
        now_ms: u64,
        host: &mut H,
    ) {
        match pinch {
            PinchEvent::Begin { focus } => self.on_scale_begin(focus),
            PinchEvent::Update { focus, factor } => {
                let response = self.on_scale_update(focus, factor, now_ms, host);
                self.pinch.resolve(response);
            }
            PinchEvent::End { .. } => tracing::trace!("pinch ended"),
        }
    }

    /// Starts a pinch around `focus`.
    ///
    /// [`Self::on_touch_event`] calls this from its built-in detector.
    pub fn on_scale_begin(&mut self, focus: Point) {
        self.session.last_focus = focus;
        self.session.snapshot_scale(self.store.scale());
    }

    /// Applies one pinch step.
    ///
    /// `factor` is the span ratio since the last accepted step. Non-finite and
    /// non-positive factors are treated as `1.0`. Returns
    /// [`ScaleResponse::Stop`] once the pinch has shrunk the content back to
    /// its fitted size, after starting a reset to fit; animated only if this
    /// series actually changed the scale.
    pub fn on_scale_update<H: ZoomHost + ?Sized>(
        &mut self,
        focus: Point,
        factor: f64,
        now_ms: u64,
        host: &mut H,
    ) -> ScaleResponse {
        if self.animator.is_running() {
            return ScaleResponse::Continue;
        }

        let factor = if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            NO_SCALE
        };
        self.session.record_scale_attempt(factor);
        let scale = NO_SCALE.max((self.store.scale() * factor).min(self.config.max_scale));
        self.session.record_scale(scale);

        if scale > NO_SCALE {
            self.store.set_scale(scale);
            self.store.ensure_mode(DisplayMode::FreeTransform, host);

            // Rebuild from the baseline, then re-apply the pan plus any
            // lateral drift of the focus since the last step.
            let scaled = self.layout.zoom_transform(scale, Vec2::ZERO);
            let proposed = self.store.translation() + (focus - self.session.last_focus);
            let translation = self.layout.clamp_pan(proposed, scaled);
            self.store.set_translation(translation);
            self.store.set_matrix(self.layout.zoom_transform(scale, translation));
            self.session.last_focus = focus;
            self.store.apply(host);
            ScaleResponse::Continue
        } else {
            let animate = self.session.has_scaled();
            tracing::debug!(animate, "pinch reached fitted size");
            self.reset_scaling(animate, now_ms, host);
            ScaleResponse::Stop
        }
    }

    /// Returns to the fitted, centered state.
    ///
    /// See [`ResetOutcome`] for the three possible results. An animated reset
    /// starts from the current scale and pan and needs [`Self::tick`] calls.
    pub fn reset_scaling<H: ZoomHost + ?Sized>(
        &mut self,
        animate: bool,
        now_ms: u64,
        host: &mut H,
    ) -> ResetOutcome {
        self.animator.reset_to_fit(animate, now_ms, &mut self.store, host)
    }

    /// Advances a running reset animation. Returns `true` while more frames
    /// are needed.
    pub fn tick<H: ZoomHost + ?Sized>(&mut self, now_ms: u64, host: &mut H) -> bool {
        self.animator.tick(now_ms, &self.layout, &mut self.store, host)
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            layout: self.layout,
            transform: self.store.current(),
            matrix: self.store.matrix(),
            display_mode: self.store.display_mode(),
            animating: self.animator.is_running(),
            pinch_in_progress: self.pinch.is_in_progress(),
            multi_pointer: self.session.multi_pointer,
            pan_pointer: self.session.pan_pointer,
            max_scale: self.config.max_scale,
            touch_slop: self.config.touch_slop,
            scalable: self.config.scalable,
        }
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::from_valid(ZoomConfig::default())
    }
}

/// Debug snapshot of a [`ZoomController`].
#[derive(Clone, Copy, Debug)]
pub struct ZoomDebugInfo {
    /// Viewport and content size.
    pub layout: ContentLayout,
    /// Current scale and pan.
    pub transform: ContentTransform,
    /// Current content matrix.
    pub matrix: Affine,
    /// Current display mode.
    pub display_mode: DisplayMode,
    /// Whether a reset animation is running.
    pub animating: bool,
    /// Whether the pinch detector is tracking a pinch.
    pub pinch_in_progress: bool,
    /// Whether the current series has seen more than one pointer.
    pub multi_pointer: bool,
    /// Pointer driving a single-pointer pan, if any.
    pub pan_pointer: Option<PointerId>,
    /// Largest reachable scale.
    pub max_scale: f64,
    /// Touch slop in view pixels.
    pub touch_slop: f64,
    /// Whether gestures are interpreted.
    pub scalable: bool,
}
