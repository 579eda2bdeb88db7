// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;
use loupe_event_state::pointer::PointerEvent;
use loupe_geometry::DisplayMode;

/// Effects a [`crate::ZoomController`] asks of the widget hosting it.
///
/// The controller never renders or dispatches events itself. Everything it
/// decides flows out through this trait, and the host passes `&mut` access to
/// an implementation into each controller call.
pub trait ZoomHost {
    /// Switches how the content is placed. Called only on actual changes.
    fn set_display_mode(&mut self, mode: DisplayMode);

    /// Pushes a new content matrix to the rendering surface.
    fn apply_transform(&mut self, matrix: Affine);

    /// Asks ancestors to stop (`true`) or resume (`false`) intercepting the
    /// current touch series, for example to scroll.
    fn request_parent_gesture_lock(&mut self, locked: bool);

    /// The host's own verdict on an event the controller did not consume.
    ///
    /// This is consulted last, and only when the controller has not already
    /// consumed the event.
    fn default_touch_result(&mut self, event: &PointerEvent) -> bool {
        let _ = event;
        false
    }
}
