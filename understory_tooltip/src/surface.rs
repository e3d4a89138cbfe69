// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam.

use kurbo::{Rect, Size};
use understory_placement::Position;

use crate::motion::Animation;
use crate::types::{TooltipEvent, TooltipId};

/// Everything the engine needs from the host toolkit.
///
/// The engine calls these synchronously from [`Tooltips`](crate::Tooltips) methods.
/// Implementations should not call back into the registry.
pub trait Surface<K> {
    /// Current bounds of `node` in viewport coordinates, or `None` if it has no layout.
    fn bounds(&self, node: &K) -> Option<Rect>;

    /// Size of the viewport.
    fn viewport(&self) -> Size;

    /// Dispatch a notification on the tooltip.
    ///
    /// Returns `false` if a listener prevented the default action. The return
    /// value is only consulted when `event.cancelable` is set.
    fn dispatch(&mut self, id: TooltipId, event: TooltipEvent) -> bool;

    /// Show or hide the popup.
    fn set_hidden(&mut self, id: TooltipId, hidden: bool);

    /// Move the popup and set its transform origin.
    fn place(&mut self, id: TooltipId, position: &Position);

    /// Start playing `animation` on the popup.
    ///
    /// Report completion through [`Tooltips::finish_animation`](crate::Tooltips::finish_animation)
    /// with `animation.ticket`. Instant animations are completed by the engine
    /// and need no report.
    fn play(&mut self, id: TooltipId, animation: &Animation);

    /// Cancel any animation running on the popup.
    fn stop_animations(&mut self, id: TooltipId);

    /// Request one animation frame, delivered back as
    /// [`TooltipInput::AnimationFrame`](crate::TooltipInput::AnimationFrame).
    fn request_frame(&mut self, id: TooltipId);
}
