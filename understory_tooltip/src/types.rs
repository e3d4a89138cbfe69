// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by the tooltip engine: identifiers, inputs, outcomes, events, and host lookups.

/// Identifier for a tooltip in a [`Tooltips`](crate::Tooltips) registry.
///
/// A slot index plus a generation counter. Detaching frees the slot; any existing
/// `TooltipId` for it becomes stale and never aliases the next tooltip that reuses
/// the slot, because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TooltipId(pub(crate) u32, pub(crate) u32);

impl TooltipId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Propagation outcome for an input delivered to a tooltip.
///
/// Mirrors what a responder chain dispatcher expects back from a handler.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Outcome {
    /// The tooltip did not claim the input.
    Continue,
    /// Stop propagation within the current phase.
    Stop,
    /// Stop propagation and mark the input consumed.
    StopAndConsume,
}

/// Pointer button.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Button {
    /// Main button, usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the wheel button.
    Auxiliary,
    /// Any other button, by platform index.
    Other(u8),
}

/// Keys the engine reacts to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Dismisses an open tooltip.
    Escape,
    /// Any other key; ignored.
    Other,
}

/// An input delivered to a tooltip.
///
/// Pointer paths are root→target node paths, as produced by a responder router.
/// The tooltip derives enter/leave of its target and popup from successive paths
/// and decides whether a pointer-down landed inside its root.
#[derive(Copy, Clone, Debug)]
pub enum TooltipInput<'a, K> {
    /// The pointer moved; `path` is the new hovered path.
    PointerMove {
        /// Root→target path under the pointer.
        path: &'a [K],
    },
    /// A pointer button went down, observed at the document level.
    PointerDown {
        /// Root→target path under the pointer.
        path: &'a [K],
        /// Which button.
        button: Button,
    },
    /// The pointer left the document.
    PointerExit,
    /// The trigger target gained focus.
    Focus,
    /// The trigger target lost focus.
    Blur,
    /// A key went down while the tooltip or its target had focus.
    KeyDown(Key),
    /// A node scrolled.
    Scroll {
        /// The node that scrolled.
        node: K,
    },
    /// The trigger target changed size.
    TargetResized,
    /// An animation frame requested through
    /// [`Surface::request_frame`](crate::Surface::request_frame) arrived.
    AnimationFrame,
}

/// Kind of notification a tooltip emits around open/close transitions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// About to open. Cancelable.
    Open,
    /// Entrance animation finished.
    Opened,
    /// About to close. Cancelable.
    Close,
    /// Exit animation finished and the popup is hidden.
    Closed,
}

impl EventKind {
    /// DOM-style event name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Opened => "opened",
            Self::Close => "close",
            Self::Closed => "closed",
        }
    }

    /// Whether a host may veto the transition by preventing this event.
    pub const fn cancelable(self) -> bool {
        matches!(self, Self::Open | Self::Close)
    }
}

/// A notification dispatched through [`Surface::dispatch`](crate::Surface::dispatch).
///
/// Events do not bubble.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TooltipEvent {
    /// What happened.
    pub kind: EventKind,
    /// Whether preventing the event has an effect.
    pub cancelable: bool,
}

impl TooltipEvent {
    /// Event with the default cancelability for its kind.
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            cancelable: kind.cancelable(),
        }
    }

    /// A `close` that cannot be vetoed, used when another tooltip forces this one shut.
    pub const fn forced_close() -> Self {
        Self {
            kind: EventKind::Close,
            cancelable: false,
        }
    }
}

/// Look up the parent of a node.
///
/// Used when binding a tooltip to find the ancestors of its target.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A no‑op parent provider: every node is a root.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// Report whether a node scrolls its content.
///
/// Scrollable ancestors of the target are watched so that scrolling repositions
/// an open tooltip.
pub trait ScrollLookup<K> {
    /// Returns `true` if `node` is a scroll container.
    fn is_scrollable(&self, node: &K) -> bool;
}

impl<K> ScrollLookup<K> for NoParent {
    #[inline]
    fn is_scrollable(&self, _node: &K) -> bool {
        false
    }
}

/// Kind of a child in the tooltip's default slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChildKind {
    /// Ordinary element; eligible as the trigger target.
    Element,
    /// Style element; never a target.
    Style,
    /// Element projected into a named content region; never a target.
    ContentSlot,
}

/// Pick the trigger target: the first child that is an ordinary element.
///
/// Returns `None` when there is none, which leaves the tooltip inert.
///
/// ```
/// use understory_tooltip::{ChildKind, first_eligible};
///
/// let children = [(1, ChildKind::Style), (2, ChildKind::ContentSlot), (3, ChildKind::Element)];
/// assert_eq!(first_eligible(children), Some(3));
/// assert_eq!(first_eligible([(1, ChildKind::Style)]), None);
/// ```
pub fn first_eligible<K>(children: impl IntoIterator<Item = (K, ChildKind)>) -> Option<K> {
    children
        .into_iter()
        .find(|(_, kind)| *kind == ChildKind::Element)
        .map(|(k, _)| k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelable_kinds() {
        assert!(TooltipEvent::new(EventKind::Open).cancelable);
        assert!(TooltipEvent::new(EventKind::Close).cancelable);
        assert!(!TooltipEvent::new(EventKind::Opened).cancelable);
        assert!(!TooltipEvent::new(EventKind::Closed).cancelable);
        assert!(!TooltipEvent::forced_close().cancelable);
        assert_eq!(TooltipEvent::forced_close().kind, EventKind::Close);
    }

    #[test]
    fn outcome_orders_by_strength() {
        assert!(Outcome::StopAndConsume > Outcome::Stop);
        assert!(Outcome::Stop > Outcome::Continue);
    }

    #[test]
    fn first_eligible_skips_style_and_content_slots() {
        let kids = [
            ('a', ChildKind::Style),
            ('b', ChildKind::ContentSlot),
            ('c', ChildKind::Element),
            ('d', ChildKind::Element),
        ];
        assert_eq!(first_eligible(kids), Some('c'));
        assert_eq!(first_eligible::<u32>([]), None);
    }
}
