// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: derive enter/leave crossings from successive pointer paths.
//!
//! A tooltip only cares about two nodes under the pointer: its trigger target
//! (`mouseenter`/`mouseleave` drive the hover trigger) and its popup surface
//! (hover occupancy defers closing). [`HoverPath`] keeps the last root→target
//! path and, on each update, reports the minimal set of crossings; [`HoverPath::crossings`]
//! narrows them to the watched nodes.
//!
//! ```
//! use understory_tooltip::hover::{HoverEvent, HoverPath};
//!
//! let mut h: HoverPath<u32> = HoverPath::new();
//! assert_eq!(h.update(&[1, 2]), vec![HoverEvent::Enter(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update(&[1, 3]), vec![HoverEvent::Leave(2), HoverEvent::Enter(3)]);
//! assert!(h.is_over(&3));
//! ```

use alloc::vec::Vec;

/// A pointer crossing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer entered the node (emitted outer→inner).
    Enter(K),
    /// Pointer left the node (emitted inner→outer).
    Leave(K),
}

impl<K> HoverEvent<K> {
    /// The node that was crossed.
    pub fn node(&self) -> &K {
        match self {
            Self::Enter(k) | Self::Leave(k) => k,
        }
    }
}

/// The path currently under the pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverPath<K: Copy + Eq> {
    current: Vec<K>,
}

impl<K: Copy + Eq> HoverPath<K> {
    /// Create an empty hover path.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The current root→target path.
    pub fn current(&self) -> &[K] {
        &self.current
    }

    /// Whether `node` is on the current path, i.e. the pointer is over it or a descendant.
    pub fn is_over(&self, node: &K) -> bool {
        self.current.contains(node)
    }

    /// Replace the path and return the crossings, leaves first.
    pub fn update(&mut self, path: &[K]) -> Vec<HoverEvent<K>> {
        // Shared prefix is the common ancestry; nothing on it is crossed.
        let shared = self
            .current
            .iter()
            .zip(path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out: Vec<_> = self.current[shared..]
            .iter()
            .rev()
            .map(|&k| HoverEvent::Leave(k))
            .collect();
        out.extend(path[shared..].iter().map(|&k| HoverEvent::Enter(k)));

        self.current.clear();
        self.current.extend_from_slice(path);
        out
    }

    /// Replace the path and return only crossings of the `watched` nodes.
    pub fn crossings(&mut self, path: &[K], watched: &[K]) -> Vec<HoverEvent<K>> {
        let mut out = self.update(path);
        out.retain(|e| watched.contains(e.node()));
        out
    }

    /// Forget the path, returning leaves inner→outer.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.update(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn fresh_path_enters_outer_to_inner() {
        let mut h: HoverPath<u32> = HoverPath::new();
        assert_eq!(
            h.update(&[1, 2, 3]),
            vec![
                HoverEvent::Enter(1),
                HoverEvent::Enter(2),
                HoverEvent::Enter(3)
            ]
        );
        assert_eq!(h.current(), &[1, 2, 3]);
    }

    #[test]
    fn clear_leaves_inner_to_outer() {
        let mut h: HoverPath<u32> = HoverPath::new();
        let _ = h.update(&[1, 2]);
        assert_eq!(h.clear(), vec![HoverEvent::Leave(2), HoverEvent::Leave(1)]);
        assert!(h.current().is_empty());
    }

    // Moving from the target into a sibling popup under the same root.
    #[test]
    fn target_to_popup_crosses_both() {
        let (root, target, popup) = (10, 11, 12);
        let mut h: HoverPath<u32> = HoverPath::new();
        let _ = h.update(&[1, root, target]);
        let ev = h.crossings(&[1, root, popup, 99], &[target, popup]);
        assert_eq!(ev, vec![HoverEvent::Leave(target), HoverEvent::Enter(popup)]);
        assert!(h.is_over(&popup));
        assert!(!h.is_over(&target));
    }

    #[test]
    fn moves_within_a_watched_node_are_silent() {
        let mut h: HoverPath<u32> = HoverPath::new();
        let _ = h.update(&[1, 2, 3]);
        assert!(h.crossings(&[1, 2, 4], &[2]).is_empty());
        assert!(h.crossings(&[1, 2, 4], &[2]).is_empty());
    }
}
