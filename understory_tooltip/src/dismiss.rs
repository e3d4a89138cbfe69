// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismissal and scroll watching.
//!
//! A [`Watcher`] answers two questions for an attached tooltip:
//!
//! - Did a pointer-down land outside the tooltip? It did when the tooltip's root
//!   is absent from the event's root→target path.
//! - Does a scroll need a reposition? Only scrolls of the target's scrollable
//!   ancestors count, and repeated scrolls before the next animation frame
//!   coalesce into a single frame request.

use alloc::vec::Vec;

use crate::types::{ParentLookup, ScrollLookup};

/// Outside-click and ancestor-scroll bookkeeping for one tooltip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Watcher<K> {
    scroll_ancestors: Vec<K>,
    frame_pending: bool,
}

impl<K: Copy + Eq> Watcher<K> {
    /// A watcher with no scroll ancestors.
    pub fn new() -> Self {
        Self {
            scroll_ancestors: Vec::new(),
            frame_pending: false,
        }
    }

    /// Collect the scrollable ancestors of `target`, nearest first.
    ///
    /// The walk follows `parents` to a root; ancestry must be acyclic.
    pub fn bind(
        target: K,
        parents: &impl ParentLookup<K>,
        scroll: &impl ScrollLookup<K>,
    ) -> Self {
        let mut scroll_ancestors = Vec::new();
        let mut cur = parents.parent_of(&target);
        while let Some(node) = cur {
            if scroll.is_scrollable(&node) {
                scroll_ancestors.push(node);
            }
            cur = parents.parent_of(&node);
        }
        Self {
            scroll_ancestors,
            frame_pending: false,
        }
    }

    /// Watched scroll containers, nearest first.
    pub fn scroll_ancestors(&self) -> &[K] {
        &self.scroll_ancestors
    }

    /// Whether a pointer-down with this path is outside the tooltip rooted at `root`.
    pub fn is_outside(root: &K, path: &[K]) -> bool {
        !path.contains(root)
    }

    /// Note a scroll of `node`.
    ///
    /// Returns `true` when the caller should request an animation frame.
    pub fn on_scroll(&mut self, node: &K, open: bool) -> bool {
        if !open || self.frame_pending || !self.scroll_ancestors.contains(node) {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Consume the pending frame. Returns `true` if one was requested.
    pub fn take_frame(&mut self) -> bool {
        core::mem::take(&mut self.frame_pending)
    }

    /// Whether a frame request is outstanding.
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }
}
