// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: a deterministic, `no_std` tooltip engine.
//!
//! ## Overview
//!
//! This crate decides when tooltips open and close, where their popups go, and how
//! those transitions are sequenced. It does not render, lay out, or animate.
//! The host describes interactions as [`TooltipInput`] values, supplies the clock,
//! and performs effects through the [`Surface`] trait.
//!
//! ## Pieces
//!
//! - [`trigger`]: the parsed `click`/`hover`/`focus`/`manual` trigger set.
//! - [`machine`]: per-tooltip trigger interpretation with open/close delays and
//!   hover occupancy of the popup.
//! - [`timer`]: two deadline slots on a host-supplied millisecond clock.
//! - [`hover`]: enter/leave crossings derived from successive root→target paths.
//! - [`dismiss`]: outside pointer-down detection and coalesced ancestor-scroll repositioning.
//! - [`motion`]: entrance/exit animation descriptions, tickets, and the [`Phase`] they imply.
//! - [`config`]: public attributes, parsing, and reactive property reporting.
//! - [`render`]: which named regions a tooltip renders.
//! - [`Tooltips`]: the document-wide registry tying it together, including mutual
//!   exclusion of open tooltips that share a variant.
//!
//! Positioning itself lives in [`understory_placement`].
//!
//! ## Time
//!
//! Nothing here reads a clock. Every input carries `now` in milliseconds; the host
//! polls [`Tooltips::next_deadline`] and calls [`Tooltips::advance`] when it passes.
//! Given the same inputs and timestamps the engine produces the same effects.
//!
//! ## Open and close
//!
//! `open` is a plain boolean and the single source of truth. When it turns on, the
//! registry closes other open tooltips of the same variant, dispatches a cancelable
//! `open` event, unhides and positions the popup, and plays the entrance. `opened`
//! follows when the host reports the animation finished. Closing mirrors this with
//! `close`, the exit animation, hiding, and `closed`. Preventing `open` or `close`
//! skips the visual sequence but leaves the flag as set.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::Position;
//! use understory_tooltip::motion::Animation;
//! use understory_tooltip::trigger::TriggerSet;
//! use understory_tooltip::{
//!     Button, NoParent, Surface, TooltipConfig, TooltipEvent, TooltipId, TooltipInput,
//!     TooltipNodes, Tooltips,
//! };
//!
//! struct Host;
//!
//! impl Surface<u32> for Host {
//!     fn bounds(&self, node: &u32) -> Option<Rect> {
//!         match node {
//!             2 => Some(Rect::new(100.0, 100.0, 140.0, 120.0)),
//!             3 => Some(Rect::new(0.0, 0.0, 60.0, 20.0)),
//!             _ => None,
//!         }
//!     }
//!     fn viewport(&self) -> Size { Size::new(800.0, 600.0) }
//!     fn dispatch(&mut self, _: TooltipId, _: TooltipEvent) -> bool { true }
//!     fn set_hidden(&mut self, _: TooltipId, _: bool) {}
//!     fn place(&mut self, _: TooltipId, _: &Position) {}
//!     fn play(&mut self, _: TooltipId, _: &Animation) {}
//!     fn stop_animations(&mut self, _: TooltipId) {}
//!     fn request_frame(&mut self, _: TooltipId) {}
//! }
//!
//! let mut tooltips = Tooltips::new();
//! let mut host = Host;
//! let id = tooltips.attach(
//!     TooltipConfig::default().trigger(TriggerSet::CLICK),
//!     TooltipNodes { root: 1, popup: 3, target: Some(2) },
//!     &NoParent,
//! );
//! tooltips.first_updated(id, &mut host);
//!
//! let press = TooltipInput::PointerDown { path: &[0, 1, 2], button: Button::Primary };
//! tooltips.handle(id, press, 0, &mut host);
//! assert!(tooltips.is_open(id));
//! assert_eq!(tooltips.position(id).map(|p| p.top), Some(76.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod dismiss;
pub mod hover;
pub mod machine;
pub mod motion;
pub mod render;
pub mod timer;
pub mod trigger;
pub mod types;

mod registry;
mod surface;

pub use config::{AttributeError, Property, TooltipConfig};
pub use motion::Phase;
pub use registry::{TooltipNodes, Tooltips};
pub use surface::Surface;
pub use types::{
    Button, ChildKind, EventKind, Key, NoParent, Outcome, ParentLookup, ScrollLookup,
    TooltipEvent, TooltipId, TooltipInput, first_eligible,
};
