// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: anchored popup positioning for tooltips and menus.
//!
//! Given a target's bounding box, a popup's measured size, a requested placement,
//! and the viewport size, this crate computes where the popup goes and which point
//! it should scale from.
//!
//! - [`resolve_position`]: the single entry point. Pure and deterministic.
//! - [`Placement`]: sixteen concrete placements, `side` × alignment plus four corners.
//! - [`PlacementRequest`]: a concrete placement or `auto`.
//! - [`Variant`]: `plain` or `rich`; selects margins and the `auto` priority list.
//! - [`Space`]: per-side "does the popup fit here" flags used by `auto`.
//! - [`Position`]: `left`/`top`, a [`TransformOrigin`], and the resolved [`Placement`].
//!
//! ## Not a layout engine
//!
//! Nothing here measures or clamps.
//! Callers supply rectangles in a common coordinate space (usually the viewport) and apply the
//! result themselves. The viewport margin only informs the `auto` space tests; final coordinates
//! may extend past the viewport when no placement fits.
//!
//! ## Auto resolution
//!
//! `auto` measures the room on each side of the target and walks a priority list:
//!
//! - rich: `bottom-right`, `bottom-left`, `top-right`, `top-left`, `bottom`, `top`, `right`, `left`
//! - plain: `top`, `bottom`, `left`, `right`
//!
//! The first placement whose sides all have room wins; otherwise the list head is used.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{resolve_position, Placement, PlacementRequest, Variant};
//!
//! // A target tucked into the bottom-right corner of a 1000×800 viewport.
//! let target = Rect::new(900.0, 740.0, 980.0, 780.0);
//! let pos = resolve_position(
//!     target,
//!     Size::new(200.0, 100.0),
//!     PlacementRequest::Auto,
//!     Size::new(1000.0, 800.0),
//!     Variant::Rich,
//! );
//! assert_eq!(pos.placement, Placement::TopLeft);
//! assert_eq!(pos.origin.to_string(), "right bottom");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod resolve;
mod types;

pub use resolve::{
    Margins, PLAIN_PRIORITY, PLAIN_TARGET_MARGIN, RICH_PRIORITY, RICH_TARGET_MARGIN, Space,
    VIEWPORT_MARGIN, auto_placement, place, resolve_position,
};
pub use types::{
    Alignment, OriginX, OriginY, ParsePlacementError, ParseVariantError, Placement,
    PlacementRequest, Position, Side, TransformOrigin, Variant,
};
