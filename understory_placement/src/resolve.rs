// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position resolution: space tests, `auto` fallback order, and per-side formulas.

use kurbo::{Rect, Size};

use crate::types::{
    Alignment, OriginX, OriginY, Placement, PlacementRequest, Position, Side, TransformOrigin,
    Variant,
};

/// Gap between target and popup for [`Variant::Plain`].
pub const PLAIN_TARGET_MARGIN: f64 = 4.0;

/// Gap between target and popup for [`Variant::Rich`].
pub const RICH_TARGET_MARGIN: f64 = 0.0;

/// Gap kept between popup and viewport edge when testing for space.
pub const VIEWPORT_MARGIN: f64 = 4.0;

/// Fallback order for [`Variant::Rich`] when resolving `auto`.
pub const RICH_PRIORITY: [Placement; 8] = [
    Placement::BottomRight,
    Placement::BottomLeft,
    Placement::TopRight,
    Placement::TopLeft,
    Placement::Bottom,
    Placement::Top,
    Placement::Right,
    Placement::Left,
];

/// Fallback order for [`Variant::Plain`] when resolving `auto`.
pub const PLAIN_PRIORITY: [Placement; 4] = [
    Placement::Top,
    Placement::Bottom,
    Placement::Left,
    Placement::Right,
];

/// Margins used by a positioning pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Margins {
    /// Gap between the target and the popup. Applied to final coordinates.
    pub target: f64,
    /// Gap between the popup and the viewport edge. Only used by space tests.
    pub viewport: f64,
}

impl Margins {
    /// Margins for the given variant.
    pub const fn for_variant(variant: Variant) -> Self {
        let target = match variant {
            Variant::Plain => PLAIN_TARGET_MARGIN,
            Variant::Rich => RICH_TARGET_MARGIN,
        };
        Self {
            target,
            viewport: VIEWPORT_MARGIN,
        }
    }
}

/// Which sides of the target have room for the popup.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Space {
    /// Room above the target.
    pub top: bool,
    /// Room below the target.
    pub bottom: bool,
    /// Room left of the target.
    pub left: bool,
    /// Room right of the target.
    pub right: bool,
}

impl Space {
    /// Every side has room.
    pub const ALL: Self = Self {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    /// No side has room.
    pub const NONE: Self = Self {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    /// Measure the room around `target` inside a viewport of size `viewport`.
    ///
    /// A side has room when the distance from the target edge to the viewport
    /// edge is at least the popup extent on that axis plus both margins.
    pub fn measure(target: Rect, popup: Size, viewport: Size, margins: Margins) -> Self {
        let target = target.abs();
        let need_y = popup.height + margins.target + margins.viewport;
        let need_x = popup.width + margins.target + margins.viewport;
        Self {
            top: target.y0 >= need_y,
            bottom: viewport.height - target.y1 >= need_y,
            left: target.x0 >= need_x,
            right: viewport.width - target.x1 >= need_x,
        }
    }

    /// Whether `placement` fits: its side has room and, for corners, so does
    /// the horizontal direction it moves toward.
    pub fn admits(&self, placement: Placement) -> bool {
        let side = match placement.side() {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        };
        let across = match placement.alignment() {
            Alignment::Left => self.left,
            Alignment::Right => self.right,
            Alignment::Center | Alignment::Start | Alignment::End => true,
        };
        side && across
    }
}

/// Pick a concrete placement for `auto` from the measured space.
///
/// The first entry of the variant's priority list that [`Space::admits`] wins.
/// When nothing fits, the first entry is used anyway
/// (`bottom-right` for rich, `top` for plain).
pub fn auto_placement(space: Space, variant: Variant) -> Placement {
    let order: &[Placement] = match variant {
        Variant::Rich => &RICH_PRIORITY,
        Variant::Plain => &PLAIN_PRIORITY,
    };
    order
        .iter()
        .copied()
        .find(|&p| space.admits(p))
        .unwrap_or(order[0])
}

/// Compute the popup position for `target`.
///
/// This is a pure function of its inputs. Call it again on every change to
/// the target rectangle, popup size, viewport, or request; there is no
/// incremental state.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{resolve_position, Placement, PlacementRequest, Variant};
///
/// let target = Rect::new(100.0, 100.0, 140.0, 120.0);
/// let pos = resolve_position(
///     target,
///     Size::new(60.0, 24.0),
///     PlacementRequest::Exact(Placement::Bottom),
///     Size::new(800.0, 600.0),
///     Variant::Plain,
/// );
/// assert_eq!(pos.top, 124.0);
/// assert_eq!(pos.left, 90.0);
/// ```
pub fn resolve_position(
    target: Rect,
    popup: Size,
    request: PlacementRequest,
    viewport: Size,
    variant: Variant,
) -> Position {
    let target = target.abs();
    let margins = Margins::for_variant(variant);
    let placement = match request {
        PlacementRequest::Exact(p) => p,
        PlacementRequest::Auto => {
            auto_placement(Space::measure(target, popup, viewport, margins), variant)
        }
    };
    place(target, popup, placement, margins.target)
}

/// Apply the per-side formulas for a concrete placement.
///
/// `margin` is the target gap; it only separates the popup from the target on
/// the side it is placed on (and on the horizontal axis for corners).
pub fn place(target: Rect, popup: Size, placement: Placement, margin: f64) -> Position {
    let target = target.abs();
    let side = placement.side();
    let alignment = placement.alignment();

    let (top, y) = match side {
        Side::Top => (target.y0 - popup.height - margin, OriginY::Bottom),
        Side::Bottom => (target.y1 + margin, OriginY::Top),
        Side::Left | Side::Right => {
            let top = match alignment {
                Alignment::Start => target.y0,
                Alignment::End => target.y1 - popup.height,
                _ => target.y0 + (target.height() - popup.height) / 2.0,
            };
            (top, OriginY::Center)
        }
    };

    let (left, x) = match (side, alignment) {
        (Side::Left, _) | (_, Alignment::Left) => {
            (target.x0 - popup.width - margin, OriginX::Right)
        }
        (Side::Right, _) | (_, Alignment::Right) => (target.x1 + margin, OriginX::Left),
        (_, Alignment::Start) => (target.x0, OriginX::Center),
        (_, Alignment::End) => (target.x1 - popup.width, OriginX::Center),
        (_, Alignment::Center) => (
            target.x0 + (target.width() - popup.width) / 2.0,
            OriginX::Center,
        ),
    };

    Position {
        left,
        top,
        origin: TransformOrigin { x, y },
        placement,
    }
}
