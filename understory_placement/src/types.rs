// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: variants, placement tokens, transform origins, and positions.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};

/// Visual shape of a tooltip.
///
/// The variant affects the gap between target and popup (see
/// [`Margins::for_variant`](crate::Margins::for_variant)) and the priority
/// order used when resolving [`PlacementRequest::Auto`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Variant {
    /// Simple single-line label.
    #[default]
    Plain,
    /// Headline, supporting content, and optional actions.
    Rich,
}

impl Variant {
    /// The attribute token for this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Rich => "rich",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "plain" => Ok(Self::Plain),
            "rich" => Ok(Self::Rich),
            _ => Err(ParseVariantError),
        }
    }
}

/// Which side of the target the popup is placed on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the target.
    Top,
    /// Below the target.
    Bottom,
    /// To the left of the target.
    Left,
    /// To the right of the target.
    Right,
}

/// Secondary-axis token of a placement.
///
/// `Start`, `End`, and `Center` align the popup against the target's edges.
/// `Left` and `Right` only occur in the corner placements and move the popup
/// fully past the corresponding target edge instead of aligning to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// Centered on the target.
    Center,
    /// Aligned to the target's start edge (top or left).
    Start,
    /// Aligned to the target's end edge (bottom or right).
    End,
    /// Past the target's left edge.
    Left,
    /// Past the target's right edge.
    Right,
}

/// A concrete popup placement relative to its target.
///
/// Each value is a `side` optionally followed by an alignment token, written
/// in kebab-case (`"top"`, `"left-start"`, `"bottom-right"`, ...).
/// The four corner values are intended for the [`Variant::Rich`] shape.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[allow(missing_docs, reason = "Variant names are the placement tokens.")]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Placement {
    /// Every concrete placement, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// The side of the target this placement puts the popup on.
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd | Self::TopLeft | Self::TopRight => Side::Top,
            Self::Bottom
            | Self::BottomStart
            | Self::BottomEnd
            | Self::BottomLeft
            | Self::BottomRight => Side::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => Side::Left,
            Self::Right | Self::RightStart | Self::RightEnd => Side::Right,
        }
    }

    /// The secondary-axis token of this placement.
    pub const fn alignment(self) -> Alignment {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => Alignment::Center,
            Self::TopStart | Self::BottomStart | Self::LeftStart | Self::RightStart => {
                Alignment::Start
            }
            Self::TopEnd | Self::BottomEnd | Self::LeftEnd | Self::RightEnd => Alignment::End,
            Self::TopLeft | Self::BottomLeft => Alignment::Left,
            Self::TopRight | Self::BottomRight => Alignment::Right,
        }
    }

    /// Returns `true` for the four diagonal placements.
    pub const fn is_corner(self) -> bool {
        matches!(self.alignment(), Alignment::Left | Alignment::Right)
    }

    /// The attribute token for this placement.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(ParsePlacementError)
    }
}

/// A requested placement: either a concrete [`Placement`] or `auto`.
///
/// Resolution (see [`resolve_position`](crate::resolve_position)) always
/// produces a concrete [`Placement`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PlacementRequest {
    /// Pick a placement from available space.
    #[default]
    Auto,
    /// Use exactly this placement.
    Exact(Placement),
}

impl PlacementRequest {
    /// The attribute token for this request.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Exact(p) => p.as_str(),
        }
    }
}

impl From<Placement> for PlacementRequest {
    fn from(p: Placement) -> Self {
        Self::Exact(p)
    }
}

impl fmt::Display for PlacementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementRequest {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(Self::Auto),
            other => other.parse().map(Self::Exact),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PlacementRequest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PlacementRequest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl serde::de::Visitor<'_> for TokenVisitor {
            type Value = PlacementRequest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("`auto` or a placement token such as `top-start`")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(TokenVisitor)
    }
}

/// Horizontal component of a transform origin.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OriginX {
    /// Left edge of the popup.
    Left,
    /// Horizontal center of the popup.
    Center,
    /// Right edge of the popup.
    Right,
}

/// Vertical component of a transform origin.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OriginY {
    /// Top edge of the popup.
    Top,
    /// Vertical center of the popup.
    Center,
    /// Bottom edge of the popup.
    Bottom,
}

/// Anchor point for the popup's scale animation.
///
/// Formats as a CSS `transform-origin` value, e.g. `"center bottom"`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TransformOrigin {
    /// Horizontal anchor.
    pub x: OriginX,
    /// Vertical anchor.
    pub y: OriginY,
}

impl TransformOrigin {
    /// The centered origin.
    pub const CENTER: Self = Self {
        x: OriginX::Center,
        y: OriginY::Center,
    };

    /// Resolve the origin to a point within a popup of the given size.
    pub fn point_in(self, popup: Size) -> Point {
        let x = match self.x {
            OriginX::Left => 0.0,
            OriginX::Center => popup.width / 2.0,
            OriginX::Right => popup.width,
        };
        let y = match self.y {
            OriginY::Top => 0.0,
            OriginY::Center => popup.height / 2.0,
            OriginY::Bottom => popup.height,
        };
        Point::new(x, y)
    }
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self.x {
            OriginX::Left => "left",
            OriginX::Center => "center",
            OriginX::Right => "right",
        };
        let y = match self.y {
            OriginY::Top => "top",
            OriginY::Center => "center",
            OriginY::Bottom => "bottom",
        };
        write!(f, "{x} {y}")
    }
}

/// Output of a positioning pass.
///
/// Coordinates are in the same space as the target rectangle passed to
/// [`resolve_position`](crate::resolve_position), typically the viewport.
/// They are not clamped to the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    /// Left edge of the popup.
    pub left: f64,
    /// Top edge of the popup.
    pub top: f64,
    /// Anchor for the entrance/exit scale animation.
    pub origin: TransformOrigin,
    /// The concrete placement that produced these coordinates.
    pub placement: Placement,
}

impl Position {
    /// The popup's top-left corner.
    pub fn point(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// The popup's rectangle for a given measured size.
    pub fn rect(&self, popup: Size) -> Rect {
        Rect::from_origin_size(self.point(), popup)
    }
}

/// Error returned when a placement token is not recognized.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognized placement token")]
pub struct ParsePlacementError;

/// Error returned when a variant token is not recognized.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognized tooltip variant")]
pub struct ParseVariantError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_tokens_round_trip_through_from_str() {
        for p in Placement::ALL {
            assert_eq!(p.as_str().parse::<Placement>(), Ok(p), "token {p}");
        }
    }

    #[test]
    fn placement_rejects_unknown_and_auto() {
        assert_eq!("middle".parse::<Placement>(), Err(ParsePlacementError));
        assert_eq!("auto".parse::<Placement>(), Err(ParsePlacementError));
        assert_eq!(
            "auto".parse::<PlacementRequest>(),
            Ok(PlacementRequest::Auto)
        );
        assert_eq!(
            " left-end ".parse::<PlacementRequest>(),
            Ok(PlacementRequest::Exact(Placement::LeftEnd))
        );
    }

    #[test]
    fn corner_placements_decompose_into_side_and_direction() {
        assert_eq!(Placement::TopLeft.side(), Side::Top);
        assert_eq!(Placement::TopLeft.alignment(), Alignment::Left);
        assert_eq!(Placement::BottomRight.side(), Side::Bottom);
        assert_eq!(Placement::BottomRight.alignment(), Alignment::Right);
        let corners = Placement::ALL.iter().filter(|p| p.is_corner()).count();
        assert_eq!(corners, 4, "exactly four corner placements");
    }

    #[test]
    fn variant_parse_and_display() {
        assert_eq!("rich".parse::<Variant>(), Ok(Variant::Rich));
        assert_eq!("plain".parse::<Variant>(), Ok(Variant::Plain));
        assert_eq!("fancy".parse::<Variant>(), Err(ParseVariantError));
        assert_eq!(Variant::default(), Variant::Plain);
    }

    #[test]
    fn transform_origin_formats_as_css() {
        let o = TransformOrigin {
            x: OriginX::Center,
            y: OriginY::Bottom,
        };
        assert_eq!(alloc::format!("{o}"), "center bottom");
        assert_eq!(o.point_in(Size::new(40.0, 20.0)), Point::new(20.0, 20.0));
    }
}
