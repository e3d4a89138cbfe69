// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for placement resolution.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_placement::{
    Margins, OriginY, Placement, PlacementRequest, Side, Space, Variant, auto_placement, place,
    resolve_position,
};

fn target_rect() -> impl Strategy<Value = Rect> {
    (0.0..900.0f64, 0.0..700.0f64, 1.0..100.0f64, 1.0..100.0f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn popup_size() -> impl Strategy<Value = Size> {
    (1.0..300.0f64, 1.0..200.0f64).prop_map(|(w, h)| Size::new(w, h))
}

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Plain), Just(Variant::Rich)]
}

fn placement() -> impl Strategy<Value = Placement> {
    (0..Placement::ALL.len()).prop_map(|i| Placement::ALL[i])
}

fn space() -> impl Strategy<Value = Space> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(top, bottom, left, right)| Space {
            top,
            bottom,
            left,
            right,
        },
    )
}

proptest! {
    #[test]
    fn exact_request_is_returned_verbatim(
        t in target_rect(),
        p in popup_size(),
        pl in placement(),
        v in variant()
    ) {
        let viewport = Size::new(1000.0, 800.0);
        let pos = resolve_position(t, p, PlacementRequest::Exact(pl), viewport, v);
        prop_assert_eq!(pos.placement, pl);
        prop_assert_eq!(pos, place(t, p, pl, Margins::for_variant(v).target));
    }

    #[test]
    fn side_formulas_hold(
        t in target_rect(),
        p in popup_size(),
        pl in placement(),
        v in variant()
    ) {
        let m = Margins::for_variant(v).target;
        let pos = place(t, p, pl, m);
        match pl.side() {
            Side::Top => {
                prop_assert_eq!(pos.top, t.y0 - p.height - m);
                prop_assert_eq!(pos.origin.y, OriginY::Bottom);
            }
            Side::Bottom => {
                prop_assert_eq!(pos.top, t.y1 + m);
                prop_assert_eq!(pos.origin.y, OriginY::Top);
            }
            Side::Left => prop_assert_eq!(pos.left, t.x0 - p.width - m),
            Side::Right => prop_assert_eq!(pos.left, t.x1 + m),
        }
    }

    #[test]
    fn resolution_is_deterministic(
        t in target_rect(),
        p in popup_size(),
        v in variant()
    ) {
        let viewport = Size::new(1000.0, 800.0);
        let a = resolve_position(t, p, PlacementRequest::Auto, viewport, v);
        let b = resolve_position(t, p, PlacementRequest::Auto, viewport, v);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn auto_picks_an_admitted_placement_or_the_fallback(s in space(), v in variant()) {
        let chosen = auto_placement(s, v);
        let fallback = match v {
            Variant::Rich => Placement::BottomRight,
            Variant::Plain => Placement::Top,
        };
        prop_assert!(s.admits(chosen) || chosen == fallback);
        if v == Variant::Plain {
            prop_assert!(!chosen.is_corner());
        }
    }

    #[test]
    fn auto_result_has_room_when_it_was_admitted(
        t in target_rect(),
        p in popup_size(),
        v in variant()
    ) {
        let viewport = Size::new(1000.0, 800.0);
        let margins = Margins::for_variant(v);
        let space = Space::measure(t, p, viewport, margins);
        let pos = resolve_position(t, p, PlacementRequest::Auto, viewport, v);
        if space.admits(pos.placement) {
            let r = pos.rect(p);
            match pos.placement.side() {
                Side::Top => prop_assert!(r.y0 >= margins.viewport - 1e-9),
                Side::Bottom => prop_assert!(r.y1 <= viewport.height - margins.viewport + 1e-9),
                Side::Left => prop_assert!(r.x0 >= margins.viewport - 1e-9),
                Side::Right => prop_assert!(r.x1 <= viewport.width - margins.viewport + 1e-9),
            }
        }
    }
}
