// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto placement across a viewport.
//!
//! Resolves `auto` for targets in each corner and the middle of a viewport, for
//! both variants, and prints the chosen placement and transform origin.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_auto`

use kurbo::{Rect, Size};
use understory_placement::{Placement, PlacementRequest, Variant, resolve_position};

fn main() {
    let viewport = Size::new(1000.0, 800.0);
    let targets = [
        ("top-left", Rect::new(20.0, 20.0, 100.0, 60.0)),
        ("top-right", Rect::new(900.0, 20.0, 980.0, 60.0)),
        ("middle", Rect::new(460.0, 380.0, 540.0, 420.0)),
        ("bottom-left", Rect::new(20.0, 740.0, 100.0, 780.0)),
        ("bottom-right", Rect::new(900.0, 740.0, 980.0, 780.0)),
    ];

    for (variant, popup) in [
        (Variant::Plain, Size::new(120.0, 24.0)),
        (Variant::Rich, Size::new(200.0, 100.0)),
    ] {
        println!("== {variant} ({}×{}) ==", popup.width, popup.height);
        for (name, target) in targets {
            let pos = resolve_position(target, popup, PlacementRequest::Auto, viewport, variant);
            println!(
                "  {name:>12}: {:<12} at ({:>6.1}, {:>6.1}) origin {}",
                pos.placement.to_string(),
                pos.left,
                pos.top,
                pos.origin
            );
        }
    }

    // Rich tooltip with no room below or to the right.
    let corner = resolve_position(
        Rect::new(900.0, 740.0, 980.0, 780.0),
        Size::new(200.0, 100.0),
        PlacementRequest::Auto,
        viewport,
        Variant::Rich,
    );
    assert_eq!(corner.placement, Placement::TopLeft);
    assert_eq!(corner.left, 700.0);
    assert_eq!(corner.top, 640.0);

    // Plain tooltip near the top edge drops below the target.
    let top = resolve_position(
        Rect::new(20.0, 20.0, 100.0, 60.0),
        Size::new(120.0, 24.0),
        PlacementRequest::Auto,
        viewport,
        Variant::Plain,
    );
    assert_eq!(top.placement, Placement::Bottom);
}
