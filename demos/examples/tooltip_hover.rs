// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and focus triggers on a simulated clock.
//!
//! The pointer enters a target, waits out the open delay, moves onto the popup,
//! and finally leaves. Focus then opens the tooltip and a blur closes it.
//! Every effect the engine requests is printed.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_hover`

use kurbo::{Rect, Size};
use understory_placement::Position;
use understory_tooltip::motion::Animation;
use understory_tooltip::{
    NoParent, Phase, Surface, TooltipConfig, TooltipEvent, TooltipId, TooltipInput, TooltipNodes,
    Tooltips,
};

const ROOT: u32 = 1;
const TARGET: u32 = 2;
const POPUP: u32 = 3;

/// Prints effects and finishes animations on the next `settle`.
#[derive(Default)]
struct Console {
    pending: Vec<(TooltipId, Animation)>,
}

impl Surface<u32> for Console {
    fn bounds(&self, node: &u32) -> Option<Rect> {
        match *node {
            TARGET => Some(Rect::new(200.0, 200.0, 280.0, 232.0)),
            POPUP => Some(Rect::new(0.0, 0.0, 96.0, 24.0)),
            _ => None,
        }
    }

    fn viewport(&self) -> Size {
        Size::new(640.0, 480.0)
    }

    fn dispatch(&mut self, _: TooltipId, event: TooltipEvent) -> bool {
        println!("    event  {}", event.kind.name());
        true
    }

    fn set_hidden(&mut self, _: TooltipId, hidden: bool) {
        println!("    hidden {hidden}");
    }

    fn place(&mut self, _: TooltipId, p: &Position) {
        println!("    place  {} at ({}, {}), origin {}", p.placement, p.left, p.top, p.origin);
    }

    fn play(&mut self, id: TooltipId, animation: &Animation) {
        println!(
            "    play   {:?} {}ms {}",
            animation.direction,
            animation.duration_ms,
            animation.easing.as_css()
        );
        if !animation.is_instant() {
            self.pending.push((id, *animation));
        }
    }

    fn stop_animations(&mut self, _: TooltipId) {
        println!("    stop");
    }

    fn request_frame(&mut self, _: TooltipId) {}
}

fn settle(tooltips: &mut Tooltips<u32>, host: &mut Console) {
    for (id, animation) in core::mem::take(&mut host.pending) {
        tooltips.finish_animation(id, animation.ticket, host);
    }
}

fn main() {
    let mut tooltips = Tooltips::new();
    let mut host = Console::default();
    let id = tooltips.attach(
        TooltipConfig::default().content("Save changes"),
        TooltipNodes {
            root: ROOT,
            popup: POPUP,
            target: Some(TARGET),
        },
        &NoParent,
    );
    tooltips.first_updated(id, &mut host);

    println!("t=0    pointer enters target");
    tooltips.handle(id, TooltipInput::PointerMove { path: &[0, ROOT, TARGET] }, 0, &mut host);
    println!("       next deadline: {:?}", tooltips.next_deadline());
    assert_eq!(tooltips.next_deadline(), Some(150));

    println!("t=150  open delay elapses");
    tooltips.advance(150, &mut host);
    settle(&mut tooltips, &mut host);
    assert_eq!(tooltips.phase(id), Some(Phase::Open));

    println!("t=400  pointer moves onto the popup");
    tooltips.handle(id, TooltipInput::PointerMove { path: &[0, ROOT, POPUP] }, 400, &mut host);
    tooltips.advance(1_000, &mut host);
    assert!(tooltips.is_open(id), "hovering the popup keeps it open");

    println!("t=1000 pointer leaves the popup");
    tooltips.handle(id, TooltipInput::PointerMove { path: &[0] }, 1_000, &mut host);
    tooltips.advance(1_150, &mut host);
    settle(&mut tooltips, &mut host);
    assert!(!tooltips.is_open(id));

    println!("t=2000 focus");
    tooltips.handle(id, TooltipInput::Focus, 2_000, &mut host);
    settle(&mut tooltips, &mut host);
    assert!(tooltips.is_open(id));

    println!("t=2500 blur");
    tooltips.handle(id, TooltipInput::Blur, 2_500, &mut host);
    settle(&mut tooltips, &mut host);
    assert_eq!(tooltips.phase(id), Some(Phase::Closed));
}
