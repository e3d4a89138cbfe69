// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-triggered tooltips, outside dismissal, and mutual exclusion.
//!
//! Two plain tooltips and one rich tooltip share a document. Opening the second
//! plain tooltip force-closes the first even though the host vetoes ordinary
//! closes; the rich one stays open. An outside click and Escape dismiss the rest.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_click`

use kurbo::{Rect, Size};
use understory_placement::{Position, Variant};
use understory_tooltip::motion::Animation;
use understory_tooltip::render::{Regions, Slotted};
use understory_tooltip::trigger::TriggerSet;
use understory_tooltip::{
    Button, ChildKind, EventKind, Key, NoParent, Outcome, Surface, TooltipConfig, TooltipEvent,
    TooltipId, TooltipInput, TooltipNodes, Tooltips, first_eligible,
};

/// Records events; vetoes cancelable closes when `veto_close` is set.
#[derive(Default)]
struct Host {
    veto_close: bool,
    events: Vec<(TooltipId, EventKind)>,
}

impl Surface<u32> for Host {
    fn bounds(&self, node: &u32) -> Option<Rect> {
        // Targets end in 2, popups in 3; tens digit selects the column.
        let x = f64::from(node / 10) * 150.0 + 40.0;
        match node % 10 {
            2 => Some(Rect::new(x, 400.0, x + 60.0, 430.0)),
            3 => Some(Rect::new(0.0, 0.0, 120.0, 48.0)),
            _ => None,
        }
    }

    fn viewport(&self) -> Size {
        Size::new(800.0, 600.0)
    }

    fn dispatch(&mut self, id: TooltipId, event: TooltipEvent) -> bool {
        self.events.push((id, event.kind));
        !(self.veto_close && event.kind == EventKind::Close)
    }

    fn set_hidden(&mut self, _: TooltipId, _: bool) {}
    fn place(&mut self, _: TooltipId, _: &Position) {}
    fn play(&mut self, _: TooltipId, _: &Animation) {}
    fn stop_animations(&mut self, _: TooltipId) {}
    fn request_frame(&mut self, _: TooltipId) {}
}

fn attach(tooltips: &mut Tooltips<u32>, host: &mut Host, column: u32, config: TooltipConfig) -> TooltipId {
    let base = column * 10;
    // The default slot holds a style element before the real target.
    let target = first_eligible([(base + 9, ChildKind::Style), (base + 2, ChildKind::Element)]);
    let id = tooltips.attach(
        config,
        TooltipNodes {
            root: base + 1,
            popup: base + 3,
            target,
        },
        &NoParent,
    );
    tooltips.first_updated(id, host);
    id
}

fn press(path: &[u32]) -> TooltipInput<'_, u32> {
    TooltipInput::PointerDown {
        path,
        button: Button::Primary,
    }
}

fn main() {
    let mut tooltips = Tooltips::new();
    let mut host = Host::default();
    let click = TooltipConfig::default().trigger(TriggerSet::CLICK);
    let a = attach(&mut tooltips, &mut host, 0, click.clone());
    let b = attach(&mut tooltips, &mut host, 1, click.clone());
    let rich_config = click
        .variant(Variant::Rich)
        .headline("Shortcuts")
        .content("Press ? to see all shortcuts");
    let regions = Regions::for_config(&rich_config, Slotted { headline: false, action: true });
    println!("rich regions: {regions:?}");
    let rich = attach(&mut tooltips, &mut host, 2, rich_config);

    tooltips.handle(a, press(&[0, 1, 2]), 0, &mut host);
    tooltips.handle(rich, press(&[0, 21, 22]), 10, &mut host);
    println!("open plain: {:?}", tooltips.open_ids(Variant::Plain).collect::<Vec<_>>());

    host.veto_close = true;
    tooltips.handle(b, press(&[0, 11, 12]), 20, &mut host);
    assert!(!tooltips.is_open(a), "forced close ignores the veto");
    assert!(tooltips.is_open(b));
    assert!(tooltips.is_open(rich));
    host.veto_close = false;

    // A document-level pointer-down outside every tooltip.
    tooltips.broadcast(press(&[0, 99]), 30, &mut host);
    assert!(!tooltips.is_open(b));
    assert!(!tooltips.is_open(rich));

    tooltips.handle(a, press(&[0, 1, 2]), 40, &mut host);
    let outcome = tooltips.handle(a, TooltipInput::KeyDown(Key::Escape), 50, &mut host);
    assert_eq!(outcome, Outcome::StopAndConsume);
    assert!(!tooltips.is_open(a));

    for (id, kind) in &host.events {
        let who = if *id == a {
            "a"
        } else if *id == b {
            "b"
        } else {
            "rich"
        };
        println!("{who:>4}: {}", kind.name());
    }
}
