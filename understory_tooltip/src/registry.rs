// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document-wide tooltip registry: instances, input routing, and open/close sequencing.

use alloc::vec::Vec;

use understory_placement::{Position, TransformOrigin, Variant, resolve_position};

use crate::config::{AttributeError, Property, TooltipConfig};
use crate::dismiss::Watcher;
use crate::hover::{HoverEvent, HoverPath};
use crate::machine::{Intent, TriggerMachine};
use crate::motion::{AnimationTicket, Direction, MOTION_SHORT_MS, Phase, Sequencer};
use crate::surface::Surface;
use crate::types::{
    EventKind, Key, Outcome, ParentLookup, ScrollLookup, TooltipEvent, TooltipId, TooltipInput,
};

/// Host nodes a tooltip is bound to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TooltipNodes<K> {
    /// The tooltip element itself. Pointer-downs whose path misses it are outside.
    pub root: K,
    /// The floating popup surface.
    pub popup: K,
    /// The trigger target, usually from [`first_eligible`](crate::first_eligible).
    /// `None` leaves the tooltip inert.
    pub target: Option<K>,
}

#[derive(Clone, Debug)]
struct Instance<K: Copy + Eq> {
    generation: u32,
    config: TooltipConfig,
    nodes: TooltipNodes<K>,
    machine: TriggerMachine,
    hover: HoverPath<K>,
    watcher: Watcher<K>,
    motion: Sequencer,
    // First render has completed.
    rendered: bool,
    // The in-flight sequence skips its completion event.
    quiet: bool,
    position: Option<Position>,
}

impl<K: Copy + Eq> Instance<K> {
    fn new(generation: u32, config: TooltipConfig, nodes: TooltipNodes<K>, watcher: Watcher<K>) -> Self {
        Self {
            generation,
            machine: TriggerMachine::from_config(&config),
            config,
            nodes,
            hover: HoverPath::new(),
            watcher,
            motion: Sequencer::new(),
            rendered: false,
            quiet: false,
            position: None,
        }
    }

    fn origin(&self) -> TransformOrigin {
        self.position.map_or(TransformOrigin::CENTER, |p| p.origin)
    }

    /// Re-run the resolver against current layout and apply the result.
    fn reposition(&mut self, id: TooltipId, surface: &mut impl Surface<K>) {
        let Some(target) = self.nodes.target else {
            return;
        };
        let (Some(target), Some(popup)) = (surface.bounds(&target), surface.bounds(&self.nodes.popup))
        else {
            return;
        };
        let position = resolve_position(
            target,
            popup.size(),
            self.config.placement,
            surface.viewport(),
            self.config.variant,
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(?id, placement = %position.placement, "tooltip positioned");
        self.position = Some(position);
        surface.place(id, &position);
    }
}

/// All live tooltips in a document.
///
/// Instances live in generational slots, like nodes in a box tree: detaching frees
/// the slot and bumps its generation so old [`TooltipId`]s go stale. Operations on a
/// stale id do nothing.
///
/// Opening any tooltip first force-closes every other open tooltip of the same
/// [`Variant`].
pub struct Tooltips<K: Copy + Eq> {
    slots: Vec<Option<Instance<K>>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<K: Copy + Eq> Default for Tooltips<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> core::fmt::Debug for Tooltips<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        let open = self.slots.iter().flatten().filter(|s| s.config.open).count();
        f.debug_struct("Tooltips")
            .field("slots_total", &total)
            .field("slots_alive", &alive)
            .field("open", &open)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq> Tooltips<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Register a tooltip.
    ///
    /// The target's scrollable ancestors are collected now, once. The popup stays
    /// untouched until [`Tooltips::first_updated`].
    pub fn attach<L>(&mut self, config: TooltipConfig, nodes: TooltipNodes<K>, lookup: &L) -> TooltipId
    where
        L: ParentLookup<K> + ScrollLookup<K>,
    {
        let watcher = match nodes.target {
            Some(target) => Watcher::bind(target, lookup, lookup),
            None => Watcher::new(),
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.slots.push(None);
            self.generations.push(1);
            (self.slots.len() - 1, 1)
        };
        self.slots[idx] = Some(Instance::new(generation, config, nodes, watcher));
        #[allow(
            clippy::cast_possible_truncation,
            reason = "TooltipId uses 32-bit indices."
        )]
        let id = TooltipId::new(idx as u32, generation);
        #[cfg(feature = "tracing")]
        if nodes.target.is_none() {
            tracing::debug!(?id, "tooltip has no eligible target; staying inert");
        }
        id
    }

    /// Re-resolve the trigger target, e.g. after the tooltip was reconnected.
    ///
    /// Pending timers and hover state are dropped. Returns `false` for a stale id.
    pub fn rebind<L>(&mut self, id: TooltipId, target: Option<K>, lookup: &L) -> bool
    where
        L: ParentLookup<K> + ScrollLookup<K>,
    {
        let Some(inst) = self.get_mut(id) else {
            return false;
        };
        inst.nodes.target = target;
        inst.watcher = match target {
            Some(target) => Watcher::bind(target, lookup, lookup),
            None => Watcher::new(),
        };
        inst.machine.reset();
        let _ = inst.hover.clear();
        true
    }

    /// Deregister a tooltip, releasing its timers and hover tracking.
    ///
    /// Returns `false` if `id` was already stale.
    pub fn detach(&mut self, id: TooltipId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        true
    }

    /// Returns true if `id` refers to an attached tooltip.
    pub fn is_alive(&self, id: TooltipId) -> bool {
        self.get(id).is_some()
    }

    /// Number of attached tooltips.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Whether no tooltips are attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over attached tooltips.
    pub fn ids(&self) -> impl Iterator<Item = TooltipId> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TooltipId uses 32-bit indices."
            )]
            let idx = i as u32;
            s.as_ref().map(|s| TooltipId::new(idx, s.generation))
        })
    }

    /// Tooltips of `variant` whose `open` flag is set.
    pub fn open_ids(&self, variant: Variant) -> impl Iterator<Item = TooltipId> + '_ {
        self.ids().filter(move |&id| {
            self.get(id)
                .is_some_and(|s| s.config.open && s.config.variant == variant)
        })
    }

    /// The observable `open` flag. `false` for a stale id.
    pub fn is_open(&self, id: TooltipId) -> bool {
        self.get(id).is_some_and(|s| s.config.open)
    }

    /// Lifecycle phase.
    pub fn phase(&self, id: TooltipId) -> Option<Phase> {
        self.get(id).map(|s| s.motion.phase())
    }

    /// Current configuration.
    pub fn config(&self, id: TooltipId) -> Option<&TooltipConfig> {
        self.get(id).map(|s| &s.config)
    }

    /// Last applied position.
    pub fn position(&self, id: TooltipId) -> Option<Position> {
        self.get(id).and_then(|s| s.position)
    }

    /// Whether the pointer is over the popup.
    pub fn is_over_popup(&self, id: TooltipId) -> bool {
        self.get(id).is_some_and(|s| s.machine.over_popup())
    }

    /// Earliest timer deadline across all tooltips.
    pub fn next_deadline(&self) -> Option<u64> {
        self.slots
            .iter()
            .flatten()
            .filter_map(|s| s.machine.next_deadline())
            .min()
    }

    /// Complete the first render.
    ///
    /// An initially open tooltip appears without `open`/`opened` events and with a
    /// zero-length entrance; otherwise the popup is hidden.
    pub fn first_updated(&mut self, id: TooltipId, surface: &mut impl Surface<K>) {
        let Some(inst) = self.get_mut(id) else {
            return;
        };
        if inst.rendered {
            return;
        }
        inst.rendered = true;
        if inst.config.open {
            self.run_open(id, true, surface);
        } else {
            surface.set_hidden(id, true);
        }
    }

    /// Set the `open` flag and run the matching sequence.
    ///
    /// The flag always takes the new value. A listener preventing `open` or
    /// `close` only skips the visual sequence.
    pub fn set_open(&mut self, id: TooltipId, open: bool, surface: &mut impl Surface<K>) {
        let Some(inst) = self.get_mut(id) else {
            return;
        };
        if inst.config.open == open {
            return;
        }
        inst.config.open = open;
        inst.machine.settle(open);
        #[cfg(feature = "tracing")]
        tracing::debug!(?id, open, "tooltip open changed");
        if !inst.rendered {
            return;
        }
        if open {
            self.run_open(id, false, surface);
        } else {
            self.run_close(id, false, surface);
        }
    }

    /// Replace the configuration, reacting to what changed.
    ///
    /// Trigger and delay changes reconfigure the trigger machine; geometry changes
    /// reposition an open popup; an `open` change runs its sequence.
    pub fn set_config(
        &mut self,
        id: TooltipId,
        config: TooltipConfig,
        surface: &mut impl Surface<K>,
    ) {
        let Some(inst) = self.get_mut(id) else {
            return;
        };
        let open = config.open;
        let old = core::mem::replace(&mut inst.config, config);
        inst.config.open = old.open;
        let changed = inst.config.changed_from(&old);
        if changed.iter().any(|p| p.affects_triggers()) {
            inst.machine.configure(&inst.config);
        }
        let geometry = changed.iter().any(|p| p.affects_geometry());
        if geometry && inst.rendered && inst.config.open {
            inst.reposition(id, surface);
        }
        self.set_open(id, open, surface);
    }

    /// Apply one attribute change, as [`TooltipConfig::set_attribute`] then
    /// [`Tooltips::set_config`].
    ///
    /// Returns `Ok(None)` for a stale id.
    pub fn set_attribute(
        &mut self,
        id: TooltipId,
        name: &str,
        value: Option<&str>,
        surface: &mut impl Surface<K>,
    ) -> Result<Option<Property>, AttributeError> {
        let Some(mut config) = self.config(id).cloned() else {
            return Ok(None);
        };
        let property = config.set_attribute(name, value)?;
        self.set_config(id, config, surface);
        Ok(Some(property))
    }

    /// Deliver an input to one tooltip at time `now` (milliseconds).
    ///
    /// Every tooltip's timers due at or before `now` fire first, earliest deadline
    /// first, so an input never overtakes an earlier deadline elsewhere.
    pub fn handle(
        &mut self,
        id: TooltipId,
        input: TooltipInput<'_, K>,
        now: u64,
        surface: &mut impl Surface<K>,
    ) -> Outcome {
        self.advance(now, surface);
        let Some(inst) = self.get_mut(id) else {
            return Outcome::Continue;
        };
        let Some(target) = inst.nodes.target else {
            return Outcome::Continue;
        };
        let open = inst.config.open;
        match input {
            TooltipInput::PointerMove { path } => self.track_hover(id, path, now, surface),
            TooltipInput::PointerExit => self.track_hover(id, &[], now, surface),
            TooltipInput::PointerDown { path, button } => {
                let intent = if Watcher::is_outside(&inst.nodes.root, path) {
                    inst.machine.outside_pointer_down(open)
                } else if path.contains(&target) {
                    inst.machine.target_pointer_down(open, button)
                } else {
                    None
                };
                self.apply(id, intent, surface);
            }
            TooltipInput::Focus => {
                let intent = inst.machine.focus(open);
                self.apply(id, intent, surface);
            }
            TooltipInput::Blur => {
                let intent = inst.machine.blur(open);
                self.apply(id, intent, surface);
            }
            TooltipInput::KeyDown(Key::Escape) if open => {
                let intent = inst.machine.escape(open);
                self.apply(id, intent, surface);
                return Outcome::StopAndConsume;
            }
            TooltipInput::KeyDown(_) => {}
            TooltipInput::Scroll { node } => {
                if inst.watcher.on_scroll(&node, open) {
                    surface.request_frame(id);
                }
            }
            TooltipInput::AnimationFrame => {
                if inst.watcher.take_frame() && open {
                    inst.reposition(id, surface);
                }
            }
            TooltipInput::TargetResized => {
                if open && inst.rendered {
                    inst.reposition(id, surface);
                }
            }
        }
        Outcome::Continue
    }

    /// Deliver a document-level input to every tooltip, returning the strongest outcome.
    pub fn broadcast(
        &mut self,
        input: TooltipInput<'_, K>,
        now: u64,
        surface: &mut impl Surface<K>,
    ) -> Outcome {
        let ids: Vec<_> = self.ids().collect();
        ids.into_iter()
            .map(|id| self.handle(id, input, now, surface))
            .max()
            .unwrap_or(Outcome::Continue)
    }

    /// Fire every timer due at or before `now`, earliest deadline first.
    pub fn advance(&mut self, now: u64, surface: &mut impl Surface<K>) {
        while let Some(id) = self.earliest_due(now) {
            let Some(inst) = self.get_mut(id) else {
                return;
            };
            let intent = inst.machine.fire_due(now, inst.config.open);
            self.apply(id, intent, surface);
        }
    }

    /// Report that the animation carrying `ticket` finished.
    ///
    /// Returns `false` if the ticket is stale, e.g. because a newer sequence
    /// superseded it.
    pub fn finish_animation(
        &mut self,
        id: TooltipId,
        ticket: AnimationTicket,
        surface: &mut impl Surface<K>,
    ) -> bool {
        let Some(inst) = self.get_mut(id) else {
            return false;
        };
        match inst.motion.finish(ticket) {
            Some(Direction::Enter) => {
                if !inst.quiet {
                    surface.dispatch(id, TooltipEvent::new(EventKind::Opened));
                }
            }
            Some(Direction::Exit) => {
                surface.set_hidden(id, true);
                surface.dispatch(id, TooltipEvent::new(EventKind::Closed));
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(?id, ?ticket, "ignoring stale animation ticket");
                return false;
            }
        }
        true
    }

    // --- internals ---

    fn get(&self, id: TooltipId) -> Option<&Instance<K>> {
        self.slots
            .get(id.idx())?
            .as_ref()
            .filter(|s| s.generation == id.generation())
    }

    fn get_mut(&mut self, id: TooltipId) -> Option<&mut Instance<K>> {
        self.slots
            .get_mut(id.idx())?
            .as_mut()
            .filter(|s| s.generation == id.generation())
    }

    // Open by flag, or still on screen after a prevented close.
    fn shown_ids(&self, variant: Variant) -> impl Iterator<Item = TooltipId> + '_ {
        self.ids().filter(move |&id| {
            self.get(id).is_some_and(|s| {
                s.config.variant == variant && (s.config.open || s.motion.phase().is_visible())
            })
        })
    }

    fn earliest_due(&self, now: u64) -> Option<TooltipId> {
        self.ids()
            .filter_map(|id| {
                let at = self.get(id)?.machine.next_deadline()?;
                (at <= now).then_some((at, id))
            })
            .min_by_key(|&(at, _)| at)
            .map(|(_, id)| id)
    }

    fn apply(&mut self, id: TooltipId, intent: Option<Intent>, surface: &mut impl Surface<K>) {
        if let Some(intent) = intent {
            self.set_open(id, intent.is_open(), surface);
        }
    }

    fn track_hover(&mut self, id: TooltipId, path: &[K], now: u64, surface: &mut impl Surface<K>) {
        let Some(inst) = self.get_mut(id) else {
            return;
        };
        let Some(target) = inst.nodes.target else {
            return;
        };
        let crossings = inst.hover.crossings(path, &[target, inst.nodes.popup]);
        for crossing in crossings {
            let Some(inst) = self.get_mut(id) else {
                return;
            };
            let open = inst.config.open;
            let intent = match crossing {
                HoverEvent::Enter(n) if n == target => inst.machine.target_enter(open, now),
                HoverEvent::Leave(n) if n == target => inst.machine.target_leave(open, now),
                HoverEvent::Enter(_) => {
                    inst.machine.popup_enter();
                    None
                }
                HoverEvent::Leave(_) => inst.machine.popup_leave(now),
            };
            self.apply(id, intent, surface);
        }
    }

    fn run_open(&mut self, id: TooltipId, quiet: bool, surface: &mut impl Surface<K>) {
        let Some(inst) = self.get(id) else {
            return;
        };
        if matches!(inst.motion.phase(), Phase::Open | Phase::Opening) {
            return;
        }
        let variant = inst.config.variant;
        let others: Vec<_> = self.shown_ids(variant).filter(|&o| o != id).collect();
        for other in others {
            self.force_close(other, surface);
        }
        if !quiet && !surface.dispatch(id, TooltipEvent::new(EventKind::Open)) {
            #[cfg(feature = "tracing")]
            tracing::debug!(?id, "open prevented by listener");
            return;
        }
        let Some(inst) = self.get_mut(id) else {
            return;
        };
        if inst.motion.phase().is_transient() {
            surface.stop_animations(id);
        }
        surface.set_hidden(id, false);
        inst.reposition(id, surface);
        inst.quiet = quiet;
        let duration = if quiet { 0 } else { MOTION_SHORT_MS };
        let origin = inst.origin();
        let animation = inst.motion.begin(Direction::Enter, duration, origin);
        surface.play(id, &animation);
        if animation.is_instant() {
            self.finish_animation(id, animation.ticket, surface);
        }
    }

    fn run_close(&mut self, id: TooltipId, forced: bool, surface: &mut impl Surface<K>) {
        let Some(inst) = self.get_mut(id) else {
            return;
        };
        if matches!(inst.motion.phase(), Phase::Closed | Phase::Closing) {
            return;
        }
        let event = if forced {
            TooltipEvent::forced_close()
        } else {
            TooltipEvent::new(EventKind::Close)
        };
        if !surface.dispatch(id, event) && event.cancelable {
            #[cfg(feature = "tracing")]
            tracing::debug!(?id, "close prevented by listener");
            return;
        }
        if inst.motion.phase().is_transient() {
            surface.stop_animations(id);
        }
        inst.quiet = false;
        let origin = inst.origin();
        let animation = inst.motion.begin(Direction::Exit, MOTION_SHORT_MS, origin);
        surface.play(id, &animation);
    }

    fn force_close(&mut self, id: TooltipId, surface: &mut impl Surface<K>) {
        let Some(inst) = self.get_mut(id) else {
            return;
        };
        inst.config.open = false;
        inst.machine.settle(false);
        #[cfg(feature = "tracing")]
        tracing::debug!(?id, "tooltip force-closed by another of its variant");
        if inst.rendered {
            self.run_close(id, true, surface);
        }
    }
}
