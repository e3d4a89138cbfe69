// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger state machine: turn interactions and elapsed timers into open/close intents.
//!
//! ## Overview
//!
//! [`TriggerMachine`] interprets one tooltip's interactions against its parsed
//! [`TriggerSet`] and delays. It never flips the `open` flag itself; each handler
//! takes the current flag and returns an [`Intent`] for the caller to apply.
//! After an intent takes effect the caller reports it with [`TriggerMachine::settle`].
//!
//! ## Rules
//!
//! - `focus` opens; `blur` requests a close.
//! - Primary pointer-down on the target toggles under `click`. While open, it is
//!   ignored when `hover` or `focus` is also active, so a tooltip opened by a
//!   different trigger is not closed by the same press that focuses the target.
//! - Entering the target arms the open timer (`open_delay`, synchronous at `0`) and
//!   disarms a pending close. Leaving disarms the open timer and, if open, arms a
//!   close request after the effective close delay.
//! - A close *request* closes at once unless the pointer is over the popup. Then it
//!   waits for the pointer to leave the popup; with `hover` active it waits a
//!   further close delay, otherwise it closes on leave.
//! - Outside pointer-down closes at once, regardless of popup occupancy.
//! - `disabled` suppresses every trigger that would open the tooltip.
//! - `manual` suppresses every automatic trigger, including outside pointer-down.
//!   Escape still dismisses.
//!
//! ```
//! use understory_tooltip::machine::{Intent, TriggerMachine};
//! use understory_tooltip::trigger::TriggerSet;
//!
//! let mut m = TriggerMachine::new(TriggerSet::HOVER, 150, 150, false);
//! assert_eq!(m.target_enter(false, 1_000), None);
//! assert_eq!(m.next_deadline(), Some(1_150));
//! assert_eq!(m.fire_due(1_150, false), Some(Intent::Open));
//! ```

use crate::config::{TooltipConfig, effective_close_delay};
use crate::timer::{CloseAction, Fired, Timers};
use crate::trigger::TriggerSet;
use crate::types::Button;

/// What the machine wants done with the `open` flag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Intent {
    /// Set `open` to `true`.
    Open,
    /// Set `open` to `false`.
    Close,
}

impl Intent {
    /// The `open` value this intent asks for.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Per-tooltip trigger interpretation.
#[derive(Clone, Debug)]
pub struct TriggerMachine {
    triggers: TriggerSet,
    open_delay: u64,
    close_delay: u64,
    disabled: bool,
    timers: Timers,
    over_popup: bool,
    close_deferred: bool,
}

impl TriggerMachine {
    /// Create a machine for the given triggers and delays (milliseconds).
    pub fn new(triggers: TriggerSet, open_delay: u64, close_delay: u64, disabled: bool) -> Self {
        Self {
            triggers,
            open_delay,
            close_delay,
            disabled,
            timers: Timers::new(),
            over_popup: false,
            close_deferred: false,
        }
    }

    /// Create a machine from a configuration.
    pub fn from_config(config: &TooltipConfig) -> Self {
        Self::new(
            config.trigger,
            config.open_delay,
            config.close_delay,
            config.disabled,
        )
    }

    /// Adopt changed triggers, delays, or disabled flag.
    ///
    /// Disabling, or dropping `hover`, disarms a pending open.
    pub fn configure(&mut self, config: &TooltipConfig) {
        self.triggers = config.trigger;
        self.open_delay = config.open_delay;
        self.close_delay = config.close_delay;
        self.disabled = config.disabled;
        if self.disabled || !self.has(TriggerSet::HOVER) {
            self.timers.cancel_open();
        }
    }

    /// The configured trigger set (including `manual`).
    pub fn triggers(&self) -> TriggerSet {
        self.triggers
    }

    /// Whether the pointer is over the popup surface.
    pub fn over_popup(&self) -> bool {
        self.over_popup
    }

    /// Whether a close request is waiting for the pointer to leave the popup.
    pub fn close_deferred(&self) -> bool {
        self.close_deferred
    }

    /// Pending timers.
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn has(&self, mode: TriggerSet) -> bool {
        self.triggers.automatic().contains(mode)
    }

    fn close_delay(&self) -> u64 {
        effective_close_delay(self.close_delay)
    }

    /// The target gained focus.
    pub fn focus(&self, open: bool) -> Option<Intent> {
        (self.has(TriggerSet::FOCUS) && !self.disabled && !open).then_some(Intent::Open)
    }

    /// The target lost focus.
    pub fn blur(&mut self, open: bool) -> Option<Intent> {
        if self.has(TriggerSet::FOCUS) && open {
            self.request_close()
        } else {
            None
        }
    }

    /// A pointer button went down on the target.
    pub fn target_pointer_down(&self, open: bool, button: Button) -> Option<Intent> {
        if button != Button::Primary || self.disabled || !self.has(TriggerSet::CLICK) {
            return None;
        }
        if !open {
            return Some(Intent::Open);
        }
        if self.has(TriggerSet::HOVER) || self.has(TriggerSet::FOCUS) {
            return None;
        }
        Some(Intent::Close)
    }

    /// The pointer entered the target.
    pub fn target_enter(&mut self, open: bool, now: u64) -> Option<Intent> {
        self.timers.cancel_close();
        if !self.has(TriggerSet::HOVER) || self.disabled || open {
            return None;
        }
        if self.open_delay == 0 {
            return Some(Intent::Open);
        }
        self.timers.schedule_open(now, self.open_delay);
        None
    }

    /// The pointer left the target.
    pub fn target_leave(&mut self, open: bool, now: u64) -> Option<Intent> {
        self.timers.cancel_open();
        if self.has(TriggerSet::HOVER) && !self.disabled && open {
            self.timers
                .schedule_close(now, self.close_delay(), CloseAction::Request);
        }
        None
    }

    /// The pointer entered the popup surface.
    ///
    /// Re-entering while a post-leave close is counting down puts the close back
    /// into the deferred state.
    pub fn popup_enter(&mut self) {
        self.over_popup = true;
        if self.timers.close_action() == Some(CloseAction::Close) {
            self.timers.cancel_close();
            self.close_deferred = true;
        }
    }

    /// The pointer left the popup surface.
    pub fn popup_leave(&mut self, now: u64) -> Option<Intent> {
        self.over_popup = false;
        if !core::mem::take(&mut self.close_deferred) {
            return None;
        }
        if self.has(TriggerSet::HOVER) {
            self.timers
                .schedule_close(now, self.close_delay(), CloseAction::Close);
            None
        } else {
            Some(Intent::Close)
        }
    }

    /// Escape was pressed.
    pub fn escape(&mut self, open: bool) -> Option<Intent> {
        if open { self.request_close() } else { None }
    }

    /// A pointer went down outside the tooltip.
    pub fn outside_pointer_down(&self, open: bool) -> Option<Intent> {
        (open && !self.triggers.contains(TriggerSet::MANUAL)).then_some(Intent::Close)
    }

    /// Ask to close, honoring popup occupancy.
    pub fn request_close(&mut self) -> Option<Intent> {
        if self.over_popup {
            self.close_deferred = true;
            None
        } else {
            Some(Intent::Close)
        }
    }

    /// Fire timers due at `now` until one produces an intent.
    ///
    /// Call again after applying the intent; timers that no longer apply to the
    /// current `open` value are dropped silently.
    pub fn fire_due(&mut self, now: u64, open: bool) -> Option<Intent> {
        while let Some(fired) = self.timers.take_due(now) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?fired, now, open, "tooltip timer fired");
            let intent = match fired {
                Fired::Open => {
                    (!open && !self.disabled && self.has(TriggerSet::HOVER)).then_some(Intent::Open)
                }
                Fired::Close(CloseAction::Request) if open => self.request_close(),
                Fired::Close(CloseAction::Close) if open => Some(Intent::Close),
                Fired::Close(_) => None,
            };
            if intent.is_some() {
                return intent;
            }
        }
        None
    }

    /// Record that `open` changed, dropping work that the change superseded.
    pub fn settle(&mut self, open: bool) {
        if open {
            self.timers.cancel_open();
        } else {
            self.timers.cancel_close();
            self.close_deferred = false;
        }
    }

    /// Drop all pending work and occupancy.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.over_popup = false;
        self.close_deferred = false;
    }
}
