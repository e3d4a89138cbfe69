// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/close delay timers on a host-supplied millisecond clock.
//!
//! There are two slots. Scheduling into a slot replaces whatever was pending
//! there; the trigger machine cancels the opposite slot itself where the
//! interaction calls for it.

/// What a pending close timer does when it fires.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CloseAction {
    /// Ask to close; still deferred while the pointer is over the popup.
    Request,
    /// Close unconditionally.
    Close,
}

/// A timer that came due.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Fired {
    /// The open delay elapsed.
    Open,
    /// The close delay elapsed.
    Close(CloseAction),
}

/// Pending deadlines, at most one per slot.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Timers {
    open: Option<u64>,
    close: Option<(u64, CloseAction)>,
}

impl Timers {
    /// No pending timers.
    pub const fn new() -> Self {
        Self {
            open: None,
            close: None,
        }
    }

    /// Arm the open slot to fire `delay` ms after `now`.
    pub fn schedule_open(&mut self, now: u64, delay: u64) {
        self.open = Some(now.saturating_add(delay));
    }

    /// Arm the close slot to fire `delay` ms after `now`.
    pub fn schedule_close(&mut self, now: u64, delay: u64, action: CloseAction) {
        self.close = Some((now.saturating_add(delay), action));
    }

    /// Disarm the open slot. Returns `true` if it was armed.
    pub fn cancel_open(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Disarm the close slot. Returns `true` if it was armed.
    pub fn cancel_close(&mut self) -> bool {
        self.close.take().is_some()
    }

    /// Disarm both slots.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Whether the open slot is armed.
    pub fn open_pending(&self) -> bool {
        self.open.is_some()
    }

    /// Whether the close slot is armed.
    pub fn close_pending(&self) -> bool {
        self.close.is_some()
    }

    /// The action of the armed close slot, if any.
    pub fn close_action(&self) -> Option<CloseAction> {
        self.close.map(|(_, action)| action)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.open, self.close.map(|(at, _)| at)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Disarm and return the earliest timer due at `now`, if any.
    ///
    /// Call repeatedly to drain; ties fire the open slot first.
    pub fn take_due(&mut self, now: u64) -> Option<Fired> {
        let open_due = self.open.filter(|&at| at <= now);
        let close_due = self.close.filter(|&(at, _)| at <= now);
        match (open_due, close_due) {
            (Some(o), Some((c, _))) if c < o => self.take_close(),
            (Some(_), _) => {
                self.open = None;
                Some(Fired::Open)
            }
            (None, Some(_)) => self.take_close(),
            (None, None) => None,
        }
    }

    fn take_close(&mut self) -> Option<Fired> {
        self.close.take().map(|(_, action)| Fired::Close(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fires_early() {
        let mut t = Timers::new();
        t.schedule_open(100, 150);
        assert_eq!(t.take_due(249), None);
        assert_eq!(t.next_deadline(), Some(250));
        assert_eq!(t.take_due(250), Some(Fired::Open));
        assert_eq!(t.take_due(1_000), None);
    }

    #[test]
    fn due_timers_drain_in_deadline_order() {
        let mut t = Timers::new();
        t.schedule_open(0, 200);
        t.schedule_close(0, 50, CloseAction::Request);
        assert_eq!(t.next_deadline(), Some(50));
        assert_eq!(t.take_due(300), Some(Fired::Close(CloseAction::Request)));
        assert_eq!(t.take_due(300), Some(Fired::Open));
        assert_eq!(t.take_due(300), None);
    }

    #[test]
    fn rescheduling_replaces_pending_deadline() {
        let mut t = Timers::new();
        t.schedule_close(0, 150, CloseAction::Request);
        t.schedule_close(100, 50, CloseAction::Close);
        assert_eq!(t.take_due(149), None);
        assert_eq!(t.take_due(150), Some(Fired::Close(CloseAction::Close)));
    }

    #[test]
    fn cancel_reports_whether_armed() {
        let mut t = Timers::new();
        assert!(!t.cancel_open());
        t.schedule_open(0, 10);
        assert!(t.open_pending());
        assert!(t.cancel_open());
        assert_eq!(t.next_deadline(), None);
        t.schedule_close(0, 10, CloseAction::Request);
        assert!(t.close_pending());
        assert!(t.cancel_close());
        assert!(!t.close_pending());
    }
}
