// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation sequencing at the host boundary.
//!
//! The engine does not run animations. It describes them as [`Animation`] values,
//! hands them to the host, and waits for the host to report completion with the
//! [`AnimationTicket`] it was given. A [`Sequencer`] tracks the one sequence a
//! tooltip may have in flight and the [`Phase`] it implies.
//!
//! ```
//! use understory_placement::TransformOrigin;
//! use understory_tooltip::motion::{Direction, MOTION_SHORT_MS, Phase, Sequencer};
//!
//! let mut seq = Sequencer::new();
//! let enter = seq.begin(Direction::Enter, MOTION_SHORT_MS, TransformOrigin::CENTER);
//! assert_eq!(seq.phase(), Phase::Opening);
//!
//! // A newer sequence supersedes the first; its ticket goes stale.
//! let exit = seq.begin(Direction::Exit, MOTION_SHORT_MS, TransformOrigin::CENTER);
//! assert_eq!(seq.finish(enter.ticket), None);
//! assert_eq!(seq.finish(exit.ticket), Some(Direction::Exit));
//! assert_eq!(seq.phase(), Phase::Closed);
//! ```

use understory_placement::TransformOrigin;

/// Duration of the short motion token, in milliseconds.
pub const MOTION_SHORT_MS: u64 = 150;

/// Scale a popup starts its entrance from (and ends its exit at).
pub const HIDDEN_SCALE: f64 = 0.8;

/// Lifecycle phase of a tooltip.
///
/// `Opening` and `Closing` last while an animation is in flight; the observable
/// `open` flag is already `true` or `false` during them.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Hidden.
    #[default]
    Closed,
    /// Entrance animation running.
    Opening,
    /// Visible and settled.
    Open,
    /// Exit animation running.
    Closing,
}

impl Phase {
    /// Whether an animation is in flight.
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    /// Whether the popup is shown in this phase.
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Which way an animation runs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Scale and fade in.
    Enter,
    /// Scale and fade out.
    Exit,
}

/// Identifies one animation sequence. Completion reports carrying an older
/// ticket are ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct AnimationTicket(u32);

/// Visual state at one end of an animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Keyframe {
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Uniform scale about the transform origin.
    pub scale: f64,
}

impl Keyframe {
    /// Fully shown.
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };
    /// Fully hidden.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        scale: HIDDEN_SCALE,
    };

    /// Linear interpolation towards `other` at `t` in `0.0..=1.0`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

/// Timing curve.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Easing {
    /// Material standard easing.
    #[default]
    Standard,
}

impl Easing {
    /// Cubic Bézier control points `(x1, y1, x2, y2)`.
    pub const fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Standard => (0.2, 0.0, 0.0, 1.0),
        }
    }

    /// CSS `<easing-function>` text.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Standard => "cubic-bezier(0.2, 0, 0, 1)",
        }
    }
}

/// An animation the host should play on the popup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animation {
    /// Entrance or exit.
    pub direction: Direction,
    /// Length in milliseconds; `0` means jump to the end state.
    pub duration_ms: u64,
    /// Timing curve.
    pub easing: Easing,
    /// Anchor for the scale transform.
    pub origin: TransformOrigin,
    /// Ticket to hand back on completion.
    pub ticket: AnimationTicket,
}

impl Animation {
    /// Start and end keyframes.
    pub const fn keyframes(&self) -> [Keyframe; 2] {
        match self.direction {
            Direction::Enter => [Keyframe::HIDDEN, Keyframe::SHOWN],
            Direction::Exit => [Keyframe::SHOWN, Keyframe::HIDDEN],
        }
    }

    /// Whether the animation finishes without any frames.
    pub const fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

/// Tracks the in-flight animation of one tooltip.
#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    phase: Phase,
    issued: u32,
    in_flight: Option<(AnimationTicket, Direction)>,
}

impl Sequencer {
    /// A closed tooltip with nothing in flight.
    pub const fn new() -> Self {
        Self {
            phase: Phase::Closed,
            issued: 0,
            in_flight: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticket of the in-flight animation, if any.
    pub fn in_flight(&self) -> Option<AnimationTicket> {
        self.in_flight.map(|(ticket, _)| ticket)
    }

    /// Start a new sequence, superseding any in flight.
    ///
    /// The caller stops the previous animation on the host when
    /// [`Phase::is_transient`] was true before this call.
    pub fn begin(
        &mut self,
        direction: Direction,
        duration_ms: u64,
        origin: TransformOrigin,
    ) -> Animation {
        self.issued = self.issued.wrapping_add(1);
        let ticket = AnimationTicket(self.issued);
        self.in_flight = Some((ticket, direction));
        self.phase = match direction {
            Direction::Enter => Phase::Opening,
            Direction::Exit => Phase::Closing,
        };
        Animation {
            direction,
            duration_ms,
            easing: Easing::Standard,
            origin,
            ticket,
        }
    }

    /// Settle the sequence identified by `ticket`.
    ///
    /// Returns the finished direction, or `None` for a stale or unknown ticket.
    pub fn finish(&mut self, ticket: AnimationTicket) -> Option<Direction> {
        match self.in_flight {
            Some((current, direction)) if current == ticket => {
                self.in_flight = None;
                self.phase = match direction {
                    Direction::Enter => Phase::Open,
                    Direction::Exit => Phase::Closed,
                };
                Some(direction)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_and_finish_drive_phase() {
        let mut s = Sequencer::new();
        assert_eq!(s.phase(), Phase::Closed);
        let a = s.begin(Direction::Enter, MOTION_SHORT_MS, TransformOrigin::CENTER);
        assert_eq!(s.phase(), Phase::Opening);
        assert!(s.phase().is_transient());
        assert!(s.phase().is_visible());
        assert_eq!(s.in_flight(), Some(a.ticket));
        assert_eq!(s.finish(a.ticket), Some(Direction::Enter));
        assert_eq!(s.phase(), Phase::Open);
        assert_eq!(s.in_flight(), None);
        // A second report for the same ticket is ignored.
        assert_eq!(s.finish(a.ticket), None);
    }

    #[test]
    fn tickets_are_fresh_per_sequence() {
        let mut s = Sequencer::new();
        let a = s.begin(Direction::Enter, 0, TransformOrigin::CENTER);
        let b = s.begin(Direction::Enter, 0, TransformOrigin::CENTER);
        assert_ne!(a.ticket, b.ticket);
        assert!(b.ticket > a.ticket);
    }

    #[test]
    fn keyframes_reverse_for_exit() {
        let mut s = Sequencer::new();
        let enter = s.begin(Direction::Enter, 150, TransformOrigin::CENTER);
        let exit = s.begin(Direction::Exit, 150, TransformOrigin::CENTER);
        assert_eq!(enter.keyframes(), [Keyframe::HIDDEN, Keyframe::SHOWN]);
        assert_eq!(exit.keyframes(), [Keyframe::SHOWN, Keyframe::HIDDEN]);
        assert_eq!(enter.easing.as_css(), "cubic-bezier(0.2, 0, 0, 1)");
        assert_eq!(enter.easing.control_points(), (0.2, 0.0, 0.0, 1.0));
        assert!(!enter.is_instant());
    }

    #[test]
    fn keyframe_lerp_hits_endpoints() {
        let mid = Keyframe::HIDDEN.lerp(Keyframe::SHOWN, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert!((mid.scale - 0.9).abs() < 1e-9);
        assert_eq!(Keyframe::HIDDEN.lerp(Keyframe::SHOWN, 1.0), Keyframe::SHOWN);
    }
}
