// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger modes: which interactions open and close a tooltip.
//!
//! The `trigger` attribute is a space-separated token list such as `"hover focus"`.
//! It is parsed once into a [`TriggerSet`] when the configuration changes; event
//! handlers then test set membership instead of re-reading the string.
//!
//! ```
//! use understory_tooltip::trigger::TriggerSet;
//!
//! let t = TriggerSet::parse("click  hover bogus");
//! assert_eq!(t, TriggerSet::CLICK | TriggerSet::HOVER);
//! assert_eq!(TriggerSet::unknown_tokens("click  hover bogus").collect::<Vec<_>>(), ["bogus"]);
//!
//! // `manual` switches every automatic trigger off.
//! let m = TriggerSet::parse("manual hover");
//! assert!(m.automatic().is_empty());
//! ```

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

bitflags::bitflags! {
    /// Set of trigger modes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TriggerSet: u8 {
        /// Pointer-down on the target toggles the tooltip.
        const CLICK  = 0b0000_0001;
        /// Entering the target opens after a delay; leaving closes after a delay.
        const HOVER  = 0b0000_0010;
        /// Focus on the target opens; blur closes.
        const FOCUS  = 0b0000_0100;
        /// Only programmatic `open` changes apply.
        const MANUAL = 0b0000_1000;
    }
}

impl Default for TriggerSet {
    fn default() -> Self {
        Self::HOVER | Self::FOCUS
    }
}

const TOKENS: [(&str, TriggerSet); 4] = [
    ("click", TriggerSet::CLICK),
    ("hover", TriggerSet::HOVER),
    ("focus", TriggerSet::FOCUS),
    ("manual", TriggerSet::MANUAL),
];

fn token(s: &str) -> Option<TriggerSet> {
    TOKENS.iter().find(|(name, _)| *name == s).map(|&(_, t)| t)
}

impl TriggerSet {
    /// Parse a whitespace-separated token list.
    ///
    /// Unknown tokens are ignored; see [`TriggerSet::unknown_tokens`] to report them.
    pub fn parse(s: &str) -> Self {
        s.split_ascii_whitespace()
            .filter_map(token)
            .fold(Self::empty(), |acc, t| acc | t)
    }

    /// Tokens in `s` that name no trigger mode.
    pub fn unknown_tokens(s: &str) -> impl Iterator<Item = &str> {
        s.split_ascii_whitespace().filter(|t| token(t).is_none())
    }

    /// The triggers that act on their own.
    ///
    /// `MANUAL` excludes every other mode, so this is empty whenever it is present.
    pub fn automatic(self) -> Self {
        if self.contains(Self::MANUAL) {
            Self::empty()
        } else {
            self
        }
    }
}

impl FromStr for TriggerSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for TriggerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, t) in TOKENS {
            if self.contains(t) {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TriggerSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TriggerSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokensVisitor;

        impl serde::de::Visitor<'_> for TokensVisitor {
            type Value = TriggerSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a space-separated list of trigger modes")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(TriggerSet::parse(v))
            }
        }

        deserializer.deserialize_str(TokensVisitor)
    }
}
