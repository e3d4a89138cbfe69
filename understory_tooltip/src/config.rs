// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip configuration: the public attributes and their reactive application.
//!
//! [`TooltipConfig`] holds every attribute a tooltip exposes. Hosts either build
//! one with the `#[must_use]` setters or feed raw attribute changes through
//! [`TooltipConfig::set_attribute`], which parses the value and reports which
//! [`Property`] changed so the engine can react.
//!
//! ```
//! use understory_tooltip::config::{Property, TooltipConfig};
//! use understory_tooltip::trigger::TriggerSet;
//! use understory_placement::{Placement, PlacementRequest, Variant};
//!
//! let mut config = TooltipConfig::default().variant(Variant::Rich).open_delay(0);
//! assert_eq!(config.set_attribute("placement", Some("top-left")), Ok(Property::Placement));
//! assert_eq!(config.placement, PlacementRequest::Exact(Placement::TopLeft));
//! assert_eq!(config.set_attribute("trigger", Some("click")), Ok(Property::Trigger));
//! assert_eq!(config.trigger, TriggerSet::CLICK);
//!
//! // Boolean attributes follow presence semantics.
//! config.set_attribute("disabled", Some("")).unwrap();
//! assert!(config.disabled);
//! config.set_attribute("disabled", None).unwrap();
//! assert!(!config.disabled);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use understory_placement::{PlacementRequest, Variant};

use crate::trigger::TriggerSet;

/// Default delay before a hover opens the tooltip, in milliseconds.
pub const DEFAULT_OPEN_DELAY_MS: u64 = 150;

/// Default delay before a hover-out closes the tooltip, in milliseconds.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 150;

/// Close delay used when the configured delay is zero.
pub const MIN_CLOSE_DELAY_MS: u64 = 50;

/// The close delay that actually applies: zero falls back to [`MIN_CLOSE_DELAY_MS`].
pub const fn effective_close_delay(close_delay: u64) -> u64 {
    if close_delay == 0 {
        MIN_CLOSE_DELAY_MS
    } else {
        close_delay
    }
}

/// Attributes of a tooltip instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct TooltipConfig {
    /// Shape of the tooltip.
    pub variant: Variant,
    /// Requested placement relative to the target.
    pub placement: PlacementRequest,
    /// Hover open delay in milliseconds.
    pub open_delay: u64,
    /// Hover close delay in milliseconds; `0` means [`MIN_CLOSE_DELAY_MS`].
    pub close_delay: u64,
    /// Headline text; only rendered for [`Variant::Rich`].
    pub headline: String,
    /// Supporting text.
    pub content: String,
    /// Interactions that open and close the tooltip.
    pub trigger: TriggerSet,
    /// Suppress trigger handling.
    pub disabled: bool,
    /// Whether the tooltip is open.
    pub open: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Plain,
            placement: PlacementRequest::Auto,
            open_delay: DEFAULT_OPEN_DELAY_MS,
            close_delay: DEFAULT_CLOSE_DELAY_MS,
            headline: String::new(),
            content: String::new(),
            trigger: TriggerSet::default(),
            disabled: false,
            open: false,
        }
    }
}

impl TooltipConfig {
    /// Set the variant.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the placement request.
    #[must_use]
    pub fn placement(mut self, placement: impl Into<PlacementRequest>) -> Self {
        self.placement = placement.into();
        self
    }

    /// Set the hover open delay in milliseconds.
    #[must_use]
    pub fn open_delay(mut self, ms: u64) -> Self {
        self.open_delay = ms;
        self
    }

    /// Set the hover close delay in milliseconds.
    #[must_use]
    pub fn close_delay(mut self, ms: u64) -> Self {
        self.close_delay = ms;
        self
    }

    /// Set the headline.
    #[must_use]
    pub fn headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = headline.into();
        self
    }

    /// Set the supporting content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the trigger modes.
    #[must_use]
    pub fn trigger(mut self, trigger: TriggerSet) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the initial open state.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Properties whose value differs between `self` and `old`.
    pub fn changed_from(&self, old: &Self) -> Vec<Property> {
        Property::ALL
            .into_iter()
            .filter(|&p| match p {
                Property::Variant => self.variant != old.variant,
                Property::Placement => self.placement != old.placement,
                Property::OpenDelay => self.open_delay != old.open_delay,
                Property::CloseDelay => self.close_delay != old.close_delay,
                Property::Headline => self.headline != old.headline,
                Property::Content => self.content != old.content,
                Property::Trigger => self.trigger != old.trigger,
                Property::Disabled => self.disabled != old.disabled,
                Property::Open => self.open != old.open,
            })
            .collect()
    }

    /// Apply an attribute change.
    ///
    /// `value` is `None` when the attribute was removed, which restores the
    /// default (or `false` for boolean attributes). Boolean attributes are true
    /// whenever present, whatever their value.
    ///
    /// Unknown trigger tokens are not an error; they are ignored.
    pub fn set_attribute(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Property, AttributeError> {
        let property = match name {
            "variant" => {
                self.variant = match value {
                    Some(v) => v.parse().map_err(|_| AttributeError::invalid("variant"))?,
                    None => Variant::default(),
                };
                Property::Variant
            }
            "placement" => {
                self.placement = match value {
                    Some(v) => v.parse().map_err(|_| AttributeError::invalid("placement"))?,
                    None => PlacementRequest::default(),
                };
                Property::Placement
            }
            "open-delay" => {
                self.open_delay = parse_ms(value, "open-delay", DEFAULT_OPEN_DELAY_MS)?;
                Property::OpenDelay
            }
            "close-delay" => {
                self.close_delay = parse_ms(value, "close-delay", DEFAULT_CLOSE_DELAY_MS)?;
                Property::CloseDelay
            }
            "headline" => {
                self.headline = value.map(ToString::to_string).unwrap_or_default();
                Property::Headline
            }
            "content" => {
                self.content = value.map(ToString::to_string).unwrap_or_default();
                Property::Content
            }
            "trigger" => {
                self.trigger = value.map(TriggerSet::parse).unwrap_or_default();
                #[cfg(feature = "tracing")]
                if let Some(v) = value {
                    for token in TriggerSet::unknown_tokens(v) {
                        tracing::debug!(token, "ignoring unknown trigger token");
                    }
                }
                Property::Trigger
            }
            "disabled" => {
                self.disabled = value.is_some();
                Property::Disabled
            }
            "open" => {
                self.open = value.is_some();
                Property::Open
            }
            other => return Err(AttributeError::Unknown(other.to_string())),
        };
        Ok(property)
    }
}

fn parse_ms(
    value: Option<&str>,
    attribute: &'static str,
    default: u64,
) -> Result<u64, AttributeError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| AttributeError::invalid(attribute)),
    }
}

/// A reactive property, reported by [`TooltipConfig::set_attribute`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Property {
    /// `variant`
    Variant,
    /// `placement`
    Placement,
    /// `open-delay`
    OpenDelay,
    /// `close-delay`
    CloseDelay,
    /// `headline`
    Headline,
    /// `content`
    Content,
    /// `trigger`
    Trigger,
    /// `disabled`
    Disabled,
    /// `open`
    Open,
}

impl Property {
    /// Every property, in attribute order.
    pub const ALL: [Self; 9] = [
        Self::Variant,
        Self::Placement,
        Self::OpenDelay,
        Self::CloseDelay,
        Self::Headline,
        Self::Content,
        Self::Trigger,
        Self::Disabled,
        Self::Open,
    ];

    /// Whether a change to this property reconfigures trigger handling.
    pub const fn affects_triggers(self) -> bool {
        matches!(
            self,
            Self::Trigger | Self::OpenDelay | Self::CloseDelay | Self::Disabled
        )
    }

    /// Whether a change to this property moves or resizes an open popup.
    pub const fn affects_geometry(self) -> bool {
        matches!(
            self,
            Self::Variant | Self::Placement | Self::Headline | Self::Content
        )
    }
}

/// Error applying an attribute.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The attribute name is not one a tooltip exposes.
    #[error("unknown tooltip attribute `{0}`")]
    Unknown(String),
    /// The value could not be parsed for this attribute.
    #[error("invalid value for tooltip attribute `{attribute}`")]
    InvalidValue {
        /// Attribute whose value was rejected.
        attribute: &'static str,
    },
}

impl AttributeError {
    fn invalid(attribute: &'static str) -> Self {
        Self::InvalidValue { attribute }
    }
}
