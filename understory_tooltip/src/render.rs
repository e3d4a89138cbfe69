// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which named regions a tooltip renders.
//!
//! ```
//! use understory_placement::Variant;
//! use understory_tooltip::config::TooltipConfig;
//! use understory_tooltip::render::{Regions, Slotted};
//!
//! let plain = TooltipConfig::default().headline("Ignored");
//! let r = Regions::for_config(&plain, Slotted::default());
//! assert!(r.trigger && r.content && !r.headline && !r.action);
//!
//! let rich = plain.variant(Variant::Rich);
//! let r = Regions::for_config(&rich, Slotted { headline: false, action: true });
//! assert!(r.headline && r.action);
//! ```

use understory_placement::Variant;

use crate::config::TooltipConfig;

/// Named regions the host supplied content for.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Slotted {
    /// A `headline` region was supplied.
    pub headline: bool,
    /// An `action` region was supplied.
    pub action: bool,
}

/// Regions to render.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Regions {
    /// Default slot carrying the trigger element.
    pub trigger: bool,
    /// Headline region.
    pub headline: bool,
    /// Supporting content region.
    pub content: bool,
    /// Action region.
    pub action: bool,
}

impl Regions {
    /// Decide regions from the configuration and supplied content.
    ///
    /// Headline and action only render for [`Variant::Rich`]; headline needs
    /// text or slotted content, action needs slotted content.
    pub fn for_config(config: &TooltipConfig, slotted: Slotted) -> Self {
        let rich = config.variant == Variant::Rich;
        Self {
            trigger: true,
            headline: rich && (!config.headline.is_empty() || slotted.headline),
            content: true,
            action: rich && slotted.action,
        }
    }
}
