// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration (de)serialization uses the attribute tokens.

#![cfg(feature = "serde")]

use serde_json::json;
use understory_placement::{Placement, PlacementRequest, Variant};
use understory_tooltip::TooltipConfig;
use understory_tooltip::trigger::TriggerSet;

#[test]
fn config_serializes_to_attribute_tokens() {
    let config = TooltipConfig::default()
        .variant(Variant::Rich)
        .placement(Placement::TopLeft)
        .headline("Shortcuts");
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["variant"], "rich");
    assert_eq!(value["placement"], "top-left");
    assert_eq!(value["trigger"], "hover focus");
    assert_eq!(value["open-delay"], 150);
    assert_eq!(value["headline"], "Shortcuts");

    let back: TooltipConfig = serde_json::from_value(value).unwrap();
    assert_eq!(back, config);
}

#[test]
fn missing_fields_take_defaults() {
    let config: TooltipConfig =
        serde_json::from_value(json!({ "placement": "auto", "trigger": "click manual" })).unwrap();
    assert_eq!(config.placement, PlacementRequest::Auto);
    assert_eq!(config.trigger, TriggerSet::CLICK | TriggerSet::MANUAL);
    assert_eq!(config.variant, Variant::Plain);
    assert_eq!(config.open_delay, 150);
    assert!(!config.open);
}

#[test]
fn unknown_placement_is_rejected() {
    let err = serde_json::from_value::<TooltipConfig>(json!({ "placement": "nowhere" }));
    assert!(err.is_err());
    let err = serde_json::from_value::<TooltipConfig>(json!({ "variant": "fancy" }));
    assert!(err.is_err());
}
