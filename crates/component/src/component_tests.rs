// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]

use super::*;
use indicator_text::{FrameSequence, Preset};
use rstest::rstest;

fn config() -> IndicatorConfig {
    IndicatorConfig {
        placeholder: "Loading".into(),
        sequence: FrameSequence::Preset(Preset::Ellipsis),
        spacing: 1,
        ..IndicatorConfig::default()
    }
}

#[test]
fn slot_is_empty_until_filled() {
    let slot = IndicatorSlot::new();
    assert!(slot.get().is_none());
}

#[test]
fn slot_clones_share_the_widget() {
    let slot = IndicatorSlot::new();
    let observer = slot.clone();
    slot.put(IndicatorText::new(config()));
    let widget = observer.get();
    assert!(widget.is_some());
    if let Some(widget) = widget {
        assert_eq!(widget.current_step(), 0);
    }
}

#[test]
fn resolved_size_matches_core_sizing() {
    let config = config();
    // 7 (placeholder) + 1 (spacing) + 3 ("...")
    assert_eq!(
        resolved_size(&config),
        Size {
            width: 11,
            height: 1
        }
    );
    let widget = IndicatorText::new(config.clone());
    assert_eq!(widget.intrinsic_size(), resolved_size(&config));
}

#[rstest]
#[case(8, 10, 8, 1)]
#[case(100, 100, 11, 1)]
#[case(11, 0, 11, 0)]
fn resolved_size_within_clamps_to_constraint(
    #[case] max_width: usize,
    #[case] max_height: usize,
    #[case] width: usize,
    #[case] height: usize,
) {
    let bounded = resolved_size_within(&config(), max_width, max_height);
    assert_eq!(bounded, Size { width, height });
}

#[test]
fn unbounded_constraint_leaves_resolved_size_alone() {
    let config = config();
    assert_eq!(
        resolved_size_within(&config, usize::MAX, usize::MAX),
        resolved_size(&config)
    );
}

#[test]
fn default_props_carry_default_config() {
    let props = ActivityIndicatorTextProps::default();
    assert!(!props.auto_start);
    assert!(props.slot.is_none());
    assert!(props.max_width.is_none());
    assert!(props.max_height.is_none());
    assert_eq!(props.config.spacing, 0);
}
