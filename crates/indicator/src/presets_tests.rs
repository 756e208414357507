// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]

use super::*;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
#[case(Preset::DotOrbit, 8)]
#[case(Preset::BrailleSpinner, 10)]
#[case(Preset::QuadrantBlocks, 4)]
#[case(Preset::RadarSweep, 8)]
#[case(Preset::ClockFaces, 11)]
#[case(Preset::MoonPhases, 8)]
#[case(Preset::BrailleShade, 8)]
#[case(Preset::Ellipsis, 3)]
fn frame_counts(#[case] preset: Preset, #[case] expected: usize) {
    assert_eq!(preset.frames().len(), expected);
}

#[test]
fn all_lists_every_preset_once() {
    let unique: HashSet<_> = Preset::ALL.iter().collect();
    assert_eq!(unique.len(), Preset::ALL.len());
}

#[test]
fn every_preset_has_at_least_one_frame() {
    for preset in Preset::ALL {
        assert!(!preset.frames().is_empty(), "{:?} has no frames", preset);
    }
}

#[test]
fn names_are_unique() {
    let names: HashSet<_> = Preset::ALL.iter().map(|p| p.name()).collect();
    assert_eq!(names.len(), Preset::ALL.len());
}

#[test]
fn default_is_braille_spinner() {
    assert_eq!(Preset::default(), Preset::BrailleSpinner);
}

#[test]
fn radar_sweep_is_palindromic() {
    let frames = Preset::RadarSweep.frames();
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(*frame, frames[frames.len() - 1 - i]);
    }
}

#[test]
fn radar_sweep_frames_share_width() {
    let frames = Preset::RadarSweep.frames();
    let width = crate::measure::measure(frames[0]).width;
    for frame in frames {
        assert_eq!(crate::measure::measure(frame).width, width);
    }
}

#[test]
fn frames_are_stable_across_calls() {
    for preset in Preset::ALL {
        assert_eq!(preset.frames(), preset.frames());
    }
}
