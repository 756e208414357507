// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in frame sequence styles.
//!
//! Eight hand-authored fixed lists. Frames are kept as static slices so
//! presets cost nothing to clone and measure.

/// Identifier for one of the built-in animation styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Single braille dot orbiting the cell.
    DotOrbit,
    /// Classic braille spinner.
    #[default]
    BrailleSpinner,
    /// Quadrant block rotating corner to corner.
    QuadrantBlocks,
    /// Globe marker swept across a fixed-width line, forward then back.
    RadarSweep,
    /// Clock faces advancing around the dial.
    ClockFaces,
    /// Moon phases waning then waxing.
    MoonPhases,
    /// Braille shade rotating through seven-dot patterns.
    BrailleShade,
    /// Growing ellipsis.
    Ellipsis,
}

const DOT_ORBIT: &[&str] = &["⠈", "⠐", "⠠", "⢀", "⡀", "⠄", "⠂", "⠁"];
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const QUADRANT_BLOCKS: &[&str] = &["▖", "▘", "▝", "▗"];
// Marker at positions 0..=3 forward, then 3..=0 back; the endpoint frames
// repeat so the sweep pauses at each edge.
const RADAR_SWEEP: &[&str] = &[
    "🌐   ", " 🌐  ", "  🌐 ", "   🌐", "   🌐", "  🌐 ", " 🌐  ", "🌐   ",
];
const CLOCK_FACES: &[&str] = &[
    "🕛", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚",
];
const MOON_PHASES: &[&str] = &["🌕", "🌖", "🌗", "🌘", "🌑", "🌒", "🌓", "🌔"];
const BRAILLE_SHADE: &[&str] = &["⣷", "⣯", "⣟", "⡿", "⢿", "⣻", "⣽", "⣾"];
const ELLIPSIS: &[&str] = &[".", "..", "..."];

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 8] = [
        Preset::DotOrbit,
        Preset::BrailleSpinner,
        Preset::QuadrantBlocks,
        Preset::RadarSweep,
        Preset::ClockFaces,
        Preset::MoonPhases,
        Preset::BrailleShade,
        Preset::Ellipsis,
    ];

    /// The fixed frame list for this preset.
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Preset::DotOrbit => DOT_ORBIT,
            Preset::BrailleSpinner => BRAILLE_SPINNER,
            Preset::QuadrantBlocks => QUADRANT_BLOCKS,
            Preset::RadarSweep => RADAR_SWEEP,
            Preset::ClockFaces => CLOCK_FACES,
            Preset::MoonPhases => MOON_PHASES,
            Preset::BrailleShade => BRAILLE_SHADE,
            Preset::Ellipsis => ELLIPSIS,
        }
    }

    /// Stable display name for this preset.
    pub fn name(self) -> &'static str {
        match self {
            Preset::DotOrbit => "dot-orbit",
            Preset::BrailleSpinner => "braille-spinner",
            Preset::QuadrantBlocks => "quadrant-blocks",
            Preset::RadarSweep => "radar-sweep",
            Preset::ClockFaces => "clock-faces",
            Preset::MoonPhases => "moon-phases",
            Preset::BrailleShade => "braille-shade",
            Preset::Ellipsis => "ellipsis",
        }
    }
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
