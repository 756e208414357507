// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Self-animating "activity indicator text" widget for terminal UIs.
//!
//! An indicator is a static placeholder label paired with an animated frame
//! label that cycles through a [`FrameSequence`]: a fixed list of glyphs, a
//! procedural generator, one of eight built-in [`Preset`] styles, or a
//! character [`ProgressTrack`]. The widget owns its tick subscription and
//! advances the displayed frame while running; setting the step or progress
//! manually stops the animation and takes over.
//!
//! ```no_run
//! use indicator_text::{IndicatorConfig, IndicatorText, Preset};
//!
//! # async fn demo() {
//! let indicator = IndicatorText::new(IndicatorConfig {
//!     placeholder: "Loading".into(),
//!     sequence: Preset::BrailleSpinner.into(),
//!     ..IndicatorConfig::default()
//! });
//! indicator.start();
//! # }
//! ```

pub mod clock;
pub mod content;
pub mod indicator;
pub mod measure;
pub mod placement;
pub mod presets;
pub mod sequence;
pub mod style;
pub mod ticker;

pub use clock::{Clock, ClockHandle, FakeClock, SystemClock};
pub use content::Content;
pub use indicator::{
    frame_index, intrinsic_size_of, IndicatorConfig, IndicatorText, PlacedLabel, DEFAULT_INTERVAL,
};
pub use measure::{measure, strip_ansi, Size};
pub use placement::FramePlacement;
pub use presets::Preset;
pub use sequence::{FrameSequence, ProgressTrack, SequenceError};
pub use style::{FontStyle, TextStyle};
pub use ticker::TickSubscription;
