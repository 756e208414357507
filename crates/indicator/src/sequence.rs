// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frame sequencing: how many frames exist and what each one renders as.
//!
//! `count()` and `frame_at()` are deterministic and side-effect-free. Every
//! well-formed sequence has `count >= 1`; out-of-range offsets clamp to the
//! last frame rather than aborting.

use crate::content::Content;
use crate::presets::Preset;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Pure function mapping a frame offset to content.
pub type FrameFn = Arc<dyn Fn(usize) -> Content + Send + Sync>;

/// Formatter producing trailing text from `(offset, last_index)`.
pub type TrailerFn = Arc<dyn Fn(usize, usize) -> String + Send + Sync>;

/// Degenerate sequence configuration.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("frame sequence has no frames")]
    EmptyFrames,
}

/// The rule set determining frame count and per-frame content.
#[derive(Clone)]
pub enum FrameSequence {
    /// An ordered list of frames.
    Fixed(Vec<Content>),
    /// A declared frame count plus a generator function.
    Procedural { count: usize, frame: FrameFn },
    /// One of the built-in styles.
    Preset(Preset),
    /// A character progress bar.
    Progress(ProgressTrack),
}

impl FrameSequence {
    /// Fixed sequence from anything content-like.
    pub fn fixed<I, C>(frames: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Content>,
    {
        FrameSequence::Fixed(frames.into_iter().map(Into::into).collect())
    }

    /// Procedural sequence of `count` frames generated by `frame`.
    pub fn procedural<F>(count: usize, frame: F) -> Self
    where
        F: Fn(usize) -> Content + Send + Sync + 'static,
    {
        FrameSequence::Procedural {
            count,
            frame: Arc::new(frame),
        }
    }

    /// Number of frames in the sequence.
    pub fn count(&self) -> usize {
        match self {
            FrameSequence::Fixed(frames) => frames.len(),
            FrameSequence::Procedural { count, .. } => *count,
            FrameSequence::Preset(preset) => preset.frames().len(),
            FrameSequence::Progress(track) => track.count(),
        }
    }

    /// Content for the frame at `offset`.
    ///
    /// Offsets at or past `count()` clamp to the last frame. A degenerate
    /// empty sequence yields empty content.
    pub fn frame_at(&self, offset: usize) -> Content {
        let count = self.count();
        if count == 0 {
            return Content::default();
        }
        let offset = offset.min(count - 1);
        match self {
            FrameSequence::Fixed(frames) => frames[offset].clone(),
            FrameSequence::Procedural { frame, .. } => frame(offset),
            FrameSequence::Preset(preset) => Content::plain(preset.frames()[offset]),
            FrameSequence::Progress(track) => track.render(offset),
        }
    }

    /// Reject degenerate configurations up front.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.count() == 0 {
            Err(SequenceError::EmptyFrames)
        } else {
            Ok(())
        }
    }
}

impl Default for FrameSequence {
    fn default() -> Self {
        FrameSequence::Preset(Preset::default())
    }
}

impl From<Preset> for FrameSequence {
    fn from(preset: Preset) -> Self {
        FrameSequence::Preset(preset)
    }
}

impl From<ProgressTrack> for FrameSequence {
    fn from(track: ProgressTrack) -> Self {
        FrameSequence::Progress(track)
    }
}

impl fmt::Debug for FrameSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSequence::Fixed(frames) => f.debug_tuple("Fixed").field(frames).finish(),
            FrameSequence::Procedural { count, .. } => f
                .debug_struct("Procedural")
                .field("count", count)
                .finish_non_exhaustive(),
            FrameSequence::Preset(preset) => f.debug_tuple("Preset").field(preset).finish(),
            FrameSequence::Progress(track) => f.debug_tuple("Progress").field(track).finish(),
        }
    }
}

/// Parameters for a character progress bar of `count` positions.
///
/// Positions strictly below the current offset render as `fill`, the rest
/// as `empty`. An optional `lead` glyph marks the current offset; an
/// optional `reach` glyph replaces it at the final position. Optional caps
/// wrap the bar, and an optional trailer formats text after it.
#[derive(Clone)]
pub struct ProgressTrack {
    start: Option<String>,
    fill: String,
    empty: String,
    end: Option<String>,
    lead: Option<String>,
    reach: Option<String>,
    trailer: Option<TrailerFn>,
    count: usize,
}

impl ProgressTrack {
    /// A bare track of `count` positions. `count` is clamped to at least 1.
    pub fn new(fill: impl Into<String>, empty: impl Into<String>, count: usize) -> Self {
        ProgressTrack {
            start: None,
            fill: fill.into(),
            empty: empty.into(),
            end: None,
            lead: None,
            reach: None,
            trailer: None,
            count: count.max(1),
        }
    }

    /// Cap prepended before the bar.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Cap appended after the bar.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Glyph placed at the current offset.
    pub fn with_lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = Some(lead.into());
        self
    }

    /// Glyph replacing the lead once the offset reaches the last position.
    pub fn with_reach(mut self, reach: impl Into<String>) -> Self {
        self.reach = Some(reach.into());
        self
    }

    /// Formatter for trailing text, called with `(offset, last_index)`.
    pub fn with_trailer<F>(mut self, trailer: F) -> Self
    where
        F: Fn(usize, usize) -> String + Send + Sync + 'static,
    {
        self.trailer = Some(Arc::new(trailer));
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Assemble the bar for `offset`. Caller guarantees `offset < count`.
    fn render(&self, offset: usize) -> Content {
        let last = self.count - 1;
        let mut cells: Vec<&str> = Vec::with_capacity(self.count);
        for index in 0..self.count {
            cells.push(if index < offset {
                &self.fill
            } else {
                &self.empty
            });
        }
        if let Some(lead) = &self.lead {
            cells[offset] = lead;
        }
        if offset == last {
            // Reach wins over lead at the final position.
            if let Some(reach) = &self.reach {
                cells[last] = reach;
            }
        }
        let mut bar = String::new();
        if let Some(start) = &self.start {
            bar.push_str(start);
        }
        for cell in cells {
            bar.push_str(cell);
        }
        if let Some(end) = &self.end {
            bar.push_str(end);
        }
        if let Some(trailer) = &self.trailer {
            bar.push_str(&trailer(offset, last));
        }
        Content::Plain(bar)
    }
}

impl fmt::Debug for ProgressTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressTrack")
            .field("start", &self.start)
            .field("fill", &self.fill)
            .field("empty", &self.empty)
            .field("end", &self.end)
            .field("lead", &self.lead)
            .field("reach", &self.reach)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
