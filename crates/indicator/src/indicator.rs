// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The activity indicator widget.
//!
//! `IndicatorText` is a cloneable handle to shared widget state: a static
//! placeholder label and an animated frame label fed by a
//! [`FrameSequence`]. While running, a periodic tick subscription advances
//! the displayed frame; setting the step or progress manually stops the
//! timer and takes over. All clones observe the same state, and dropping
//! the last clone releases the tick subscription.

use crate::clock::{Clock, ClockHandle};
use crate::content::Content;
use crate::measure::{self, Size};
use crate::placement::FramePlacement;
use crate::sequence::FrameSequence;
use crate::style::TextStyle;
use crate::ticker::{self, TickSubscription};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Default tick interval (200ms).
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

/// Construction parameters, all with defaults.
#[derive(Clone, Debug)]
pub struct IndicatorConfig {
    pub placeholder: Content,
    pub sequence: FrameSequence,
    pub placement: FramePlacement,
    /// Gap between the two labels, in cells.
    pub spacing: usize,
    pub interval: Duration,
    pub style: TextStyle,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorConfig {
            placeholder: Content::default(),
            sequence: FrameSequence::default(),
            placement: FramePlacement::default(),
            spacing: 0,
            interval: DEFAULT_INTERVAL,
            style: TextStyle::default(),
        }
    }
}

/// A label resolved to a position within the widget's bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedLabel {
    /// Rendered text, escapes included.
    pub text: String,
    /// Horizontal origin in cells.
    pub x: usize,
    /// Vertical origin in cells.
    pub y: usize,
    /// Reserved extent in cells.
    pub size: Size,
}

struct Inner {
    placeholder: Content,
    sequence: FrameSequence,
    placement: FramePlacement,
    spacing: usize,
    interval: Duration,
    style: TextStyle,
    current_step: usize,
    /// Last rendered frame label text.
    frame_text: String,
    epoch_millis: u64,
    clock: ClockHandle,
    timer: Option<TickSubscription>,
    /// Identifies the current subscription; stale tick callbacks compare
    /// and bail.
    generation: u64,
}

/// Cloneable handle to a shared activity indicator.
#[derive(Clone)]
pub struct IndicatorText {
    inner: Arc<Mutex<Inner>>,
}

impl IndicatorText {
    /// Widget driven by the system clock.
    pub fn new(config: IndicatorConfig) -> Self {
        Self::with_clock(config, ClockHandle::system())
    }

    /// Widget driven by an injected clock. The construction instant is
    /// captured here as the epoch all tick math measures from.
    pub fn with_clock(config: IndicatorConfig, clock: ClockHandle) -> Self {
        let epoch_millis = clock.now_millis();
        let frame_text = config.sequence.frame_at(0).rendered(&config.style);
        IndicatorText {
            inner: Arc::new(Mutex::new(Inner {
                placeholder: config.placeholder,
                sequence: config.sequence,
                placement: config.placement,
                spacing: config.spacing,
                interval: config.interval,
                style: config.style,
                current_step: 0,
                frame_text,
                epoch_millis,
                clock,
                timer: None,
                generation: 0,
            })),
        }
    }

    /// Whether a tick subscription is active.
    pub fn is_running(&self) -> bool {
        self.inner.lock().timer.is_some()
    }

    /// Begin animating. If already running, the prior subscription is
    /// released before the new one is created - never two timers at once.
    ///
    /// Must be called from within a tokio runtime context.
    pub fn start(&self) {
        let mut inner = self.inner.lock();
        inner.timer = None;
        inner.generation = inner.generation.wrapping_add(1);
        let generation = inner.generation;
        let weak = Arc::downgrade(&self.inner);
        let clock = inner.clock.clone();
        let interval = inner.interval;
        inner.timer = Some(ticker::subscribe(clock, interval, move || {
            Self::handle_tick(&weak, generation);
        }));
    }

    /// Stop animating. The current frame index is retained, not reset.
    /// No-op when already stopped.
    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        inner.timer = None;
        inner.generation = inner.generation.wrapping_add(1);
    }

    fn handle_tick(weak: &Weak<Mutex<Inner>>, generation: u64) {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut inner = shared.lock();
        // A tick that raced with stop() or a restart is dropped.
        if inner.timer.is_none() || inner.generation != generation {
            return;
        }
        let count = inner.sequence.count();
        if count == 0 {
            return;
        }
        let elapsed =
            Duration::from_millis(inner.clock.now_millis().saturating_sub(inner.epoch_millis));
        let index = frame_index(elapsed, inner.interval, count);
        // Updates the frame directly rather than through set_current_step,
        // which would stop the timer.
        inner.frame_text = inner.sequence.frame_at(index).rendered(&inner.style);
        inner.current_step = index;
    }

    /// The most recently displayed frame index.
    pub fn current_step(&self) -> usize {
        self.inner.lock().current_step
    }

    /// Take manual control of the displayed frame.
    ///
    /// Stops the timer if running. An index at or past the frame count is
    /// recorded but the render is silently skipped.
    pub fn set_current_step(&self, step: usize) {
        let mut inner = self.inner.lock();
        inner.current_step = step;
        if inner.timer.is_some() {
            inner.timer = None;
            inner.generation = inner.generation.wrapping_add(1);
        }
        if step < inner.sequence.count() {
            inner.frame_text = inner.sequence.frame_at(step).rendered(&inner.style);
        }
    }

    /// Map a progress fraction onto the frame range.
    ///
    /// `progress` is clamped to `[0, 1]` and converted via
    /// `floor(progress * (count - 1))`. Delegates to [`set_current_step`],
    /// so this also stops a running timer.
    ///
    /// [`set_current_step`]: IndicatorText::set_current_step
    pub fn set_progress(&self, progress: f64) {
        let count = self.inner.lock().sequence.count();
        if count == 0 {
            return;
        }
        let fraction = progress.clamp(0.0, 1.0);
        let step = (fraction * (count - 1) as f64).floor() as usize;
        self.set_current_step(step);
    }

    pub fn placeholder(&self) -> Content {
        self.inner.lock().placeholder.clone()
    }

    pub fn set_placeholder(&self, placeholder: impl Into<Content>) {
        let mut inner = self.inner.lock();
        inner.placeholder = placeholder.into();
        Self::rerender(&mut inner);
    }

    pub fn sequence(&self) -> FrameSequence {
        self.inner.lock().sequence.clone()
    }

    pub fn set_sequence(&self, sequence: FrameSequence) {
        let mut inner = self.inner.lock();
        inner.sequence = sequence;
        Self::rerender(&mut inner);
    }

    pub fn placement(&self) -> FramePlacement {
        self.inner.lock().placement
    }

    pub fn set_placement(&self, placement: FramePlacement) {
        let mut inner = self.inner.lock();
        inner.placement = placement;
        Self::rerender(&mut inner);
    }

    pub fn spacing(&self) -> usize {
        self.inner.lock().spacing
    }

    pub fn set_spacing(&self, spacing: usize) {
        let mut inner = self.inner.lock();
        inner.spacing = spacing;
        Self::rerender(&mut inner);
    }

    pub fn interval(&self) -> Duration {
        self.inner.lock().interval
    }

    /// Change the tick interval. Takes effect on the next `start()`.
    pub fn set_interval(&self, interval: Duration) {
        self.inner.lock().interval = interval;
    }

    pub fn style(&self) -> TextStyle {
        self.inner.lock().style
    }

    pub fn set_style(&self, style: TextStyle) {
        let mut inner = self.inner.lock();
        inner.style = style;
        Self::rerender(&mut inner);
    }

    /// Re-derive the frame label after a configuration change.
    fn rerender(inner: &mut Inner) {
        if inner.current_step < inner.sequence.count() {
            inner.frame_text = inner
                .sequence
                .frame_at(inner.current_step)
                .rendered(&inner.style);
        }
    }

    /// Size the widget wants: placeholder plus spacing plus the widest
    /// frame. Recomputed on every query.
    pub fn intrinsic_size(&self) -> Size {
        let inner = self.inner.lock();
        intrinsic_size_of(
            &inner.placeholder,
            &inner.sequence,
            &inner.style,
            inner.spacing,
        )
    }

    /// Resolve both labels to positions within the widget's bounds.
    ///
    /// Labels are ordered left to right; the frame label comes first for
    /// left-side placements. The frame label reserves the maximum frame
    /// extent so the layout is stable across frames. Both labels share the
    /// vertical origin derived from the placement and the first label's
    /// height.
    pub fn layout(&self) -> [PlacedLabel; 2] {
        let inner = self.inner.lock();
        let placeholder_text = inner.placeholder.rendered(&inner.style);
        let placeholder_size = measure::measure(&placeholder_text);
        let frame_size = max_frame_size(&inner.sequence, &inner.style);
        let frame_text = inner.frame_text.clone();

        let (first, first_size, second, second_size) = if inner.placement.is_left() {
            (frame_text, frame_size, placeholder_text, placeholder_size)
        } else {
            (placeholder_text, placeholder_size, frame_text, frame_size)
        };
        let row_height = first_size.height.max(second_size.height);
        let y = inner.placement.origin_y(first_size.height, row_height);
        [
            PlacedLabel {
                text: first,
                x: 0,
                y,
                size: first_size,
            },
            PlacedLabel {
                text: second,
                x: first_size.width + inner.spacing,
                y,
                size: second_size,
            },
        ]
    }

    /// Paint the placed labels into per-row display strings.
    ///
    /// Useful for hosts that render plain text lines; escape sequences in
    /// the label texts are preserved.
    pub fn display_lines(&self) -> Vec<String> {
        let labels = self.layout();
        let rows = labels
            .iter()
            .map(|label| label.y + label.size.height)
            .max()
            .unwrap_or(0);
        let mut lines = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut line = String::new();
            let mut cursor = 0usize;
            for label in &labels {
                if label.x > cursor {
                    line.push_str(&" ".repeat(label.x - cursor));
                    cursor = label.x;
                }
                let cell = row
                    .checked_sub(label.y)
                    .and_then(|offset| label.text.lines().nth(offset));
                if let Some(text) = cell {
                    line.push_str(text);
                    cursor += measure::measure(text).width;
                }
                let right_edge = label.x + label.size.width;
                if right_edge > cursor {
                    line.push_str(&" ".repeat(right_edge - cursor));
                    cursor = right_edge;
                }
            }
            while line.ends_with(' ') {
                line.pop();
            }
            lines.push(line);
        }
        lines
    }
}

/// Frame index for a given elapsed time.
///
/// `tick = floor(elapsed / interval) - 1`, wrapped onto `[0, count)` with a
/// non-negative modulo, so the first interval elapse displays frame 0.
pub fn frame_index(elapsed: Duration, interval: Duration, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let interval_ms = (interval.as_millis().max(1)) as i64;
    let tick = (elapsed.as_millis() as i64) / interval_ms - 1;
    tick.rem_euclid(count as i64) as usize
}

/// Intrinsic size for a configuration, without constructing a widget.
///
/// Width is the placeholder width plus spacing plus the widest frame;
/// height is the taller of the placeholder and the tallest frame.
pub fn intrinsic_size_of(
    placeholder: &Content,
    sequence: &FrameSequence,
    style: &TextStyle,
    spacing: usize,
) -> Size {
    let placeholder_size = measure::measure(&placeholder.rendered(style));
    let frame_size = max_frame_size(sequence, style);
    Size {
        width: placeholder_size.width + spacing + frame_size.width,
        height: placeholder_size.height.max(frame_size.height),
    }
}

/// Component-wise maximum extent over every frame in the sequence.
fn max_frame_size(sequence: &FrameSequence, style: &TextStyle) -> Size {
    let mut max = Size::ZERO;
    for offset in 0..sequence.count() {
        max = max.max(measure::measure(&sequence.frame_at(offset).rendered(style)));
    }
    max
}

#[cfg(test)]
#[path = "indicator_tests.rs"]
mod tests;
