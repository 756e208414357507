// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The declarative indicator component.

use indicator_text::{intrinsic_size_of, IndicatorConfig, IndicatorText, Size};
use iocraft::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared cell the component fills with its constructed widget handle.
///
/// A declaratively placed indicator has no imperative owner; hosts that
/// need to drive it (set progress, stop it, swap the placeholder) pass a
/// slot through props and read the handle back out once the component has
/// been rendered.
#[derive(Clone, Default)]
pub struct IndicatorSlot {
    inner: Arc<Mutex<Option<IndicatorText>>>,
}

impl IndicatorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The constructed widget, once the component has rendered.
    pub fn get(&self) -> Option<IndicatorText> {
        self.inner.lock().clone()
    }

    pub(crate) fn put(&self, widget: IndicatorText) {
        *self.inner.lock() = Some(widget);
    }
}

/// Immutable configuration snapshot for [`ActivityIndicatorText`].
#[derive(Default, Props)]
pub struct ActivityIndicatorTextProps {
    pub config: IndicatorConfig,
    /// Start animating as soon as the widget is constructed.
    pub auto_start: bool,
    /// Receives the widget handle on first render.
    pub slot: Option<IndicatorSlot>,
    /// Clamp the resolved width to this many cells.
    pub max_width: Option<usize>,
    /// Clamp the resolved height to this many cells.
    pub max_height: Option<usize>,
}

/// Size the component resolves to, computed without constructing a widget.
pub fn resolved_size(config: &IndicatorConfig) -> Size {
    intrinsic_size_of(
        &config.placeholder,
        &config.sequence,
        &config.style,
        config.spacing,
    )
}

/// Resolved size clamped to a layout constraint.
pub fn resolved_size_within(config: &IndicatorConfig, max_width: usize, max_height: usize) -> Size {
    let size = resolved_size(config);
    Size {
        width: size.width.min(max_width),
        height: size.height.min(max_height),
    }
}

/// Activity indicator as an iocraft component.
///
/// The widget is constructed once, on first render; the component itself
/// never starts or stops timers beyond honoring `auto_start`. A polling
/// future bumps local state at the tick interval so the host re-renders
/// while the widget animates underneath.
#[component]
pub fn ActivityIndicatorText(
    mut hooks: Hooks,
    props: &ActivityIndicatorTextProps,
) -> impl Into<AnyElement<'static>> {
    let widget_state = hooks.use_state({
        let config = props.config.clone();
        let slot = props.slot.clone();
        let auto_start = props.auto_start;
        move || {
            let widget = IndicatorText::new(config);
            if let Some(slot) = slot {
                slot.put(widget.clone());
            }
            if auto_start {
                widget.start();
            }
            widget
        }
    });
    let widget = (*widget_state.read()).clone();

    // Re-render driver; the widget's own subscription advances the frame.
    let mut refresh = hooks.use_state(|| 0u64);
    let interval = props.config.interval;
    hooks.use_future(async move {
        loop {
            tokio::time::sleep(interval).await;
            let current = *refresh.read();
            refresh.set(current.wrapping_add(1));
        }
    });

    // The View claims the resolved extent so hosts lay the indicator out by
    // its widest frame, not whichever frame happens to be displayed.
    let size = resolved_size_within(
        &props.config,
        props.max_width.unwrap_or(usize::MAX),
        props.max_height.unwrap_or(usize::MAX),
    );
    let rows = widget.display_lines();
    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: size.width as u32,
            height: size.height as u32,
        ) {
            #(rows.into_iter().map(|row| element! {
                Text(content: row, wrap: TextWrap::NoWrap)
            }))
        }
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
