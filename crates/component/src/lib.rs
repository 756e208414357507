// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! iocraft component adapter for the indicator-text widget.
//!
//! Wraps [`indicator_text::IndicatorText`] as a declarative component so an
//! indicator can participate in an iocraft element tree. The component
//! snapshots its configuration as props, constructs the widget when first
//! rendered, and polls at the tick interval to keep the displayed frame
//! current.

mod component;

pub use component::{
    resolved_size, resolved_size_within, ActivityIndicatorText, ActivityIndicatorTextProps,
    IndicatorSlot,
};
