// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cell-based text measurement.
//!
//! Sizes are terminal cells: width is the widest line by display width
//! (ANSI escapes stripped), height is the line count.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Regex for matching ANSI SGR (Select Graphic Rendition) escape sequences.
/// Matches ESC [ followed by semicolon-separated numbers, ending with 'm'.
///
/// This is a compile-time constant regex pattern that is guaranteed to be
/// valid, so the expect is safe.
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[([0-9;]*)m").expect("ANSI regex pattern is invalid")
});

/// A 2D size in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// Remove all SGR escape sequences from `text`.
pub fn strip_ansi(text: &str) -> String {
    ANSI_REGEX.replace_all(text, "").to_string()
}

/// Measure `text` in cells, ignoring ANSI escape sequences.
///
/// Empty (or escape-only) text measures zero in both dimensions.
pub fn measure(text: &str) -> Size {
    let stripped = strip_ansi(text);
    if stripped.is_empty() {
        return Size::ZERO;
    }
    let mut size = Size::ZERO;
    for line in stripped.lines() {
        size.height += 1;
        size.width = size.width.max(UnicodeWidthStr::width(line));
    }
    size
}

#[cfg(test)]
#[path = "measure_tests.rs"]
mod tests;
