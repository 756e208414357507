// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relative position of the animated frame against the placeholder.

/// Where the frame label sits relative to the placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FramePlacement {
    LeftTop,
    LeftCenter,
    LeftBottom,
    RightTop,
    RightCenter,
    #[default]
    RightBottom,
}

impl FramePlacement {
    /// Whether the frame label is placed before the placeholder.
    pub fn is_left(self) -> bool {
        matches!(
            self,
            FramePlacement::LeftTop | FramePlacement::LeftCenter | FramePlacement::LeftBottom
        )
    }

    /// Vertical origin of the row's labels, derived from the height of the
    /// first (leftmost) label against the full row height.
    pub fn origin_y(self, first_height: usize, row_height: usize) -> usize {
        match self {
            FramePlacement::LeftTop | FramePlacement::RightTop => 0,
            FramePlacement::LeftCenter | FramePlacement::RightCenter => {
                row_height.saturating_sub(first_height) / 2
            }
            FramePlacement::LeftBottom | FramePlacement::RightBottom => {
                row_height.saturating_sub(first_height)
            }
        }
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
