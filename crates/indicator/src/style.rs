// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text styling via ANSI SGR sequences.
//!
//! Font styles map to SGR parameters through an explicit table rather than
//! deriving escape strings from variant names.

/// ANSI escape sequence helpers (public for reuse)
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";
}

/// Font style of plain content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// SGR parameter string for this style; empty for `Regular`.
    pub fn sgr_params(self) -> &'static str {
        match self {
            FontStyle::Regular => "",
            FontStyle::Bold => "1",
            FontStyle::Italic => "3",
            FontStyle::BoldItalic => "1;3",
        }
    }
}

/// Style applied to `Content::Plain` when rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub font: FontStyle,
    /// 24-bit RGB foreground, or terminal default when `None`.
    pub color: Option<(u8, u8, u8)>,
}

impl TextStyle {
    pub fn new(font: FontStyle) -> Self {
        TextStyle { font, color: None }
    }

    pub fn with_color(mut self, r: u8, g: u8, b: u8) -> Self {
        self.color = Some((r, g, b));
        self
    }

    /// Wrap `text` in this style's escape sequences.
    ///
    /// A default style returns the text unchanged, so unstyled widgets emit
    /// no escape sequences at all.
    pub fn apply(&self, text: &str) -> String {
        let mut prefix = String::new();
        let params = self.font.sgr_params();
        if !params.is_empty() {
            prefix.push_str(&format!("\x1b[{}m", params));
        }
        if let Some((r, g, b)) = self.color {
            prefix.push_str(&escape::fg(r, g, b));
        }
        if prefix.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", prefix, text, escape::RESET)
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
