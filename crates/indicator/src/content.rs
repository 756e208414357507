// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frame and placeholder content.
//!
//! `Plain` text picks up the widget's [`TextStyle`] when rendered. `Styled`
//! text already carries its own ANSI escape sequences and is emitted
//! verbatim, never re-styled.

use crate::style::TextStyle;

/// A piece of displayable text, immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Plain text, styled at render time.
    Plain(String),
    /// Pre-styled text carrying its own ANSI escape sequences.
    Styled(String),
}

impl Content {
    /// Plain content from anything string-like.
    pub fn plain(text: impl Into<String>) -> Self {
        Content::Plain(text.into())
    }

    /// Pre-styled content, used verbatim.
    pub fn styled(text: impl Into<String>) -> Self {
        Content::Styled(text.into())
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Content::Plain(_))
    }

    /// The underlying text, escapes included for `Styled`.
    pub fn raw(&self) -> &str {
        match self {
            Content::Plain(text) | Content::Styled(text) => text,
        }
    }

    /// Render to the string the host displays.
    ///
    /// Empty plain content renders as an empty string rather than a bare
    /// style prefix/reset pair.
    pub fn rendered(&self, style: &TextStyle) -> String {
        match self {
            Content::Plain(text) if text.is_empty() => String::new(),
            Content::Plain(text) => style.apply(text),
            Content::Styled(text) => text.clone(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Plain(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Plain(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Plain(text)
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
