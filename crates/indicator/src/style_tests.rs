// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]

use super::*;
use rstest::rstest;

#[rstest]
#[case(FontStyle::Regular, "")]
#[case(FontStyle::Bold, "1")]
#[case(FontStyle::Italic, "3")]
#[case(FontStyle::BoldItalic, "1;3")]
fn sgr_params_mapping(#[case] font: FontStyle, #[case] expected: &str) {
    assert_eq!(font.sgr_params(), expected);
}

#[test]
fn default_style_is_identity() {
    assert_eq!(TextStyle::default().apply("text"), "text");
}

#[test]
fn bold_wraps_in_sgr() {
    let style = TextStyle::new(FontStyle::Bold);
    assert_eq!(style.apply("x"), "\x1b[1mx\x1b[0m");
}

#[test]
fn color_emits_rgb_foreground() {
    let style = TextStyle::default().with_color(215, 119, 87);
    assert_eq!(style.apply("x"), "\x1b[38;2;215;119;87mx\x1b[0m");
}

#[test]
fn font_and_color_compose() {
    let style = TextStyle::new(FontStyle::Italic).with_color(1, 2, 3);
    assert_eq!(style.apply("x"), "\x1b[3m\x1b[38;2;1;2;3mx\x1b[0m");
}
