// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Markup dialects a highlight can be rendered in.

use super::theme::Rgb;

/// Wraps a run of text in a colour.
pub trait Markup {
    fn paint(&self, out: &mut String, color: Rgb, text: &str);
}

/// `<color=#RRGGBB>text</color>` tags, as understood by rich-text labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct RichText;

impl Markup for RichText {
    fn paint(&self, out: &mut String, color: Rgb, text: &str) {
        out.push_str("<color=");
        out.push_str(&color.to_string());
        out.push('>');
        out.push_str(text);
        out.push_str("</color>");
    }
}

/// 24-bit ANSI foreground colour sequences for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Markup for Ansi {
    fn paint(&self, out: &mut String, color: Rgb, text: &str) {
        out.push_str(&format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b));
        out.push_str(text);
        out.push_str("\x1b[0m");
    }
}

/// No colouring at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Markup for Plain {
    fn paint(&self, out: &mut String, _color: Rgb, text: &str) {
        out.push_str(text);
    }
}
