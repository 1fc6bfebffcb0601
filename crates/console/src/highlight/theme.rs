// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Highlight colours.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 24-bit colour, written `#RRGGBB` in config files and rich text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid colour {0:?}, expected #RRGGBB")]
pub struct InvalidColor(pub String);

impl FromStr for Rgb {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = InvalidColor;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Colour for each lexical region of a console line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightTheme {
    /// Command name found in the registry.
    pub command: Rgb,
    /// Command name with no registered command.
    pub unknown_command: Rgb,
    /// Unquoted argument.
    pub argument: Rgb,
    /// Quoted argument, quotes included.
    pub string: Rgb,
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self {
            command: Rgb::new(0x4E, 0xC9, 0xB0),
            unknown_command: Rgb::new(0xF4, 0x47, 0x47),
            argument: Rgb::new(0xD4, 0xD4, 0xD4),
            string: Rgb::new(0xCE, 0x91, 0x78),
        }
    }
}
