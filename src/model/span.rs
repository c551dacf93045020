//! Span-level types.

use serde::{Deserialize, Serialize};

/// Style flag bit set by extractors for bold rendering.
pub const FLAG_BOLD: u32 = 2;

/// A contiguous run of text sharing one font, size and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content, untrimmed as extracted
    pub text: String,

    /// Font size in points
    pub size: f32,

    /// Font name (e.g., "Helvetica-Bold")
    #[serde(rename = "font", default)]
    pub font_name: String,

    /// Style flag bitmask
    #[serde(default)]
    pub flags: u32,
}

impl TextSpan {
    /// Create a new span without style flags.
    pub fn new(text: impl Into<String>, size: f32, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size,
            font_name: font_name.into(),
            flags: 0,
        }
    }

    /// Create a span whose flags mark it as bold.
    pub fn bold(text: impl Into<String>, size: f32, font_name: impl Into<String>) -> Self {
        Self::new(text, size, font_name).with_flags(FLAG_BOLD)
    }

    /// Set the style flag bitmask.
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check if any of the given flag bits are set.
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }
}
