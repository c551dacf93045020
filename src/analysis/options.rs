//! Outline inference options and configuration.

use crate::model::FLAG_BOLD;

/// Title returned when neither metadata nor the first page yields one.
pub const DEFAULT_FALLBACK_TITLE: &str = "Untitled Document";

/// Options for outline inference.
///
/// The defaults are the standard thresholds. Setters allow tuning for
/// corpora with unusual typography.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineOptions {
    /// Minimum trimmed character count for a heading
    pub min_heading_chars: usize,

    /// Maximum whitespace-separated token count for a heading
    pub max_heading_words: usize,

    /// A span more than this many points above body size is H1
    pub h1_margin: f32,

    /// A span more than this many points above body size is H2
    pub h2_margin: f32,

    /// Minimum character count for an all-caps span to count as emphasized
    pub min_caps_chars: usize,

    /// Substring in a font name marking bold faces (case-sensitive)
    pub bold_font_marker: String,

    /// Flag bits marking bold rendering
    pub bold_flag: u32,

    /// Title used when no candidate is found
    pub fallback_title: String,
}

impl OutlineOptions {
    /// Create new outline options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum heading length in characters.
    pub fn with_min_heading_chars(mut self, chars: usize) -> Self {
        self.min_heading_chars = chars;
        self
    }

    /// Set the maximum heading length in words.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    /// Set the size margins above body size for H1 and H2.
    pub fn with_margins(mut self, h1: f32, h2: f32) -> Self {
        self.h1_margin = h1;
        self.h2_margin = h2;
        self
    }

    /// Set the minimum length of all-caps emphasis.
    pub fn with_min_caps_chars(mut self, chars: usize) -> Self {
        self.min_caps_chars = chars;
        self
    }

    /// Set the font-name marker for bold faces.
    pub fn with_bold_font_marker(mut self, marker: impl Into<String>) -> Self {
        self.bold_font_marker = marker.into();
        self
    }

    /// Set the flag bits for bold rendering.
    pub fn with_bold_flag(mut self, flag: u32) -> Self {
        self.bold_flag = flag;
        self
    }

    /// Set the fallback title.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            min_heading_chars: 3,
            max_heading_words: 30,
            h1_margin: 5.0,
            h2_margin: 2.0,
            min_caps_chars: 5,
            bold_font_marker: "Bold".to_string(),
            bold_flag: FLAG_BOLD,
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = OutlineOptions::default();
        assert_eq!(options.min_heading_chars, 3);
        assert_eq!(options.max_heading_words, 30);
        assert_eq!(options.h1_margin, 5.0);
        assert_eq!(options.h2_margin, 2.0);
        assert_eq!(options.min_caps_chars, 5);
        assert_eq!(options.bold_font_marker, "Bold");
        assert_eq!(options.bold_flag, 2);
        assert_eq!(options.fallback_title, "Untitled Document");
    }

    #[test]
    fn test_outline_options_builder() {
        let options = OutlineOptions::new()
            .with_min_heading_chars(4)
            .with_max_heading_words(12)
            .with_margins(8.0, 3.0)
            .with_fallback_title("Unknown");

        assert_eq!(options.min_heading_chars, 4);
        assert_eq!(options.max_heading_words, 12);
        assert_eq!(options.h1_margin, 8.0);
        assert_eq!(options.h2_margin, 3.0);
        assert_eq!(options.fallback_title, "Unknown");
    }
}
