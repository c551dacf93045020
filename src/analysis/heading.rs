//! Per-span heading classification.

use regex::Regex;

use crate::model::{Heading, HeadingLevel, TextSpan};

use super::OutlineOptions;

/// Leading-token numbering: `3.`, `B.`, `IV.`, `c.`
const NUMBERING_PATTERN: &str = r"^(?:\d+|[A-Z]|[IVXLC]+|[a-z])\.$";

/// Typographic emphasis signals computed for one span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingSignals {
    /// Bold font face or bold style flag
    pub is_bold: bool,
    /// All cased characters uppercase, long enough to be deliberate
    pub is_all_caps: bool,
    /// Starts with a list/section number token
    pub is_numbered: bool,
}

impl HeadingSignals {
    /// Check if any emphasis signal is present.
    pub fn is_emphasized(&self) -> bool {
        self.is_bold || self.is_all_caps || self.is_numbered
    }
}

/// Decides, span by span, whether text is a heading and at what level.
///
/// The only document-wide input is the body size; each decision is
/// otherwise independent of every other span.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    options: OutlineOptions,
    numbering: Regex,
}

impl HeadingClassifier {
    /// Create a classifier with the given options.
    pub fn new(options: OutlineOptions) -> Self {
        Self {
            options,
            numbering: Regex::new(NUMBERING_PATTERN).expect("numbering pattern is valid"),
        }
    }

    /// Get the classifier options.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Classify a span found on `page` against the document body size.
    pub fn classify(&self, span: &TextSpan, page: u32, body_size: f32) -> Option<Heading> {
        let text = span.trimmed();
        if !self.passes_length_filters(text) {
            return None;
        }

        let signals = self.signals(span);
        let level = self.level_for(span.size, body_size, signals)?;
        Some(Heading::new(level, text, page))
    }

    /// Level decision for a span that passed the length filters.
    ///
    /// Size above body decides alone; at or below body size any emphasis
    /// signal yields H3.
    pub fn level_for(
        &self,
        size: f32,
        body_size: f32,
        signals: HeadingSignals,
    ) -> Option<HeadingLevel> {
        if size > body_size {
            if size > body_size + self.options.h1_margin {
                Some(HeadingLevel::H1)
            } else if size > body_size + self.options.h2_margin {
                Some(HeadingLevel::H2)
            } else {
                Some(HeadingLevel::H3)
            }
        } else if signals.is_emphasized() {
            Some(HeadingLevel::H3)
        } else {
            None
        }
    }

    /// Compute emphasis signals for a span.
    pub fn signals(&self, span: &TextSpan) -> HeadingSignals {
        let text = span.trimmed();
        HeadingSignals {
            is_bold: self.is_bold(span),
            is_all_caps: self.is_all_caps(text),
            is_numbered: self.is_numbered(text),
        }
    }

    /// Too short or too long texts are never headings.
    fn passes_length_filters(&self, text: &str) -> bool {
        text.chars().count() >= self.options.min_heading_chars
            && text.split_whitespace().count() <= self.options.max_heading_words
    }

    fn is_bold(&self, span: &TextSpan) -> bool {
        span.font_name.contains(self.options.bold_font_marker.as_str())
            || span.has_flag(self.options.bold_flag)
    }

    fn is_all_caps(&self, text: &str) -> bool {
        let has_upper = text.chars().any(char::is_uppercase);
        let has_lower = text.chars().any(char::is_lowercase);
        has_upper && !has_lower && text.chars().count() >= self.options.min_caps_chars
    }

    /// Check the leading whitespace-separated token against the numbering pattern.
    pub fn is_numbered(&self, text: &str) -> bool {
        text.split_whitespace()
            .next()
            .is_some_and(|token| self.numbering.is_match(token))
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new(OutlineOptions::default())
    }
}
