//! Font statistics for body size detection.

use std::collections::HashMap;

use crate::model::{Document, TextSpan};

/// Typographic signature of a span: size, font name and style flags.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSignature {
    /// Font size in points
    pub size: f32,
    /// Font name
    pub font_name: String,
    /// Style flag bitmask
    pub flags: u32,
}

/// Borrowed hash key for a signature. Sizes compare by bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SignatureKey<'a> {
    size_bits: u32,
    font_name: &'a str,
    flags: u32,
}

impl<'a> SignatureKey<'a> {
    fn of(span: &'a TextSpan) -> Self {
        Self {
            size_bits: span.size.to_bits(),
            font_name: &span.font_name,
            flags: span.flags,
        }
    }

    fn to_signature(self) -> FontSignature {
        FontSignature {
            size: f32::from_bits(self.size_bits),
            font_name: self.font_name.to_string(),
            flags: self.flags,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SignatureCount {
    count: usize,
    /// Rank of the signature's first occurrence in visitation order
    first_seen: usize,
}

/// Whole-document font statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontStatistics {
    /// Most frequent signature; `None` for a document without spans
    pub dominant: Option<FontSignature>,
    /// Number of spans visited
    pub span_count: usize,
    /// Number of distinct signatures observed
    pub signature_count: usize,
}

impl FontStatistics {
    /// Scan every span of the document once and pick the dominant signature.
    ///
    /// The signature with the highest count wins. Among equal counts the one
    /// first encountered in page, block, line, span order wins.
    pub fn collect(doc: &Document) -> Self {
        let mut table: HashMap<SignatureKey<'_>, SignatureCount> = HashMap::new();
        let mut span_count = 0;

        for (_, span) in doc.spans() {
            let first_seen = table.len();
            table
                .entry(SignatureKey::of(span))
                .or_insert(SignatureCount {
                    count: 0,
                    first_seen,
                })
                .count += 1;
            span_count += 1;
        }

        let dominant = table
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.count
                    .cmp(&b.count)
                    .then_with(|| b.first_seen.cmp(&a.first_seen))
            })
            .map(|(key, _)| key.to_signature());

        Self {
            dominant,
            span_count,
            signature_count: table.len(),
        }
    }

    /// Body text font size: the size of the dominant signature.
    pub fn body_size(&self) -> Option<f32> {
        self.dominant.as_ref().map(|sig| sig.size)
    }
}

/// Body text font size of a document, or `None` when it has no spans.
pub fn body_size(doc: &Document) -> Option<f32> {
    FontStatistics::collect(doc).body_size()
}
