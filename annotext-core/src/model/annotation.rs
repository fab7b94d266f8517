use serde::{Deserialize, Serialize};

use super::TextRange;

/// A styling region, rendered as a (possibly nested) element
///
/// Typographic annotations are expected to nest. Overlapping regions that
/// do not nest produce unbalanced markup; keeping them apart is up to the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypographicAnnotation {
    #[serde(flatten)]
    pub range: TextRange,
    pub style_id: String,
}

impl TypographicAnnotation {
    pub fn new(start: i64, end: i64, style_id: impl Into<String>) -> Self {
        Self {
            range: TextRange::new(start, end),
            style_id: style_id.into(),
        }
    }
}

/// A named point pair, rendered as two zero-width boundary markers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SemanticAnnotation {
    #[serde(flatten)]
    pub range: TextRange,
    pub id: String,
}

impl SemanticAnnotation {
    pub fn new(start: i64, end: i64, id: impl Into<String>) -> Self {
        Self {
            range: TextRange::new(start, end),
            id: id.into(),
        }
    }
}

/// A fragment of a larger document plus the absolute offset of its first char
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub offset: usize,
}

impl TextSegment {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    /// Length in chars, the unit every offset is measured in
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Absolute range this segment covers in the parent document
    pub fn range(&self) -> TextRange {
        TextRange::of_segment(self.offset, self.len())
    }
}
