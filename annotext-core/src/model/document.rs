use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SemanticAnnotation, TextSegment, TypographicAnnotation};
use crate::render;

/// A text document with both annotation families
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub typography: Vec<TypographicAnnotation>,
    #[serde(default)]
    pub semantics: Vec<SemanticAnnotation>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            typography: Vec::new(),
            semantics: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn add_typography(&mut self, annotation: TypographicAnnotation) {
        self.typography.push(annotation);
        self.updated_at = Utc::now();
    }

    pub fn add_semantic(&mut self, annotation: SemanticAnnotation) {
        self.semantics.push(annotation);
        self.updated_at = Utc::now();
    }

    /// Remove every semantic annotation carrying `id`, returning how many were removed
    pub fn remove_semantic(&mut self, id: &str) -> usize {
        let before = self.semantics.len();
        self.semantics.retain(|a| a.id != id);
        let removed = before - self.semantics.len();
        if removed > 0 {
            self.updated_at = Utc::now();
        }
        removed
    }

    /// One segment per line, offsets in chars
    ///
    /// The line terminator (`\n` or `\r\n`) is excluded from the segment
    /// text but still counted in the offsets of the lines after it.
    pub fn segments(&self) -> Vec<TextSegment> {
        let mut segments = Vec::new();
        let mut offset = 0;
        for line in self.content.split('\n') {
            // Total chars consumed, +1 for the newline
            let consumed = line.chars().count() + 1;
            let text = line.strip_suffix('\r').unwrap_or(line);
            segments.push(TextSegment::new(text, offset));
            offset += consumed;
        }
        segments
    }

    /// Render the whole content as a single segment
    pub fn render(&self) -> String {
        render::render(&self.content, 0, &self.typography, &self.semantics)
    }

    /// Render each line segment independently
    pub fn render_lines(&self) -> Vec<String> {
        self.segments()
            .iter()
            .map(|segment| render::render_segment(segment, &self.typography, &self.semantics))
            .collect()
    }
}
