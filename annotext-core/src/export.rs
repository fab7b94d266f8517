use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::Document;

/// Rendered markup for a document, one entry per segment
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub title: String,
    pub segments: Vec<RenderedSegment>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RenderedSegment {
    pub offset: usize,
    pub markup: String,
}

impl RenderedDocument {
    /// Render every line of `doc` as its own segment
    pub fn by_line(doc: &Document) -> Self {
        let segments = doc
            .segments()
            .into_iter()
            .zip(doc.render_lines())
            .map(|(segment, markup)| RenderedSegment {
                offset: segment.offset,
                markup,
            })
            .collect();
        Self {
            title: doc.title.clone(),
            segments,
        }
    }

    /// Render the whole content of `doc` as one segment
    pub fn whole(doc: &Document) -> Self {
        Self {
            title: doc.title.clone(),
            segments: vec![RenderedSegment {
                offset: 0,
                markup: doc.render(),
            }],
        }
    }
}

/// Serialize document to JSON
pub fn to_json(doc: &Document) -> Result<String> {
    serde_json::to_string_pretty(doc).context("Failed to serialize document")
}

/// Parse a document from JSON
pub fn from_json(json: &str) -> Result<Document> {
    serde_json::from_str(json).context("Failed to parse document JSON")
}

pub fn rendered_to_json(rendered: &RenderedDocument) -> Result<String> {
    serde_json::to_string_pretty(rendered).context("Failed to serialize rendered document")
}
