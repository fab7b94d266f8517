//! Annotext Core - annotated text to markup
//!
//! Renders a text fragment together with two independent annotation
//! families into a single markup string. Typographic annotations become
//! nested elements; semantic annotations become pairs of empty boundary
//! markers that a layout layer can look up later.

pub mod export;
pub mod model;
pub mod render;

pub use export::{from_json, rendered_to_json, to_json, RenderedDocument, RenderedSegment};
pub use model::{
    overlaps, Document, SemanticAnnotation, TextRange, TextSegment, TypographicAnnotation,
};
pub use render::{escape_text, render, render_segment};
