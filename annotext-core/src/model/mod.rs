mod annotation;
mod document;
mod text_range;

pub use annotation::{SemanticAnnotation, TextSegment, TypographicAnnotation};
pub use document::Document;
pub use text_range::{overlaps, TextRange};
