//! Annotated text to markup.
//!
//! Rendering a segment runs in four passes: collect a tag pair per
//! overlapping annotation, resolve element names, sort the tags, then walk
//! them while copying escaped text between tag positions. Nothing is kept
//! between calls.

mod element;
mod escape;
mod tag;

use std::fmt::Write;

pub use element::{ElementName, KnownElement, Priority};
pub use escape::escape_text;
pub use tag::{collect_tags, compare, sort_tags, OrderClass, Tag};

use crate::model::{SemanticAnnotation, TextSegment, TypographicAnnotation};

/// Render `text`, which starts at absolute offset `text_offset`, with both
/// annotation families
///
/// Never fails: out-of-range annotations are dropped, partial ones are
/// clipped. The output always ends with a single trailing space.
pub fn render(
    text: &str,
    text_offset: usize,
    typography: &[TypographicAnnotation],
    semantics: &[SemanticAnnotation],
) -> String {
    let segment = TextSegment::new(text, text_offset);
    render_segment(&segment, typography, semantics)
}

pub fn render_segment(
    segment: &TextSegment,
    typography: &[TypographicAnnotation],
    semantics: &[SemanticAnnotation],
) -> String {
    let mut tags = collect_tags(segment, typography, semantics);
    sort_tags(&mut tags);
    log::debug!(
        "rendering {} chars at offset {} with {} tags",
        segment.len(),
        segment.offset,
        tags.len()
    );
    assemble(segment, &tags)
}

/// Interleave escaped text runs with sorted tag markup
fn assemble(segment: &TextSegment, tags: &[Tag<'_>]) -> String {
    let text = segment.text.as_str();
    // Byte index of every char position, plus one past the end
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(text.len()))
        .collect();
    let len = boundaries.len() - 1;

    let mut out = String::with_capacity(text.len() * 2 + tags.len() * 32);
    let mut cursor = 0;

    for tag in tags {
        let position = tag.position();
        if position > cursor {
            let run = &text[boundaries[cursor]..boundaries[position]];
            push_run(&mut out, run, segment.offset + cursor);
            cursor = position;
        }
        tag.write_markup(&mut out);
    }

    if cursor < len {
        push_run(&mut out, &text[boundaries[cursor]..], segment.offset + cursor);
    }

    out.push(' ');
    out
}

fn push_run(out: &mut String, run: &str, offset: usize) {
    let _ = write!(out, r#"<span offset="{offset}">{}</span>"#, escape_text(run));
}
