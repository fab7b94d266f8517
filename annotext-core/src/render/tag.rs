//! Positional tag records and their ordering.
//!
//! Every annotation overlapping a segment becomes a pair of tags at
//! segment-relative positions. Sorting the pairs with [`compare`] yields the
//! order in which markup is interleaved with text.

use std::cmp::Ordering;
use std::fmt::Write;

use super::element::{ElementName, Priority};
use crate::model::{SemanticAnnotation, TextSegment, TypographicAnnotation};

/// Rank of a tag among tags sharing a position
///
/// Semantic markers always sit inside any typographic element whose
/// boundary coincides with theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OrderClass {
    SemanticEnd = 0,
    TypographicClose = 1,
    TypographicOpen = 2,
    SemanticStart = 3,
}

/// A single piece of markup anchored at a segment-relative char position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<'a> {
    SemanticStart {
        position: usize,
        id: &'a str,
    },
    SemanticEnd {
        position: usize,
        id: &'a str,
    },
    TypographicOpen {
        position: usize,
        end_position: usize,
        name: ElementName,
        /// Absolute start as supplied, before clipping
        start: i64,
        style_id: &'a str,
    },
    TypographicClose {
        position: usize,
        name: ElementName,
    },
}

impl Tag<'_> {
    pub fn position(&self) -> usize {
        match self {
            Tag::SemanticStart { position, .. }
            | Tag::SemanticEnd { position, .. }
            | Tag::TypographicOpen { position, .. }
            | Tag::TypographicClose { position, .. } => *position,
        }
    }

    pub fn order_class(&self) -> OrderClass {
        match self {
            Tag::SemanticStart { .. } => OrderClass::SemanticStart,
            Tag::SemanticEnd { .. } => OrderClass::SemanticEnd,
            Tag::TypographicOpen { .. } => OrderClass::TypographicOpen,
            Tag::TypographicClose { .. } => OrderClass::TypographicClose,
        }
    }

    /// Append this tag's markup to `out`
    pub fn write_markup(&self, out: &mut String) {
        // Writing into a String cannot fail
        let _ = match self {
            Tag::SemanticStart { id, .. } => write!(out, r#"<span data-start="{id}"></span>"#),
            Tag::SemanticEnd { id, .. } => write!(out, r#"<span data-end="{id}"></span>"#),
            Tag::TypographicOpen {
                name,
                start,
                style_id,
                ..
            } => write!(
                out,
                r#"<{} offset="{start}" class="{style_id}">"#,
                name.as_str()
            ),
            Tag::TypographicClose { name, .. } => write!(out, "</{}>", name.as_str()),
        };
    }

    pub fn markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }
}

/// Turn every annotation overlapping `segment` into its pair of tags
///
/// Semantic annotations are collected before typographic ones; tags that
/// compare equal keep this order. Annotations outside the segment are
/// dropped and partially overlapping ones are clipped to its bounds.
pub fn collect_tags<'a>(
    segment: &TextSegment,
    typography: &'a [TypographicAnnotation],
    semantics: &'a [SemanticAnnotation],
) -> Vec<Tag<'a>> {
    let len = segment.len();
    let bounds = segment.range();
    let mut tags = Vec::with_capacity(2 * (typography.len() + semantics.len()));

    for ann in semantics {
        if !ann.range.overlaps(&bounds) {
            log::trace!("dropping semantic annotation {:?} outside {:?}", ann.id, bounds);
            continue;
        }
        let (start, end) = ann.range.clamp_to_segment(segment.offset, len);
        tags.push(Tag::SemanticStart {
            position: start,
            id: &ann.id,
        });
        tags.push(Tag::SemanticEnd {
            position: end,
            id: &ann.id,
        });
    }

    for ann in typography {
        if !ann.range.overlaps(&bounds) {
            log::trace!(
                "dropping typographic annotation {:?} outside {:?}",
                ann.style_id,
                bounds
            );
            continue;
        }
        let name = ElementName::resolve(&ann.style_id);
        let (start, end) = ann.range.clamp_to_segment(segment.offset, len);
        tags.push(Tag::TypographicOpen {
            position: start,
            end_position: end,
            name,
            start: ann.range.start,
            style_id: &ann.style_id,
        });
        tags.push(Tag::TypographicClose {
            position: end,
            name,
        });
    }

    tags
}

/// Total order over tags: position, then [`OrderClass`], then for two
/// typographic opens at the same position, their extent and priority.
///
/// Between opens, the one spanning further opens first so it encloses the
/// shorter one. Equal extents fall back to ascending priority; unequal
/// extents fall back to descending priority, which never decides.
pub fn compare(a: &Tag<'_>, b: &Tag<'_>) -> Ordering {
    a.position()
        .cmp(&b.position())
        .then_with(|| a.order_class().cmp(&b.order_class()))
        .then_with(|| match (a, b) {
            (
                Tag::TypographicOpen {
                    end_position: end_a,
                    name: name_a,
                    ..
                },
                Tag::TypographicOpen {
                    end_position: end_b,
                    name: name_b,
                    ..
                },
            ) => open_tie_break(*end_a, name_a.priority(), *end_b, name_b.priority()),
            _ => Ordering::Equal,
        })
}

fn open_tie_break(
    end_a: usize,
    priority_a: Priority,
    end_b: usize,
    priority_b: Priority,
) -> Ordering {
    if end_a == end_b {
        priority_a.cmp(&priority_b)
    } else {
        end_b.cmp(&end_a).then_with(|| priority_b.cmp(&priority_a))
    }
}

/// Stable sort, so equal tags stay in collection order
pub fn sort_tags(tags: &mut [Tag<'_>]) {
    tags.sort_by(compare);
}
