//! Style identifier to element name resolution.

/// Style identifiers that map to a structural element of the same name
///
/// Declaration order is significant: an element's priority is its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownElement {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Ul,
    Ol,
    Li,
}

impl KnownElement {
    pub fn all() -> &'static [KnownElement] {
        &[
            KnownElement::H1,
            KnownElement::H2,
            KnownElement::H3,
            KnownElement::H4,
            KnownElement::H5,
            KnownElement::H6,
            KnownElement::Ul,
            KnownElement::Ol,
            KnownElement::Li,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KnownElement::H1 => "h1",
            KnownElement::H2 => "h2",
            KnownElement::H3 => "h3",
            KnownElement::H4 => "h4",
            KnownElement::H5 => "h5",
            KnownElement::H6 => "h6",
            KnownElement::Ul => "ul",
            KnownElement::Ol => "ol",
            KnownElement::Li => "li",
        }
    }

    /// Position in the known element table
    pub fn priority(&self) -> usize {
        *self as usize
    }

    /// Exact, case-sensitive match on the style identifier
    pub fn from_style_id(style_id: &str) -> Option<KnownElement> {
        let element = match style_id {
            "h1" => KnownElement::H1,
            "h2" => KnownElement::H2,
            "h3" => KnownElement::H3,
            "h4" => KnownElement::H4,
            "h5" => KnownElement::H5,
            "h6" => KnownElement::H6,
            "ul" => KnownElement::Ul,
            "ol" => KnownElement::Ol,
            "li" => KnownElement::Li,
            _ => return None,
        };
        Some(element)
    }
}

/// Element a typographic annotation renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementName {
    Known(KnownElement),
    /// Any unrecognized style renders as a plain inline element
    Generic,
}

impl ElementName {
    pub const GENERIC_INLINE: &'static str = "span";

    pub fn resolve(style_id: &str) -> Self {
        match KnownElement::from_style_id(style_id) {
            Some(element) => ElementName::Known(element),
            None => ElementName::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementName::Known(element) => element.as_str(),
            ElementName::Generic => Self::GENERIC_INLINE,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            ElementName::Known(element) => Priority::Known(element.priority()),
            ElementName::Generic => Priority::Generic,
        }
    }
}

/// Tie-break rank between typographic opens sharing a position
///
/// Unrecognized styles get their own rank after every table entry instead
/// of sharing index 0 with `h1`. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Known(usize),
    Generic,
}
