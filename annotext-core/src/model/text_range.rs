use serde::{Deserialize, Serialize};

/// Half-open overlap test on absolute coordinates.
///
/// Ranges that merely touch (`end_b == start_a` or `start_b == end_a`) do not overlap.
pub fn overlaps(start_a: i64, end_a: i64, start_b: i64, end_b: i64) -> bool {
    end_b > start_a && start_b < end_a
}

/// A range of document text by absolute character offsets
///
/// Offsets are signed and left exactly as supplied: a negative or inverted
/// range is kept and clamped at render time rather than rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextRange {
    pub start: i64,
    pub end: i64,
}

impl TextRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Check if this range overlaps another, half-open on both sides
    pub fn overlaps(&self, other: &TextRange) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }

    /// Absolute range covered by a segment of `len` chars starting at `offset`
    pub fn of_segment(offset: usize, len: usize) -> Self {
        let start = to_coordinate(offset);
        Self {
            start,
            end: start.saturating_add(to_coordinate(len)),
        }
    }

    /// Translate into segment-relative positions clamped to `[0, len]`
    pub fn clamp_to_segment(&self, offset: usize, len: usize) -> (usize, usize) {
        let offset = to_coordinate(offset);
        let len = to_coordinate(len);
        // Saturating so coordinates near i64::MIN/MAX still clamp
        let start = self.start.saturating_sub(offset).clamp(0, len);
        let end = self.end.saturating_sub(offset).clamp(0, len);
        (start as usize, end as usize)
    }
}

fn to_coordinate(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 10, 20, false)]
    #[case(0, 10, 9, 20, true)]
    #[case(5, 6, 0, 5, false)]
    #[case(0, 10, 2, 3, true)]
    #[case(0, 0, 0, 10, false)]
    fn overlap_is_half_open_and_symmetric(
        #[case] start_a: i64,
        #[case] end_a: i64,
        #[case] start_b: i64,
        #[case] end_b: i64,
        #[case] expected: bool,
    ) {
        assert_eq!(overlaps(start_a, end_a, start_b, end_b), expected);
        assert_eq!(overlaps(start_b, end_b, start_a, end_a), expected);
    }

    #[test]
    fn clamps_partial_ranges_to_segment() {
        let range = TextRange::new(0, 7);
        assert_eq!(range.clamp_to_segment(5, 5), (0, 2));
        assert_eq!(TextRange::new(-4, 100).clamp_to_segment(0, 3), (0, 3));
    }

    #[test]
    fn extreme_coordinates_saturate_instead_of_overflowing() {
        assert_eq!(TextRange::new(i64::MIN, 2).clamp_to_segment(1, 3), (0, 1));
        assert_eq!(TextRange::new(0, i64::MAX).clamp_to_segment(5, 3), (0, 3));
        assert_eq!(TextRange::new(i64::MIN, i64::MAX).clamp_to_segment(0, 4), (0, 4));
        assert_eq!(TextRange::of_segment(usize::MAX, 10).end, i64::MAX);
    }

    #[test]
    fn inverted_range_clamps_without_panicking() {
        let range = TextRange::new(8, 2);
        assert_eq!(range.clamp_to_segment(0, 5), (5, 2));
    }
}
