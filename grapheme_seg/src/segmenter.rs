//! Utilities for the `Segmenter` type.
//!
//! *[See also the `Segmenter` type.](Segmenter)*

use crate::{
    Grapheme, PropertyGroup, PropertyTable,
    boundary::is_certain_break,
    scanner::{Boundaries, BoundaryCursor, Iter, IterWithIndices},
};

/// Cluster-aware string operations bound to one [`PropertyTable`].
///
/// `Segmenter::default()` uses the bundled Unicode table, which is what the
/// crate-level functions such as [`length`](crate::length) and
/// [`slice`](crate::slice) use. Construct one with [`Segmenter::new`] to
/// segment with a different table.
///
/// All offsets are byte offsets into the text, and all indices count
/// clusters.
///
/// # Examples
///
/// ```
/// use grapheme_seg::{PropertyGroup, PropertyRange, PropertyTable, Segmenter};
///
/// // A table that only knows combining diacritical marks.
/// let table = PropertyTable::from_ranges(vec![PropertyRange::new(
///     0x0300,
///     0x036F,
///     PropertyGroup::Extend,
/// )])
/// .unwrap();
/// let segmenter = Segmenter::new(&table);
///
/// assert_eq!(segmenter.length("e\u{0301}\r\n", None), 3);
/// assert_eq!(Segmenter::default().length("e\u{0301}\r\n", None), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'t> {
    table: &'t PropertyTable,
}

impl Default for Segmenter<'static> {
    fn default() -> Self {
        Self::new(PropertyTable::unicode())
    }
}

impl<'t> Segmenter<'t> {
    #[must_use]
    #[inline]
    pub const fn new(table: &'t PropertyTable) -> Self {
        Self { table }
    }

    #[must_use]
    #[inline]
    pub const fn table(&self) -> &'t PropertyTable {
        self.table
    }

    /// Looks up the property group of a code point.
    #[must_use]
    #[inline]
    pub fn classify(&self, c: char) -> PropertyGroup {
        self.table.classify(c)
    }

    /// Returns a lazy iterator over the clusters of `text`.
    ///
    /// Each [`Grapheme`] is one cluster under this segmenter's table.
    #[must_use]
    pub fn graphemes<'a>(&self, text: &'a str) -> Iter<'a>
    where
        't: 'a,
    {
        Iter::new(text, self.table)
    }

    /// Returns a lazy iterator over the clusters of `text` with their byte
    /// offsets.
    #[must_use]
    pub fn grapheme_indices<'a>(&self, text: &'a str) -> IterWithIndices<'a>
    where
        't: 'a,
    {
        IterWithIndices::new(text, self.table)
    }

    /// Returns a lazy iterator over the boundaries of `text`.
    #[must_use]
    pub fn boundaries<'a>(&self, text: &'a str) -> Boundaries<'a>
    where
        't: 'a,
    {
        Boundaries::new(text, self.table)
    }

    /// Returns a lazy iterator over the byte lengths of the clusters of
    /// `text`.
    pub fn grapheme_lengths<'a>(&self, text: &'a str) -> impl Iterator<Item = usize> + use<'a, 't>
    where
        't: 'a,
    {
        self.graphemes(text).map(Grapheme::len)
    }

    /// Counts the clusters of `text`.
    ///
    /// With `until = Some(k)` the scan stops after `k` clusters, so the
    /// result is the smaller of `k` and the real count.
    #[must_use]
    pub fn length(&self, text: &str, until: Option<usize>) -> usize {
        match until {
            Some(limit) => self.graphemes(text).take(limit).count(),
            None => self.graphemes(text).count(),
        }
    }

    /// Returns the clusters `start..end` of `text`.
    ///
    /// `end = None` means through the last cluster. Indices past the cluster
    /// count are clamped to it, and an empty string is returned when
    /// `start >= end`.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str, start: usize, end: Option<usize>) -> &'a str {
        if end.is_some_and(|end| start >= end) {
            return "";
        }

        let mut boundaries = self.boundaries(text);
        let Some(from) = boundaries.nth(start) else {
            return "";
        };
        let to = end
            .and_then(|end| boundaries.nth(end - start - 1))
            .unwrap_or(text.len());
        &text[from..to]
    }

    /// Returns the largest boundary of `text` that is not past `offset`.
    ///
    /// Offsets past the end of the text are clamped to its length, and an
    /// offset inside a UTF-8 sequence resolves to a boundary before it.
    #[must_use]
    pub fn safe_split_index(&self, text: &str, offset: usize) -> usize {
        if offset >= text.len() {
            return text.len();
        }

        let start = self.last_certain_break(text, offset);
        let mut last = start;
        for boundary in self.boundaries(&text[start..]) {
            let boundary = start + boundary;
            if boundary > offset {
                break;
            }
            last = boundary;
        }
        last
    }

    /// Returns `true` if `offset` is a boundary of `text`.
    #[must_use]
    pub fn is_boundary(&self, text: &str, offset: usize) -> bool {
        offset <= text.len() && self.safe_split_index(text, offset) == offset
    }

    /// Returns `true` if `needle` is empty or occurs in `text` as a run of
    /// whole clusters.
    #[must_use]
    pub fn contains(&self, text: &str, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        let mut starts = BoundaryCursor::new(text, self.table);
        let mut ends = BoundaryCursor::new(text, self.table);
        let mut from = 0;
        while let Some(found) = text[from..].find(needle) {
            let start = from + found;
            if starts.is_boundary(start) && ends.is_boundary(start + needle.len()) {
                return true;
            }
            // Occurrences may overlap, so resume one code point further.
            from = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }
        false
    }

    /// Returns `true` if `text` starts with `prefix` and the prefix ends on a
    /// boundary.
    #[must_use]
    pub fn starts_with(&self, text: &str, prefix: &str) -> bool {
        text.starts_with(prefix) && self.is_boundary(text, prefix.len())
    }

    /// Returns `true` if `text` ends with `suffix` and the suffix starts on a
    /// boundary.
    #[must_use]
    pub fn ends_with(&self, text: &str, suffix: &str) -> bool {
        text.ends_with(suffix) && self.is_boundary(text, text.len() - suffix.len())
    }

    /// Walks back from `offset` to the nearest position that is a boundary
    /// regardless of what precedes it.
    ///
    /// `offset` must be less than `text.len()`.
    fn last_certain_break(&self, text: &str, offset: usize) -> usize {
        let mut position = floor_char_boundary(text, offset);
        let Some(after) = text[position..].chars().next() else {
            return position;
        };

        let mut after = self.classify(after);
        for before in text[..position].chars().rev() {
            let before_group = self.classify(before);
            if is_certain_break(before_group, after) {
                return position;
            }
            position -= before.len_utf8();
            after = before_group;
        }
        position
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    (0..=offset.min(text.len()))
        .rev()
        .find(|i| text.is_char_boundary(*i))
        .unwrap_or(0)
}
