//! Iterators that drive the boundary rules over a text.

use crate::{Grapheme, PropertyTable, ScanState};
use std::iter::FusedIterator;

/// An iterator over the [`Grapheme`]s of a string slice.
///
/// This struct is created by [`Segmenter::graphemes`], [`graphemes`] and
/// [`Graphemes::iter`]. See their documentation for more.
///
/// The scan is a single left-to-right pass. Cloning the iterator clones its
/// position and state, so both copies continue independently.
///
/// Every yielded [`Grapheme`] is one cluster under the table the iterator
/// was created with.
///
/// [`Segmenter::graphemes`]: crate::Segmenter::graphemes
/// [`graphemes`]: crate::graphemes
/// [`Graphemes::iter`]: crate::Graphemes::iter
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    text: &'a str,
    table: &'a PropertyTable,
    offset: usize,
    state: ScanState,
    /// The code point at `offset` was already fed to `state`.
    primed: bool,
}

impl<'a> Iter<'a> {
    /// Creates new `Iter` over `text`, classifying code points with `table`.
    #[must_use]
    pub fn new(text: &'a str, table: &'a PropertyTable) -> Self {
        Self {
            text,
            table,
            offset: 0,
            state: ScanState::new(),
            primed: false,
        }
    }

    /// Returns the part of the text that has not been yielded yet.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut iter = grapheme_seg::graphemes("y\u{0306}es");
    /// iter.next();
    /// assert_eq!(iter.as_str(), "es");
    /// ```
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// Returns the byte offset at which the next cluster starts.
    #[must_use]
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn next_span(&mut self) -> Option<(usize, usize)> {
        let start = self.offset;
        let mut chars = self.text[start..].chars();
        let first = chars.next()?;
        if !self.primed {
            self.state.advance(self.table.classify(first));
        }

        let mut end = start + first.len_utf8();
        self.primed = false;
        for c in chars {
            if self.state.advance(self.table.classify(c)) {
                self.primed = true;
                break;
            }
            end += c.len_utf8();
        }

        self.offset = end;
        Some((start, end))
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Grapheme;

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.offset;
        (usize::from(remaining > 0), Some(remaining))
    }

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        self.next_span().map(|(start, end)| {
            // SAFETY: The span is non-empty and runs from one boundary of
            // `self.table` to the next.
            unsafe { Grapheme::from_code_points_unchecked(&text[start..end]) }
        })
    }
}

impl FusedIterator for Iter<'_> {}

/// An iterator over the [`Grapheme`]s and their byte offsets of a string
/// slice.
///
/// The iterator yields tuples. The offset is first, the [`Grapheme`] is
/// second.
///
/// This struct is created by [`Segmenter::grapheme_indices`] and
/// [`Graphemes::iter_with_indices`].
///
/// [`Segmenter::grapheme_indices`]: crate::Segmenter::grapheme_indices
/// [`Graphemes::iter_with_indices`]: crate::Graphemes::iter_with_indices
#[derive(Debug, Clone)]
pub struct IterWithIndices<'a> {
    iter: Iter<'a>,
}

impl<'a> IterWithIndices<'a> {
    /// Creates new `IterWithIndices`.
    #[must_use]
    pub fn new(text: &'a str, table: &'a PropertyTable) -> Self {
        Self {
            iter: Iter::new(text, table),
        }
    }

    /// Returns the part of the text that has not been yielded yet.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.iter.as_str()
    }
}

impl<'a> Iterator for IterWithIndices<'a> {
    type Item = (usize, &'a Grapheme);

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.iter.offset();
        self.iter.next().map(|grapheme| (offset, grapheme))
    }
}

impl FusedIterator for IterWithIndices<'_> {}

/// An iterator over every cluster boundary of a string slice, as byte
/// offsets.
///
/// Both ends of the text are boundaries, so a non-empty text yields `0`
/// first and its length last. An empty text yields only `0`.
///
/// This struct is created by [`Segmenter::boundaries`] and
/// [`Graphemes::boundaries`].
///
/// [`Segmenter::boundaries`]: crate::Segmenter::boundaries
/// [`Graphemes::boundaries`]: crate::Graphemes::boundaries
#[derive(Debug, Clone)]
pub struct Boundaries<'a> {
    iter: Iter<'a>,
    done: bool,
}

impl<'a> Boundaries<'a> {
    /// Creates new `Boundaries`.
    #[must_use]
    pub fn new(text: &'a str, table: &'a PropertyTable) -> Self {
        Self {
            iter: Iter::new(text, table),
            done: false,
        }
    }
}

impl Iterator for Boundaries<'_> {
    type Item = usize;

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            let (lower, upper) = self.iter.size_hint();
            (lower + 1, upper.map(|n| n + 1))
        }
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let offset = self.iter.offset();
        if self.iter.next().is_none() {
            self.done = true;
        }
        Some(offset)
    }
}

impl FusedIterator for Boundaries<'_> {}

/// Answers "is this offset a boundary?" for offsets given in increasing
/// order, scanning the text at most once.
#[derive(Debug, Clone)]
pub(crate) struct BoundaryCursor<'a> {
    boundaries: Boundaries<'a>,
    current: Option<usize>,
}

impl<'a> BoundaryCursor<'a> {
    pub(crate) fn new(text: &'a str, table: &'a PropertyTable) -> Self {
        let mut boundaries = Boundaries::new(text, table);
        let current = boundaries.next();
        Self {
            boundaries,
            current,
        }
    }

    /// Offsets must not decrease between calls.
    pub(crate) fn is_boundary(&mut self, offset: usize) -> bool {
        while let Some(current) = self.current {
            if current >= offset {
                return current == offset;
            }
            self.current = self.boundaries.next();
        }
        false
    }
}
