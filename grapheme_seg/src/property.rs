//! Utilities for the `PropertyTable` type.
//!
//! *[See also the `PropertyTable` type.](PropertyTable)*

use crate::unicode_data;
use std::{cmp::Ordering, sync::LazyLock};

/// The highest Unicode scalar value a [`PropertyRange`] may cover.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

static UNICODE_TABLE: LazyLock<PropertyTable> = LazyLock::new(unicode_data::load);

/// The category of a code point as far as grapheme cluster boundaries are
/// concerned.
///
/// The values are the **Grapheme_Cluster_Break** property values from
/// [UAX #29](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Break_Property_Values),
/// with `ExtendedPictographic` folded in for code points whose break value is
/// otherwise `Other`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyGroup {
    #[default]
    Other,
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    ExtendedPictographic,
}

impl PropertyGroup {
    /// Returns `true` for `CR`, `LF` and `Control`.
    #[must_use]
    #[inline]
    pub const fn is_control(self) -> bool {
        matches!(self, Self::CR | Self::LF | Self::Control)
    }
}

/// A run of code points sharing one [`PropertyGroup`].
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyRange {
    pub start: u32,
    pub end: u32,
    pub group: PropertyGroup,
}

impl PropertyRange {
    #[must_use]
    #[inline]
    pub const fn new(start: u32, end: u32, group: PropertyGroup) -> Self {
        Self { start, end, group }
    }

    #[must_use]
    #[inline]
    pub const fn contains(&self, code_point: u32) -> bool {
        self.start <= code_point && code_point <= self.end
    }
}

/// Reasons a list of ranges cannot become a [`PropertyTable`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("range #{index} is inverted: U+{start:04X} > U+{end:04X}")]
    InvertedRange { index: usize, start: u32, end: u32 },

    #[error("range #{index} ends at U+{end:04X}, past U+10FFFF")]
    OutOfRange { index: usize, end: u32 },

    #[error("range #{index} overlaps or precedes the range before it")]
    Unsorted { index: usize },
}

/// An immutable, sorted set of code point ranges, each mapped to a
/// [`PropertyGroup`].
///
/// Code points not covered by any range classify as
/// [`PropertyGroup::Other`].
///
/// # Examples
///
/// ```
/// use grapheme_seg::{PropertyGroup, PropertyRange, PropertyTable};
///
/// let table = PropertyTable::from_ranges(vec![
///     PropertyRange::new(0x0A, 0x0A, PropertyGroup::LF),
///     PropertyRange::new(0x0D, 0x0D, PropertyGroup::CR),
/// ])
/// .unwrap();
///
/// assert_eq!(table.classify('\n'), PropertyGroup::LF);
/// assert_eq!(table.classify('x'), PropertyGroup::Other);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTable {
    ranges: Box<[PropertyRange]>,
}

impl PropertyTable {
    /// Returns the table built from the bundled Unicode character database.
    ///
    /// The table is built on first use and lives for the rest of the
    /// process.
    #[must_use]
    #[inline]
    pub fn unicode() -> &'static PropertyTable {
        &UNICODE_TABLE
    }

    /// Builds a table from ranges sorted by their start.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if a range is inverted, reaches past
    /// U+10FFFF, or overlaps the range before it.
    pub fn from_ranges(ranges: Vec<PropertyRange>) -> Result<Self, TableError> {
        if let Err(error) = validate(&ranges) {
            tracing::debug!(message = "rejected grapheme property table", error = %error);
            return Err(error);
        }
        tracing::debug!(
            message = "built grapheme property table",
            ranges = ranges.len()
        );
        Ok(Self {
            ranges: ranges.into_boxed_slice(),
        })
    }

    /// Builds a table from ranges already known to be valid.
    pub(crate) fn from_ranges_unchecked(ranges: Vec<PropertyRange>) -> Self {
        debug_assert_eq!(validate(&ranges), Ok(()));
        Self {
            ranges: ranges.into_boxed_slice(),
        }
    }

    /// Looks up the property group of a code point.
    ///
    /// Runs a binary search over the ranges.
    #[must_use]
    pub fn classify(&self, c: char) -> PropertyGroup {
        let c = c as u32;
        self.ranges
            .binary_search_by(|range| {
                if range.end < c {
                    Ordering::Less
                } else if range.start > c {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .map_or(PropertyGroup::Other, |i| self.ranges[i].group)
    }

    #[must_use]
    #[inline]
    pub fn ranges(&self) -> &[PropertyRange] {
        &self.ranges
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

fn validate(ranges: &[PropertyRange]) -> Result<(), TableError> {
    let mut previous_end = None;
    for (index, range) in ranges.iter().enumerate() {
        if range.start > range.end {
            return Err(TableError::InvertedRange {
                index,
                start: range.start,
                end: range.end,
            });
        }
        if range.end > MAX_CODE_POINT {
            return Err(TableError::OutOfRange {
                index,
                end: range.end,
            });
        }
        if previous_end.is_some_and(|end| range.start <= end) {
            return Err(TableError::Unsorted { index });
        }
        previous_end = Some(range.end);
    }
    Ok(())
}

/// Looks up the property group of a code point in the bundled Unicode table.
///
/// # Examples
///
/// ```
/// use grapheme_seg::{PropertyGroup, classify};
///
/// assert_eq!(classify('\u{0605}'), PropertyGroup::Prepend);
/// assert_eq!(classify('\r'), PropertyGroup::CR);
/// assert_eq!(classify('s'), PropertyGroup::Other);
/// ```
#[must_use]
#[inline]
pub fn classify(c: char) -> PropertyGroup {
    PropertyTable::unicode().classify(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> PropertyTable {
        PropertyTable::from_ranges(vec![
            PropertyRange::new(0x00, 0x09, PropertyGroup::Control),
            PropertyRange::new(0x0A, 0x0A, PropertyGroup::LF),
            PropertyRange::new(0x0B, 0x0C, PropertyGroup::Control),
            PropertyRange::new(0x0D, 0x0D, PropertyGroup::CR),
            PropertyRange::new(0x0300, 0x036F, PropertyGroup::Extend),
        ])
        .unwrap()
    }

    #[test]
    fn test_classify_custom_table() {
        let table = table();
        assert_eq!(table.classify('\0'), PropertyGroup::Control);
        assert_eq!(table.classify('\t'), PropertyGroup::Control);
        assert_eq!(table.classify('\n'), PropertyGroup::LF);
        assert_eq!(table.classify('\r'), PropertyGroup::CR);
        assert_eq!(table.classify('\u{0300}'), PropertyGroup::Extend);
        assert_eq!(table.classify('\u{036F}'), PropertyGroup::Extend);
        assert_eq!(table.classify('\u{0370}'), PropertyGroup::Other);
        assert_eq!(table.classify('a'), PropertyGroup::Other);
    }

    #[test]
    fn test_from_ranges_rejects_invalid() {
        assert_eq!(
            PropertyTable::from_ranges(vec![PropertyRange::new(5, 4, PropertyGroup::L)]),
            Err(TableError::InvertedRange {
                index: 0,
                start: 5,
                end: 4
            })
        );
        assert_eq!(
            PropertyTable::from_ranges(vec![PropertyRange::new(
                0x10FFFF,
                0x110000,
                PropertyGroup::L
            )]),
            Err(TableError::OutOfRange {
                index: 0,
                end: 0x110000
            })
        );
        assert_eq!(
            PropertyTable::from_ranges(vec![
                PropertyRange::new(0, 10, PropertyGroup::L),
                PropertyRange::new(10, 12, PropertyGroup::V),
            ]),
            Err(TableError::Unsorted { index: 1 })
        );
        assert_eq!(
            PropertyTable::from_ranges(vec![
                PropertyRange::new(20, 30, PropertyGroup::L),
                PropertyRange::new(0, 5, PropertyGroup::V),
            ]),
            Err(TableError::Unsorted { index: 1 })
        );
    }

    #[test]
    fn test_empty_table_is_all_other() {
        let table = PropertyTable::from_ranges(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.classify('\r'), PropertyGroup::Other);
    }

    #[test]
    fn test_classify_unicode() {
        assert_eq!(classify('\u{0605}'), PropertyGroup::Prepend);
        assert_eq!(classify('\u{000D}'), PropertyGroup::CR);
        assert_eq!(classify('\u{000A}'), PropertyGroup::LF);
        assert_eq!(classify('\u{0001}'), PropertyGroup::Control);
        assert_eq!(classify('\u{0308}'), PropertyGroup::Extend);
        assert_eq!(classify('\u{1F3FB}'), PropertyGroup::Extend);
        assert_eq!(classify('\u{200D}'), PropertyGroup::ZWJ);
        assert_eq!(classify('\u{1F1E6}'), PropertyGroup::RegionalIndicator);
        assert_eq!(classify('\u{0903}'), PropertyGroup::SpacingMark);
        assert_eq!(classify('\u{1100}'), PropertyGroup::L);
        assert_eq!(classify('\u{1160}'), PropertyGroup::V);
        assert_eq!(classify('\u{11A8}'), PropertyGroup::T);
        assert_eq!(classify('\u{AC00}'), PropertyGroup::LV);
        assert_eq!(classify('\u{AC01}'), PropertyGroup::LVT);
        assert_eq!(classify('\u{1F476}'), PropertyGroup::ExtendedPictographic);
        assert_eq!(classify('\u{00A9}'), PropertyGroup::ExtendedPictographic);
        assert_eq!(classify('\u{0378}'), PropertyGroup::Other);
        assert_eq!(classify('s'), PropertyGroup::Other);
    }

    #[test]
    fn test_unicode_table_is_sorted() {
        let table = PropertyTable::unicode();
        assert!(!table.is_empty());
        assert_eq!(validate(table.ranges()), Ok(()));
        assert!(
            table
                .ranges()
                .iter()
                .all(|range| range.group != PropertyGroup::Other)
        );
    }
}
