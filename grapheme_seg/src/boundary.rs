//! The grapheme cluster boundary rules.
//!
//! Rule numbers in comments refer to the
//! [Grapheme Cluster Boundary Rules](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundary_Rules)
//! of UAX #29.

use crate::property::PropertyGroup::{self, *};

/// Where the scan stands relative to an emoji ZWJ sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Pictographic {
    #[default]
    None,
    /// After `ExtendedPictographic Extend*`.
    Run,
    /// After `ExtendedPictographic Extend* ZWJ`.
    PendingJoin,
}

/// The rolling state of a left-to-right scan.
///
/// Holds the group of the previous code point and what the rules need to
/// remember since the last confirmed boundary: how many regional indicators
/// were seen in a row, and whether a ZWJ is waiting to join a pictograph.
///
/// # Examples
///
/// ```
/// use grapheme_seg::{PropertyGroup, ScanState};
///
/// let mut state = ScanState::new();
/// assert!(state.advance(PropertyGroup::CR));
/// assert!(!state.advance(PropertyGroup::LF));
/// assert!(state.advance(PropertyGroup::Other));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    prev: Option<PropertyGroup>,
    regional_indicators: usize,
    pictographic: Pictographic,
}

impl ScanState {
    /// Creates the state for the start of a text.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            prev: None,
            regional_indicators: 0,
            pictographic: Pictographic::None,
        }
    }

    /// Returns the group of the last code point fed to [`Self::advance`].
    #[must_use]
    #[inline]
    pub const fn prev(&self) -> Option<PropertyGroup> {
        self.prev
    }

    /// Returns `true` if a boundary falls before a code point of group `next`.
    #[must_use]
    pub fn boundary_before(&self, next: PropertyGroup) -> bool {
        let Some(prev) = self.prev else {
            // Start of text.
            return true;
        };

        match (prev, next) {
            // GB3
            (CR, LF) => false,
            // GB4
            (CR | LF | Control, _) => true,
            // GB5
            (_, CR | LF | Control) => true,
            // GB6
            (L, L | V | LV | LVT) => false,
            // GB7
            (LV | V, V | T) => false,
            // GB8
            (LVT | T, T) => false,
            // GB9
            (_, Extend | ZWJ) => false,
            // GB9a
            (_, SpacingMark) => false,
            // GB9b
            (Prepend, _) => false,
            // GB11
            (ZWJ, ExtendedPictographic) => self.pictographic != Pictographic::PendingJoin,
            // GB12, GB13
            (RegionalIndicator, RegionalIndicator) => self.regional_indicators % 2 == 0,
            // GB999
            _ => true,
        }
    }

    /// Feeds the next code point's group to the state, returning `true` if a
    /// boundary falls before it.
    pub fn advance(&mut self, next: PropertyGroup) -> bool {
        let boundary = self.boundary_before(next);
        if boundary {
            self.regional_indicators = 0;
            self.pictographic = Pictographic::None;
        }

        self.regional_indicators = match next {
            RegionalIndicator => self.regional_indicators + 1,
            _ => 0,
        };
        self.pictographic = match (next, self.pictographic) {
            (ExtendedPictographic, _) => Pictographic::Run,
            (Extend, Pictographic::Run) => Pictographic::Run,
            (ZWJ, Pictographic::Run) => Pictographic::PendingJoin,
            _ => Pictographic::None,
        };
        self.prev = Some(next);

        boundary
    }
}

/// Returns `true` if a boundary falls between two code points no matter what
/// precedes them, that is, by GB3, GB4 or GB5 alone.
///
/// A scan started at such a position segments the rest of the text exactly
/// like a scan from the beginning would.
#[must_use]
#[inline]
pub fn is_certain_break(before: PropertyGroup, after: PropertyGroup) -> bool {
    match (before, after) {
        (CR, LF) => false,
        (CR | LF | Control, _) | (_, CR | LF | Control) => true,
        _ => false,
    }
}
