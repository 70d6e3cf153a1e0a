#![doc = include_str!("../README.md")]

pub mod boundary;
pub mod grapheme;
pub mod grapheme_owned;
pub mod graphemes;
pub mod property;
pub mod scanner;
pub mod segmenter;
mod unicode_data;

pub use boundary::{ScanState, is_certain_break};
pub use grapheme::Grapheme;
pub use grapheme_owned::GraphemeOwned;
pub use graphemes::Graphemes;
pub use property::{
    MAX_CODE_POINT, PropertyGroup, PropertyRange, PropertyTable, TableError, classify,
};
pub use scanner::{Boundaries, Iter, IterWithIndices};
pub use segmenter::Segmenter;

/// Commonly used functions, traits and types.
pub mod prelude {
    pub use super::{Grapheme, GraphemeOwned, Graphemes, Segmenter};
}

/// Returns a lazy iterator over the clusters of `text`.
///
/// # Examples
///
/// ```
/// let clusters: Vec<&str> = grapheme_seg::graphemes("a\u{0310}e\u{0301}o\u{0308}\u{0332}")
///     .map(|g| g.as_str())
///     .collect();
///
/// assert_eq!(clusters, ["a\u{0310}", "e\u{0301}", "o\u{0308}\u{0332}"]);
/// ```
#[must_use]
#[inline]
pub fn graphemes(text: &str) -> Iter<'_> {
    Segmenter::default().graphemes(text)
}

/// Returns a lazy iterator over the clusters of `text` with their byte
/// offsets.
///
/// ```
/// let pairs: Vec<(usize, &str)> = grapheme_seg::grapheme_indices("a\r\nb")
///     .map(|(i, g)| (i, g.as_str()))
///     .collect();
///
/// assert_eq!(pairs, [(0, "a"), (1, "\r\n"), (3, "b")]);
/// ```
#[must_use]
#[inline]
pub fn grapheme_indices(text: &str) -> IterWithIndices<'_> {
    Segmenter::default().grapheme_indices(text)
}

/// Returns a lazy iterator over the byte lengths of the clusters of `text`.
///
/// ```
/// let lengths: Vec<usize> = grapheme_seg::grapheme_lengths("\u{1F1EB}\u{1F1F7}!").collect();
/// assert_eq!(lengths, [8, 1]);
/// ```
#[inline]
pub fn grapheme_lengths(text: &str) -> impl Iterator<Item = usize> + '_ {
    Segmenter::default().grapheme_lengths(text)
}

/// Returns a lazy iterator over the boundaries of `text`, both ends included.
///
/// ```
/// let boundaries: Vec<usize> = grapheme_seg::boundaries("e\u{0301}x").collect();
/// assert_eq!(boundaries, [0, 3, 4]);
///
/// assert_eq!(grapheme_seg::boundaries("").collect::<Vec<_>>(), [0]);
/// ```
#[must_use]
#[inline]
pub fn boundaries(text: &str) -> Boundaries<'_> {
    Segmenter::default().boundaries(text)
}

/// Counts the clusters of `text`, stopping after `until` of them if given.
///
/// ```
/// let text = "\u{1F476}\u{1F3FB} baby";
///
/// assert_eq!(grapheme_seg::length(text, None), 6);
/// assert_eq!(grapheme_seg::length(text, Some(2)), 2);
/// assert_eq!(grapheme_seg::length(text, Some(100)), 6);
/// ```
#[must_use]
#[inline]
pub fn length(text: &str, until: Option<usize>) -> usize {
    Segmenter::default().length(text, until)
}

/// Returns the clusters `start..end` of `text`, where `end = None` means
/// through the last cluster.
///
/// ```
/// let text = "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}ok";
///
/// assert_eq!(grapheme_seg::slice(text, 1, Some(2)), "\u{1F1EB}\u{1F1F7}");
/// assert_eq!(grapheme_seg::slice(text, 2, None), "ok");
/// assert_eq!(grapheme_seg::slice(text, 3, Some(1)), "");
/// ```
#[must_use]
#[inline]
pub fn slice(text: &str, start: usize, end: Option<usize>) -> &str {
    Segmenter::default().slice(text, start, end)
}

/// Returns the largest boundary of `text` that is not past the byte `offset`.
///
/// ```
/// let text = "o\u{0308}k";
///
/// assert_eq!(grapheme_seg::safe_split_index(text, 2), 0);
/// assert_eq!(grapheme_seg::safe_split_index(text, 3), 3);
/// assert_eq!(grapheme_seg::safe_split_index(text, 99), 4);
/// ```
#[must_use]
#[inline]
pub fn safe_split_index(text: &str, offset: usize) -> usize {
    Segmenter::default().safe_split_index(text, offset)
}

/// Returns `true` if the byte `offset` is a boundary of `text`.
///
/// ```
/// assert!(grapheme_seg::is_boundary("\r\n", 0));
/// assert!(!grapheme_seg::is_boundary("\r\n", 1));
/// assert!(grapheme_seg::is_boundary("\r\n", 2));
/// ```
#[must_use]
#[inline]
pub fn is_boundary(text: &str, offset: usize) -> bool {
    Segmenter::default().is_boundary(text, offset)
}

/// Returns `true` if `needle` occurs in `text` as a run of whole clusters.
///
/// ```
/// assert!(grapheme_seg::contains("cafe\u{0301} bar", "bar"));
/// assert!(!grapheme_seg::contains("cafe\u{0301} bar", "cafe"));
/// ```
#[must_use]
#[inline]
pub fn contains(text: &str, needle: &str) -> bool {
    Segmenter::default().contains(text, needle)
}

/// Returns `true` if `text` starts with the whole clusters of `prefix`.
///
/// ```
/// assert!(grapheme_seg::starts_with("\r\nx", "\r\n"));
/// assert!(!grapheme_seg::starts_with("\r\nx", "\r"));
/// ```
#[must_use]
#[inline]
pub fn starts_with(text: &str, prefix: &str) -> bool {
    Segmenter::default().starts_with(text, prefix)
}

/// Returns `true` if `text` ends with the whole clusters of `suffix`.
///
/// ```
/// assert!(grapheme_seg::ends_with("x\u{1F476}\u{1F3FB}", "\u{1F476}\u{1F3FB}"));
/// assert!(!grapheme_seg::ends_with("x\u{1F476}\u{1F3FB}", "\u{1F3FB}"));
/// ```
#[must_use]
#[inline]
pub fn ends_with(text: &str, suffix: &str) -> bool {
    Segmenter::default().ends_with(text, suffix)
}
