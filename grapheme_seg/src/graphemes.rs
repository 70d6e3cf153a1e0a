//! Utilities for the `Graphemes` type.
//!
//! *[See also the `Graphemes` type.](Graphemes)*

use crate::{Boundaries, Grapheme, Iter, IterWithIndices, Segmenter};
use std::fmt;

/// The `Graphemes` type, also called a ‘grapheme slice’. It is a string slice
/// viewed as a sequence of extended grapheme clusters, and is usually seen in
/// its borrowed form, `&Graphemes`.
///
/// Every `str` is a valid `Graphemes`, so [`Graphemes::new`] is free. The
/// methods count and index in clusters where `str` counts bytes, and refuse
/// to cut a cluster in half.
///
/// # Examples
///
/// ```
/// use grapheme_seg::Graphemes;
///
/// let text = Graphemes::new("y\u{0306}es");
///
/// assert_eq!(text.len(), 5); // bytes
/// assert_eq!(text.count(), 3); // clusters
/// assert_eq!(text.slice(0, Some(1)), "y\u{0306}");
/// assert!(!text.starts_with("y"));
/// ```
///
/// # Representation
///
/// A `&Graphemes` is a `&str` with a different set of methods. You can get
/// the original back with [`as_str`](Graphemes::as_str), and the conversion
/// both ways costs nothing.
///
/// Equality and hashing compare code points, exactly like `str`.
#[derive(PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Graphemes(str);

impl Graphemes {
    /// Wraps a `&str` as a `&Graphemes`.
    #[must_use]
    #[inline]
    pub const fn new(text: &str) -> &Self {
        // SAFETY: This is ok because Graphemes is #[repr(transparent)]
        unsafe { &*(text as *const str as *const Self) }
    }

    /// Converts a `Box<Graphemes>` into a `Box<str>` without copying or
    /// allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use grapheme_seg::Graphemes;
    ///
    /// let boxed = Box::<Graphemes>::from("\u{1F476}\u{1F3FB}!");
    /// let boxed_str = boxed.into_boxed_str();
    /// assert_eq!(&*boxed_str, "\u{1F476}\u{1F3FB}!");
    /// ```
    #[must_use]
    #[inline]
    pub fn into_boxed_str(self: Box<Self>) -> Box<str> {
        // SAFETY: This is ok because Graphemes is #[repr(transparent)]
        unsafe { Box::from_raw(Box::into_raw(self) as *mut str) }
    }

    /// Converts a `Box<Graphemes>` into a `Box<[u8]>` without copying or
    /// allocating.
    #[must_use]
    #[inline]
    pub fn into_boxed_bytes(self: Box<Self>) -> Box<[u8]> {
        self.into_boxed_str().into_boxed_bytes()
    }

    /// Returns the length of `self` in bytes.
    ///
    /// For the number of clusters see [`count`](Graphemes::count).
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if `self` has a length of zero bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    #[inline]
    pub const fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    #[inline]
    pub const fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns an iterator over the [`Grapheme`]s of a grapheme slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use grapheme_seg::Graphemes;
    ///
    /// let text = Graphemes::new("a\r\n\u{1F1EE}\u{1F1F9}");
    /// let mut iter = text.iter();
    ///
    /// assert_eq!(iter.next().map(|g| g.as_str()), Some("a"));
    /// assert_eq!(iter.next().map(|g| g.as_str()), Some("\r\n"));
    /// assert_eq!(iter.next().map(|g| g.as_str()), Some("\u{1F1EE}\u{1F1F9}"));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Segmenter::default().graphemes(self.as_str())
    }

    /// Returns an iterator over the [`Grapheme`]s of a grapheme slice and
    /// their byte offsets.
    ///
    /// ```
    /// use grapheme_seg::Graphemes;
    ///
    /// let offsets: Vec<usize> = Graphemes::new("o\u{0308}k").iter_with_indices().map(|(i, _)| i).collect();
    /// assert_eq!(offsets, [0, 3]);
    /// ```
    #[inline]
    pub fn iter_with_indices(&self) -> IterWithIndices<'_> {
        Segmenter::default().grapheme_indices(self.as_str())
    }

    /// Returns an iterator over the boundaries, from `0` to
    /// [`len`](Graphemes::len) inclusive.
    #[inline]
    pub fn boundaries(&self) -> Boundaries<'_> {
        Segmenter::default().boundaries(self.as_str())
    }

    /// Counts the clusters.
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        Segmenter::default().length(self.as_str(), None)
    }

    /// Counts the clusters, stopping after `limit`. Use it to compare the
    /// length of a long text against a small number.
    ///
    /// ```
    /// use grapheme_seg::Graphemes;
    ///
    /// let accents = "e\u{0301}".repeat(1000);
    /// let text = Graphemes::new(&accents);
    /// assert_eq!(text.count_until(5), 5);
    /// assert_eq!(text.count_until(5000), 1000);
    /// ```
    #[must_use]
    #[inline]
    pub fn count_until(&self, limit: usize) -> usize {
        Segmenter::default().length(self.as_str(), Some(limit))
    }

    /// Returns the clusters `start..end`, where `end = None` means through the
    /// last cluster.
    ///
    /// See [`slice`](crate::slice) for how out-of-range indices are treated.
    #[must_use]
    #[inline]
    pub fn slice(&self, start: usize, end: Option<usize>) -> &Graphemes {
        Graphemes::new(Segmenter::default().slice(self.as_str(), start, end))
    }

    /// Returns the largest boundary not past the byte `offset`.
    #[must_use]
    #[inline]
    pub fn safe_split_index(&self, offset: usize) -> usize {
        Segmenter::default().safe_split_index(self.as_str(), offset)
    }

    /// Returns `true` if the byte `offset` is a boundary.
    #[must_use]
    #[inline]
    pub fn is_boundary(&self, offset: usize) -> bool {
        Segmenter::default().is_boundary(self.as_str(), offset)
    }

    /// Splits at the largest boundary not past the byte `offset`.
    ///
    /// ```
    /// use grapheme_seg::Graphemes;
    ///
    /// let (head, tail) = Graphemes::new("ab\u{1F476}\u{1F3FB}").split_at(4);
    ///
    /// assert_eq!(head, "ab");
    /// assert_eq!(tail, "\u{1F476}\u{1F3FB}");
    /// ```
    #[must_use]
    #[inline]
    pub fn split_at(&self, offset: usize) -> (&Graphemes, &Graphemes) {
        let (head, tail) = self.0.split_at(self.safe_split_index(offset));
        (Graphemes::new(head), Graphemes::new(tail))
    }

    /// Returns `true` if `needle` occurs as a run of whole clusters.
    #[must_use]
    #[inline]
    pub fn contains(&self, needle: &str) -> bool {
        Segmenter::default().contains(self.as_str(), needle)
    }

    /// Returns `true` if `prefix` is a run of whole clusters at the start.
    #[must_use]
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        Segmenter::default().starts_with(self.as_str(), prefix)
    }

    /// Returns `true` if `suffix` is a run of whole clusters at the end.
    #[must_use]
    #[inline]
    pub fn ends_with(&self, suffix: &str) -> bool {
        Segmenter::default().ends_with(self.as_str(), suffix)
    }
}

impl fmt::Debug for Graphemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("g")?;
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Graphemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq<str> for Graphemes {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Graphemes {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl AsRef<str> for Graphemes {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for Graphemes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'src> From<&'src Graphemes> for &'src str {
    fn from(value: &'src Graphemes) -> Self {
        value.as_str()
    }
}

impl<'src> From<&'src str> for &'src Graphemes {
    fn from(value: &'src str) -> Self {
        Graphemes::new(value)
    }
}

impl<'src> From<&'src Graphemes> for Box<Graphemes> {
    fn from(value: &'src Graphemes) -> Self {
        Box::<str>::from(value.as_str()).into()
    }
}

impl<'src> From<&'src str> for Box<Graphemes> {
    fn from(value: &'src str) -> Self {
        Box::<str>::from(value).into()
    }
}

impl From<Box<str>> for Box<Graphemes> {
    fn from(value: Box<str>) -> Self {
        // SAFETY: This is ok because Graphemes is #[repr(transparent)]
        unsafe { Box::from_raw(Box::into_raw(value) as *mut Graphemes) }
    }
}

impl From<Box<Graphemes>> for Box<str> {
    fn from(value: Box<Graphemes>) -> Self {
        value.into_boxed_str()
    }
}

impl Clone for Box<Graphemes> {
    fn clone(&self) -> Self {
        Box::from(&**self)
    }
}

impl<'src> IntoIterator for &'src Graphemes {
    type Item = &'src Grapheme;

    type IntoIter = Iter<'src>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts() {
        let text = Graphemes::new("\u{1F469}\u{200D}\u{1F4BB} \u{AC00}\u{11A8}");
        assert_eq!(text.count(), 3);
        assert_eq!(text.count_until(2), 2);
        assert_eq!(Graphemes::new("").count(), 0);
        assert!(Graphemes::new("").is_empty());
    }

    #[test]
    fn test_count_until_long_text() {
        let accents = "e\u{0301}".repeat(1000);
        let text = Graphemes::new(&accents);
        assert_eq!(text.count_until(5), 5);
        assert_eq!(text.count_until(5000), 1000);
        assert_eq!(text.count(), 1000);
    }

    #[test]
    fn test_slice_and_split() {
        let text = Graphemes::new("\r\n\u{1F1E6}\u{1F1E7}x");
        assert_eq!(text.slice(1, None), "\u{1F1E6}\u{1F1E7}x");
        assert_eq!(text.slice(0, Some(1)), "\r\n");
        assert_eq!(text.slice(5, None), "");

        let (head, tail) = text.split_at(1);
        assert_eq!((head.as_str(), tail.as_str()), ("", "\r\n\u{1F1E6}\u{1F1E7}x"));
        let (head, tail) = text.split_at(6);
        assert_eq!((head.as_str(), tail.as_str()), ("\r\n", "\u{1F1E6}\u{1F1E7}x"));
    }

    #[test]
    fn test_searches() {
        let text = Graphemes::new("na\u{0308}ive");
        assert!(text.contains("ive"));
        assert!(!text.contains("na"));
        assert!(text.starts_with("n"));
        assert!(text.ends_with("ve"));
        assert!(!text.ends_with("\u{0308}ive"));
    }

    #[test]
    fn test_into_iterator() {
        let mut clusters = Vec::new();
        for g in Graphemes::new("a\u{0308}b") {
            clusters.push(g.as_str());
        }
        assert_eq!(clusters, vec!["a\u{0308}", "b"]);
    }

    #[test]
    fn test_boxed() {
        let boxed = Box::<Graphemes>::from("\u{0600}a");
        assert_eq!(boxed.clone().count(), 1);
        assert_eq!(&*boxed.into_boxed_bytes(), "\u{0600}a".as_bytes());
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Graphemes::new("a\n")), "g\"a\\n\"");
    }
}
