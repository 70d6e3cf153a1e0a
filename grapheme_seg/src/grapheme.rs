//! Utilities for the `Grapheme` type.
//!
//! *[See also the `Grapheme` type.](Grapheme)*

use crate::{GraphemeOwned, PropertyGroup, Segmenter, classify};
use std::{
    fmt,
    str::{Bytes, Chars},
};

/// The `Grapheme` type represents a single user-perceived character, an
/// ‘extended grapheme cluster’ in Unicode terms. It's something between `str`
/// and `char`: like `char` it is one unit of text, and like `str` it is
/// dynamically sized and usually seen as `&Grapheme`, borrowed from the text
/// it was found in.
///
/// # Basic Usage
///
/// Clusters come out of the scanner:
/// ```
/// let mut iter = grapheme_seg::graphemes("y\u{0306}es");
/// let y = iter.next().unwrap();
///
/// assert_eq!(y.as_str(), "y\u{0306}");
/// assert_eq!(y.code_points().count(), 2);
/// ```
///
/// # Validity
///
/// A `Grapheme` is never empty, and it is exactly one extended grapheme
/// cluster under the [`PropertyTable`] that produced it. [`from_code_points`]
/// and the `g!` literal check against the bundled Unicode table. A
/// [`Segmenter`] bound to another table yields clusters of that table, which
/// the bundled table may split differently.
///
/// ```
/// use grapheme_seg::Grapheme;
///
/// assert!(Grapheme::from_code_points("\r\n").is_some());
/// assert!(Grapheme::from_code_points("ab").is_none());
/// assert!(Grapheme::from_code_points("").is_none());
/// ```
///
/// [`PropertyTable`]: crate::PropertyTable
/// [`from_code_points`]: Grapheme::from_code_points
///
/// # Equality
///
/// Two `Grapheme`s are equal when they hold the same code points. No
/// normalization is applied, so `"\u{E9}"` and `"e\u{301}"` differ.
#[derive(PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Grapheme(str);

impl Grapheme {
    /// Converts a `&str` to a `&Grapheme`.
    ///
    /// Returns `None` unless `value` is exactly one cluster under the bundled
    /// Unicode table.
    ///
    /// For an unsafe version of this function which ignores these checks, see
    /// [`from_code_points_unchecked`].
    ///
    /// [`from_code_points_unchecked`]: #method.from_code_points_unchecked
    ///
    /// # Examples
    ///
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// let flag = Grapheme::from_code_points("\u{1F1FA}\u{1F1F8}");
    /// assert_eq!(flag.map(Grapheme::as_str), Some("\u{1F1FA}\u{1F1F8}"));
    ///
    /// assert_eq!(Grapheme::from_code_points("\u{1F1FA}\u{1F1F8}\u{1F1FA}"), None);
    /// ```
    #[must_use]
    #[inline]
    #[doc(alias = "from_chars", alias = "from_str")]
    pub fn from_code_points(value: &str) -> Option<&Self> {
        (!value.is_empty() && Segmenter::default().length(value, Some(2)) == 1)
            // SAFETY: Checked above.
            .then(|| unsafe { Self::from_code_points_unchecked(value) })
    }

    /// Converts a `&str` to a `&Grapheme`, ignoring validity.
    ///
    /// # Safety
    ///
    /// `value` must not be empty. It must be exactly one extended grapheme
    /// cluster under some [`PropertyTable`], normally the bundled one.
    ///
    /// [`PropertyTable`]: crate::PropertyTable
    ///
    /// For a safe version of this function, see [`from_code_points`].
    ///
    /// [`from_code_points`]: #method.from_code_points
    #[must_use]
    #[inline]
    pub const unsafe fn from_code_points_unchecked(value: &str) -> &Self {
        // SAFETY: This is ok because Grapheme is #[repr(transparent)]
        unsafe { &*(value as *const str as *const Self) }
    }

    /// Returns the length of this `Grapheme` in bytes.
    ///
    /// That number is always greater than 0.
    ///
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// let g = |s| Grapheme::from_code_points(s).unwrap();
    /// assert_eq!(g("A").len(), 1);
    /// assert_eq!(g("\r\n").len(), 2);
    /// assert_eq!(g("\u{1F476}\u{1F3FB}").len(), 8);
    /// ```
    #[expect(clippy::len_without_is_empty)]
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Checks if the `Grapheme` contains exactly one code point.
    ///
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// assert!(Grapheme::from_code_points("東").unwrap().is_code_point());
    /// assert!(!Grapheme::from_code_points("\r\n").unwrap().is_code_point());
    /// ```
    #[must_use]
    #[inline]
    #[doc(alias = "is_char")]
    pub fn is_code_point(&self) -> bool {
        self.to_code_point().is_some()
    }

    /// Returns `Some` if the `Grapheme` contains exactly one code point.
    #[must_use]
    #[inline]
    #[doc(alias = "to_char")]
    pub fn to_code_point(&self) -> Option<char> {
        let mut iter = self.0.chars();
        match (iter.next(), iter.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Returns the property group of the first code point.
    ///
    /// The group comes from the bundled Unicode table, even for a `Grapheme`
    /// scanned with a custom [`Segmenter`]. Use [`Segmenter::classify`] to
    /// ask another table.
    ///
    /// ```
    /// use grapheme_seg::{Grapheme, PropertyGroup};
    ///
    /// let g = Grapheme::from_code_points("\u{AC00}\u{11A8}").unwrap();
    /// assert_eq!(g.group(), PropertyGroup::LV);
    /// ```
    #[must_use]
    pub fn group(&self) -> PropertyGroup {
        let (first, _) = self.split();
        classify(first)
    }

    /// Returns `true` for a line break (`"\r\n"`, CR or LF) or a control
    /// code, which always form a cluster of their own. Classified with the
    /// bundled table, like [`group`](Grapheme::group).
    ///
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// assert!(Grapheme::from_code_points("\r\n").unwrap().is_control());
    /// assert!(Grapheme::from_code_points("\u{9C}").unwrap().is_control());
    /// assert!(!Grapheme::from_code_points("q").unwrap().is_control());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_control(&self) -> bool {
        self.group().is_control()
    }

    /// Returns `true` for a flag emoji: a pair of regional indicators.
    /// Classified with the bundled table, like [`group`](Grapheme::group).
    ///
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// assert!(Grapheme::from_code_points("\u{1F1EB}\u{1F1F7}").unwrap().is_flag());
    /// assert!(!Grapheme::from_code_points("\u{1F1EB}").unwrap().is_flag());
    /// ```
    #[must_use]
    pub fn is_flag(&self) -> bool {
        let mut iter = self.0.chars().map(classify);
        matches!(
            (iter.next(), iter.next(), iter.next()),
            (
                Some(PropertyGroup::RegionalIndicator),
                Some(PropertyGroup::RegionalIndicator),
                None
            )
        )
    }

    /// Returns `true` for an emoji ZWJ sequence: pictographs joined by zero
    /// width joiners. Classified with the bundled table, like
    /// [`group`](Grapheme::group).
    ///
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// // Woman, ZWJ, laptop.
    /// let technologist = Grapheme::from_code_points("\u{1F469}\u{200D}\u{1F4BB}").unwrap();
    /// assert!(technologist.is_emoji_sequence());
    ///
    /// let baby = Grapheme::from_code_points("\u{1F476}\u{1F3FB}").unwrap();
    /// assert!(!baby.is_emoji_sequence());
    /// ```
    #[must_use]
    pub fn is_emoji_sequence(&self) -> bool {
        let mut groups = self.0.chars().map(classify).peekable();
        let mut joined = false;
        while let Some(group) = groups.next() {
            if group == PropertyGroup::ZWJ
                && groups.peek() == Some(&PropertyGroup::ExtendedPictographic)
            {
                joined = true;
            }
        }
        joined
    }

    /// Returns an iterator over the [`char`]s of a `&Grapheme`.
    ///
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// let y = Grapheme::from_code_points("y\u{0306}").unwrap();
    /// let mut code_points = y.code_points();
    ///
    /// assert_eq!(Some('y'), code_points.next()); // not 'y̆'
    /// assert_eq!(Some('\u{0306}'), code_points.next());
    /// assert_eq!(None, code_points.next());
    /// ```
    #[inline]
    #[doc(alias = "chars")]
    pub fn code_points(&self) -> Chars<'_> {
        self.0.chars()
    }

    /// Returns an iterator over the bytes of a `&Grapheme`.
    #[inline]
    pub fn bytes(&self) -> Bytes<'_> {
        self.0.bytes()
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

    /// Converts from `&Grapheme` to `GraphemeOwned`.
    #[must_use]
    pub fn to_owned(&self) -> GraphemeOwned {
        GraphemeOwned::from_ref(self)
    }

    /// Splits the grapheme into the first code point and the remaining code
    /// points.
    ///
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// let (code_point, rest) = Grapheme::from_code_points("y\u{0306}").unwrap().split();
    ///
    /// assert_eq!('y', code_point);
    /// assert_eq!("\u{0306}", rest);
    /// ```
    #[inline]
    pub fn split(&self) -> (char, &str) {
        let mut iter = self.0.chars();
        match iter.next() {
            Some(first) => (first, iter.as_str()),
            // A grapheme always holds at least one code point.
            None => unreachable!("empty grapheme"),
        }
    }

    /// Splits the grapheme into the leading code points and the last code
    /// point.
    ///
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// let (rest, code_point) = Grapheme::from_code_points("y\u{0306}").unwrap().split_rev();
    ///
    /// assert_eq!("y", rest);
    /// assert_eq!('\u{0306}', code_point);
    /// ```
    #[inline]
    pub fn split_rev(&self) -> (&str, char) {
        match self.0.char_indices().next_back() {
            Some((i, last)) => (&self.0[..i], last),
            None => unreachable!("empty grapheme"),
        }
    }
}

impl fmt::Debug for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("g'")?;
        for i in self.as_str().chars() {
            fmt::Display::fmt(&i.escape_default(), f)?;
        }
        f.write_str("'")?;
        Ok(())
    }
}

impl fmt::Display for Grapheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Grapheme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for Grapheme {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<str> for Grapheme {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Grapheme {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<'src> From<&'src Grapheme> for Box<Grapheme> {
    fn from(value: &'src Grapheme) -> Self {
        let value: Box<str> = Box::from(value.as_str());
        // SAFETY: This is ok because Grapheme is #[repr(transparent)]
        unsafe { Box::from_raw(Box::into_raw(value) as *mut Grapheme) }
    }
}

impl From<Box<Grapheme>> for Box<str> {
    fn from(value: Box<Grapheme>) -> Self {
        // SAFETY: This is ok because Grapheme is #[repr(transparent)]
        unsafe { Box::from_raw(Box::into_raw(value) as *mut str) }
    }
}

impl From<Box<Grapheme>> for Box<[u8]> {
    fn from(value: Box<Grapheme>) -> Self {
        Box::<str>::from(value).into()
    }
}

impl Clone for Box<Grapheme> {
    fn clone(&self) -> Self {
        Box::from(&**self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn g(s: &str) -> &Grapheme {
        Grapheme::from_code_points(s).unwrap()
    }

    #[test]
    fn test_from_code_points() {
        assert_eq!(g("a").as_str(), "a");
        assert_eq!(g("\u{1F476}\u{1F3FB}").as_str(), "\u{1F476}\u{1F3FB}");
        assert_eq!(Grapheme::from_code_points("\n\r"), None);
        assert_eq!(Grapheme::from_code_points("\u{0308}a"), None);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", g("\r\n")), "g'\\r\\n'");
        assert_eq!(format!("{:?}", g("a")), "g'a'");
        assert_eq!(format!("{}", g("\r\n")), "\r\n");
    }

    #[test]
    fn test_groups() {
        assert_eq!(g("\u{0600}a").group(), PropertyGroup::Prepend);
        assert!(g("\r").is_control());
        assert!(g("\u{1}").is_control());
        assert!(!g("\u{1F476}").is_control());
        assert!(g("\u{1F1E6}\u{1F1E7}").is_flag());
        assert!(!g("a\u{0308}").is_flag());
        assert!(g("\u{1F476}\u{1F3FF}\u{0308}\u{200D}\u{1F476}\u{1F3FF}").is_emoji_sequence());
        assert!(!g("a\u{200D}").is_emoji_sequence());
    }

    #[test]
    fn test_groups_ignore_scanning_table() {
        use crate::{PropertyRange, PropertyTable};

        let table = PropertyTable::from_ranges(vec![PropertyRange::new(
            'x' as u32,
            'x' as u32,
            PropertyGroup::RegionalIndicator,
        )])
        .unwrap();
        let xx = Segmenter::new(&table).graphemes("xx").next().unwrap();
        assert_eq!(xx.as_str(), "xx");
        assert_eq!(xx.group(), PropertyGroup::Other);
        assert!(!xx.is_flag());
    }

    #[test]
    fn test_split() {
        assert_eq!(g("a").split(), ('a', ""));
        assert_eq!(g("a").split_rev(), ("", 'a'));
        assert_eq!(g("\r\n").split_rev(), ("\r", '\n'));
    }

    #[test]
    fn test_boxed() {
        let boxed: Box<Grapheme> = g("\u{AC00}\u{11A8}").into();
        let cloned = boxed.clone();
        assert_eq!(&*cloned, g("\u{AC00}\u{11A8}"));
        let bytes: Box<[u8]> = cloned.into();
        assert_eq!(&*bytes, "\u{AC00}\u{11A8}".as_bytes());
    }

    #[test]
    fn test_eq_str() {
        assert!(*g("\r\n") == *"\r\n");
        assert!(*g("x") == "x");
        assert!(g("\u{E9}") != g("e\u{301}"));
    }
}
