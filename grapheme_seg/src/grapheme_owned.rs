//! Utilities for the `GraphemeOwned` type.
//!
//! *[See also the `GraphemeOwned` type.](GraphemeOwned)*

use crate::Grapheme;
use smallvec::SmallVec;
use std::{borrow::Borrow, fmt, hash::Hash, ops::Deref, str};

const USIZE_BYTES: usize = size_of::<usize>();
type GraphemeOwnedInner = SmallVec<[u8; USIZE_BYTES]>;

/// The owning version of [`&Grapheme`](Grapheme), the way `String` is the
/// owning version of `&str`.
///
/// # Examples
///
/// A `GraphemeOwned` outlives the text its cluster was found in:
///
/// ```
/// use grapheme_seg::GraphemeOwned;
///
/// let owned: Vec<GraphemeOwned> = {
///     let text = String::from("e\u{0301}!");
///     grapheme_seg::graphemes(&text).map(GraphemeOwned::from).collect()
/// };
///
/// assert_eq!(owned[0].as_str(), "e\u{0301}");
/// assert_eq!(owned[1].as_str(), "!");
/// ```
///
/// # Deref
///
/// `GraphemeOwned` implements <code>[Deref]<Target = [Grapheme]></code>, and
/// so inherits all of [`Grapheme`]’s methods:
///
/// ```
/// use grapheme_seg::{Grapheme, GraphemeOwned};
///
/// fn takes_grapheme(g: &Grapheme) -> bool {
///     g.is_flag()
/// }
///
/// let flag = Grapheme::from_code_points("\u{1F1EF}\u{1F1F5}").unwrap().to_owned();
/// assert!(takes_grapheme(&flag));
/// ```
///
/// # Representation
///
/// The `GraphemeOwned` contains an inline buffer equal to usize in size
/// (usually eight bytes). As long as the cluster encoded in UTF-8 fits this
/// buffer it is stored inline, otherwise it is moved to the heap. Most
/// clusters, including a pictograph with a skin tone modifier, fit inline.
#[derive(Clone, Eq)]
#[repr(transparent)]
pub struct GraphemeOwned(GraphemeOwnedInner);

impl GraphemeOwned {
    /// Converts from `&Grapheme` to `GraphemeOwned`.
    #[must_use]
    pub fn from_ref(grapheme: &Grapheme) -> Self {
        Self(SmallVec::from_slice(grapheme.as_bytes()))
    }

    /// Converts from `Box<Grapheme>` to `GraphemeOwned`.
    #[must_use]
    pub fn from_box(grapheme: Box<Grapheme>) -> Self {
        let bytes: Box<[u8]> = grapheme.into();
        Self(SmallVec::from_vec(bytes.into()))
    }

    /// Converts from `GraphemeOwned` to `Box<Grapheme>`.
    #[must_use]
    pub fn into_box(self) -> Box<Grapheme> {
        let bytes = self.0.into_boxed_slice();
        // SAFETY: The bytes were copied from a `Grapheme`.
        let string = unsafe { str::from_boxed_utf8_unchecked(bytes) };
        // SAFETY: This is ok because `Grapheme` is `#[repr(transparent)]`.
        unsafe { Box::from_raw(Box::<str>::into_raw(string) as *mut Grapheme) }
    }

    /// Returns this `GraphemeOwned` capacity, in bytes.
    ///
    /// # Examples
    /// ```
    /// use grapheme_seg::Grapheme;
    ///
    /// let g = Grapheme::from_code_points("y\u{0306}").unwrap().to_owned();
    ///
    /// assert!(g.capacity() >= 3);
    /// ```
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Returns `true` if the cluster is stored in the inline buffer.
    #[must_use]
    #[inline]
    pub fn is_inline(&self) -> bool {
        !self.0.spilled()
    }

    /// Converts from `&GraphemeOwned` to `&Grapheme`.
    #[must_use]
    pub fn as_grapheme(&self) -> &Grapheme {
        // SAFETY: The bytes were copied from a `Grapheme`.
        let string = unsafe { str::from_utf8_unchecked(self.0.as_slice()) };
        // SAFETY: The string is the `Grapheme` it was copied from.
        unsafe { Grapheme::from_code_points_unchecked(string) }
    }
}

impl Deref for GraphemeOwned {
    type Target = Grapheme;

    fn deref(&self) -> &Self::Target {
        self.as_grapheme()
    }
}

impl Borrow<Grapheme> for GraphemeOwned {
    fn borrow(&self) -> &Grapheme {
        self.as_grapheme()
    }
}

impl AsRef<Grapheme> for GraphemeOwned {
    fn as_ref(&self) -> &Grapheme {
        self.as_grapheme()
    }
}

impl fmt::Debug for GraphemeOwned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_grapheme(), f)
    }
}

impl fmt::Display for GraphemeOwned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_grapheme(), f)
    }
}

impl PartialEq for GraphemeOwned {
    fn eq(&self, other: &Self) -> bool {
        self.as_grapheme() == other.as_grapheme()
    }
}

impl PartialEq<Grapheme> for GraphemeOwned {
    fn eq(&self, other: &Grapheme) -> bool {
        self.as_grapheme() == other
    }
}

impl PartialEq<&Grapheme> for GraphemeOwned {
    fn eq(&self, other: &&Grapheme) -> bool {
        self.as_grapheme() == *other
    }
}

impl Hash for GraphemeOwned {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_grapheme().hash(state);
    }
}

impl<'src> From<&'src Grapheme> for GraphemeOwned {
    fn from(value: &'src Grapheme) -> Self {
        Self::from_ref(value)
    }
}

impl From<Box<Grapheme>> for GraphemeOwned {
    fn from(value: Box<Grapheme>) -> Self {
        Self::from_box(value)
    }
}

impl From<GraphemeOwned> for Box<Grapheme> {
    fn from(value: GraphemeOwned) -> Self {
        value.into_box()
    }
}

impl From<GraphemeOwned> for String {
    fn from(value: GraphemeOwned) -> Self {
        value.as_str().to_owned()
    }
}
