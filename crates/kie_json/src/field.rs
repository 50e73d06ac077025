use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use crate::{JsonMapped, Shape, Tag};

// -----------------------------------------------------------------------------
// Field

/// A value that takes part in JSON mapping under the key `K`.
///
/// A struct member of type `Field<T, K>` is visible to [`serialize`] and
/// [`deserialize`]; members of any other type are skipped. The key is the
/// [`Tag`] text of `K` and is fixed by the type, so it is never part of
/// assignment or comparison.
///
/// `Field` dereferences to `T`, so most code can use it as if it were the
/// wrapped value.
///
/// # Examples
///
/// ```
/// use kie_json::{Field, define_tags};
///
/// define_tags! {
///     Names = "names";
/// }
///
/// let mut names: Field<Vec<String>, Names> = Field::default();
/// names.push("kie".to_owned());
///
/// assert_eq!(names.tag(), "names");
/// assert_eq!(names.len(), 1);
/// assert_eq!(names.into_inner(), vec!["kie".to_owned()]);
/// ```
///
/// [`serialize`]: crate::serialize
/// [`deserialize`]: crate::deserialize
pub struct Field<T, K: Tag> {
    value: T,
    _tag: PhantomData<fn() -> K>,
}

impl<T, K: Tag> Field<T, K> {
    /// The key this field is stored under.
    pub const TAG: &'static str = K::TEXT;

    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns the key this field is stored under.
    #[inline]
    pub const fn tag(&self) -> &'static str {
        K::TEXT
    }

    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    #[inline]
    pub const fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Replaces the wrapped value, returning the old one.
    #[inline]
    pub fn replace(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Default, K: Tag> Default for Field<T, K> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone, K: Tag> Clone for Field<T, K> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
    }
}

impl<T: Copy, K: Tag> Copy for Field<T, K> {}

impl<T, K: Tag> From<T> for Field<T, K> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, K: Tag> Deref for Field<T, K> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, K: Tag> DerefMut for Field<T, K> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T, K: Tag> AsRef<T> for Field<T, K> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, K: Tag> AsMut<T> for Field<T, K> {
    #[inline]
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T, K: Tag> Borrow<T> for Field<T, K> {
    #[inline]
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T, K: Tag> BorrowMut<T> for Field<T, K> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: PartialEq, K: Tag> PartialEq for Field<T, K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, K: Tag> Eq for Field<T, K> {}

impl<T: PartialOrd, K: Tag> PartialOrd for Field<T, K> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, K: Tag> Ord for Field<T, K> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, K: Tag> Hash for Field<T, K> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, K: Tag> fmt::Debug for Field<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("tag", &K::TEXT)
            .field("value", &self.value)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// FieldWrapper

/// Implemented only by [`Field`]: exposes the wrapped type and the tag.
///
/// Generic code can use this trait to ask whether a member type is a field
/// and what it wraps, without naming `Field` itself.
pub trait FieldWrapper: sealed::Sealed {
    type Inner: JsonMapped;
    type Tag: Tag;

    /// `true` if the wrapped type is string-like, a leaf that is never traversed.
    const WRAPS_TEXT: bool;
}

impl<T: JsonMapped, K: Tag> FieldWrapper for Field<T, K> {
    type Inner = T;
    type Tag = K;

    const WRAPS_TEXT: bool = matches!(T::SHAPE, Shape::Text);
}

mod sealed {
    pub trait Sealed {}

    impl<T, K: crate::Tag> Sealed for super::Field<T, K> {}
}

// -----------------------------------------------------------------------------
// Tests
