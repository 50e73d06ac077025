use core::iter::FusedIterator;

use serde_json::Value;

use crate::{Field, JsonError, Shape, Tag};

// -----------------------------------------------------------------------------
// JsonMapped

/// A type the traversals know how to walk.
///
/// It's recommended to use the [derive macro] for structs rather than
/// implementing this trait by hand. Scalars, `String`, the standard sequences
/// and arrays are implemented in [`impls`](crate::impls).
///
/// The two methods describe the *embedded* representation: the JSON a value
/// produces or accepts as the value of a [`Field`] or as a sequence element.
/// Use [`serialize`](crate::serialize) and [`deserialize`](crate::deserialize)
/// at the top level, which also apply the rule for standalone leaves.
///
/// [derive macro]: crate::derive::JsonMapped
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be mapped to or from JSON",
    note = "consider annotating `{Self}` with `#[derive(JsonMapped)]`"
)]
pub trait JsonMapped: Sized {
    /// Which conversion rule applies to this type.
    const SHAPE: Shape;

    /// Converts `self` to its embedded JSON representation. Never fails.
    fn to_json(&self) -> Value;

    /// Builds a value from its embedded JSON representation.
    fn from_json(json: &Value) -> Result<Self, JsonError>;
}

// -----------------------------------------------------------------------------
// Sequence classifiers

/// A sequence whose size varies at runtime.
///
/// An empty sequence serializes to `null`, and a JSON value that is not an
/// array deserializes to an empty sequence.
pub trait DynamicSequence: JsonMapped {
    type Element: JsonMapped;
}

/// A sequence whose length is fixed by its type.
///
/// Always serializes to an array of exactly [`LEN`](Self::LEN) elements.
pub trait FixedSequence: JsonMapped {
    type Element: JsonMapped;

    const LEN: usize;
}

// -----------------------------------------------------------------------------
// MappedField

/// Type-erased access to a [`Field`] member: its key, its current value as
/// JSON, and assignment from JSON.
///
/// This is the handle [`Aggregate`] hands out for every field member.
pub trait MappedField {
    fn tag(&self) -> &'static str;

    /// The shape of the wrapped value.
    fn shape(&self) -> Shape;

    /// The wrapped value as JSON, converted by its embedded rule.
    fn write_json(&self) -> Value;

    /// Replaces the wrapped value with one converted from `json`.
    ///
    /// On error the wrapped value is left untouched.
    fn read_json(&mut self, json: &Value) -> Result<(), JsonError>;
}

impl<T: JsonMapped, K: Tag> MappedField for Field<T, K> {
    #[inline]
    fn tag(&self) -> &'static str {
        K::TEXT
    }

    #[inline]
    fn shape(&self) -> Shape {
        T::SHAPE
    }

    #[inline]
    fn write_json(&self) -> Value {
        self.get().to_json()
    }

    fn read_json(&mut self, json: &Value) -> Result<(), JsonError> {
        self.set(T::from_json(json)?);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Aggregate

/// A reference to one direct member of an [`Aggregate`].
#[derive(Clone, Copy)]
pub enum MemberRef<'a> {
    /// A [`Field`] member, visible to the mapping.
    Field(&'a dyn MappedField),
    /// Any other member, carrying only its name. Invisible to the mapping.
    Plain(&'static str),
}

/// A mutable reference to one direct member of an [`Aggregate`].
pub enum MemberMut<'a> {
    Field(&'a mut dyn MappedField),
    Plain(&'static str),
}

impl<'a> MemberRef<'a> {
    /// Returns the field handle, or `None` for a plain member.
    #[inline]
    pub fn as_field(self) -> Option<&'a dyn MappedField> {
        match self {
            Self::Field(field) => Some(field),
            Self::Plain(_) => None,
        }
    }
}

impl<'a> MemberMut<'a> {
    #[inline]
    pub fn into_field(self) -> Option<&'a mut dyn MappedField> {
        match self {
            Self::Field(field) => Some(field),
            Self::Plain(_) => None,
        }
    }
}

/// Enumeration of a struct's direct members in declaration order.
///
/// This is usually implemented by [`#[derive(JsonMapped)]`](crate::derive::JsonMapped),
/// which also implements [`JsonMapped`] on top of it. Implementing it by hand
/// registers members explicitly:
///
/// ```
/// use kie_json::{Aggregate, Field, JsonMapped, JsonError, MemberMut, MemberRef, Shape, Value};
///
/// kie_json::define_tags! {
///     X = "x";
/// }
///
/// #[derive(Default)]
/// struct Point {
///     x: Field<i32, X>,
///     cache: u64,
/// }
///
/// impl Aggregate for Point {
///     fn member_len(&self) -> usize {
///         2
///     }
///
///     fn member_at(&self, index: usize) -> Option<MemberRef<'_>> {
///         match index {
///             0 => Some(MemberRef::Field(&self.x)),
///             1 => Some(MemberRef::Plain("cache")),
///             _ => None,
///         }
///     }
///
///     fn member_at_mut(&mut self, index: usize) -> Option<MemberMut<'_>> {
///         match index {
///             0 => Some(MemberMut::Field(&mut self.x)),
///             1 => Some(MemberMut::Plain("cache")),
///             _ => None,
///         }
///     }
/// }
///
/// impl JsonMapped for Point {
///     const SHAPE: Shape = Shape::Aggregate;
///
///     fn to_json(&self) -> Value {
///         kie_json::aggregate_to_json(self)
///     }
///
///     fn from_json(json: &Value) -> Result<Self, JsonError> {
///         kie_json::aggregate_from_json(json)
///     }
/// }
///
/// let point = Point { x: 3.into(), cache: 9 };
/// assert_eq!(kie_json::serialize_to_string(&point), r#"{"x":3}"#);
/// ```
pub trait Aggregate: Default {
    /// Number of direct members, field or not.
    fn member_len(&self) -> usize;

    /// Returns the member at `index`, `None` if out of bounds.
    fn member_at(&self, index: usize) -> Option<MemberRef<'_>>;

    /// Returns the member at `index` mutably, `None` if out of bounds.
    fn member_at_mut(&mut self, index: usize) -> Option<MemberMut<'_>>;

    /// Iterates over all direct members in declaration order.
    #[inline]
    fn iter_members(&self) -> MemberIter<'_> {
        MemberIter::new(self)
    }
}

/// An iterator over the members of an [`Aggregate`].
pub struct MemberIter<'a> {
    aggregate: &'a dyn AggregateRef,
    index: usize,
}

// `Aggregate: Default` is not object safe, this is the read-only part of it.
trait AggregateRef {
    fn member_len(&self) -> usize;
    fn member_at(&self, index: usize) -> Option<MemberRef<'_>>;
}

impl<T: Aggregate> AggregateRef for T {
    #[inline]
    fn member_len(&self) -> usize {
        Aggregate::member_len(self)
    }

    #[inline]
    fn member_at(&self, index: usize) -> Option<MemberRef<'_>> {
        Aggregate::member_at(self, index)
    }
}

impl<'a> MemberIter<'a> {
    #[inline]
    pub fn new<T: Aggregate>(aggregate: &'a T) -> Self {
        Self {
            aggregate,
            index: 0,
        }
    }
}

impl<'a> Iterator for MemberIter<'a> {
    type Item = MemberRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let member = self.aggregate.member_at(self.index);
        if member.is_some() {
            self.index += 1;
        }
        member
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.aggregate.member_len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for MemberIter<'_> {}

impl FusedIterator for MemberIter<'_> {}
