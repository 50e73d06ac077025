use alloc::vec::Vec;
use core::any::type_name;

use serde_json::Value;

use crate::{Aggregate, ErrorKind, JsonError, JsonKind, JsonMapped, MemberMut};

// -----------------------------------------------------------------------------
// Entry points

/// Builds a `T` from a parsed JSON value.
///
/// # Rules
///
/// - Dynamic sequence: a JSON array is converted element by element. Any other
///   JSON value yields an empty sequence, this is not an error.
/// - Fixed sequence: requires a JSON array of exactly the fixed length.
/// - Aggregate: starts from `T::default()`. Every [`Field`](crate::Field)
///   member requires its tag as a key of a JSON object and is converted from
///   that value. Other members keep their default value.
/// - Scalar or text: extracted directly, failing if the JSON kind does not fit.
///
/// # Errors
///
/// [`ErrorKind::MissingField`], [`ErrorKind::ScalarKindMismatch`],
/// [`ErrorKind::NotAnArray`] and [`ErrorKind::ArityMismatch`]. The first error
/// aborts the conversion, no partial value is returned.
///
/// # Examples
///
/// ```
/// use kie_json::deserialize;
/// use serde_json::json;
///
/// let v: Vec<i32> = deserialize(&json!([1, 2, 3])).unwrap();
/// assert_eq!(v, [1, 2, 3]);
///
/// let v: Vec<i32> = deserialize(&json!({"not": "an array"})).unwrap();
/// assert!(v.is_empty());
///
/// assert!(deserialize::<[i32; 2]>(&json!([1, 2, 3])).is_err());
/// ```
#[inline]
pub fn deserialize<T: JsonMapped>(json: &Value) -> Result<T, JsonError> {
    T::from_json(json)
}

/// Parses `text` and builds a `T` from it, see [`deserialize`].
///
/// # Errors
///
/// [`ErrorKind::Parse`] if `text` is not well-formed JSON, otherwise the errors
/// of [`deserialize`].
///
/// # Examples
///
/// ```
/// use kie_json::deserialize_str;
///
/// assert_eq!(deserialize_str::<Vec<i32>>("[1,2,3]").unwrap(), [1, 2, 3]);
/// assert_eq!(deserialize_str::<Vec<i32>>("null").unwrap(), Vec::<i32>::new());
/// assert!(deserialize_str::<Vec<i32>>("[1,").unwrap_err().is_parse());
/// ```
pub fn deserialize_str<T: JsonMapped>(text: &str) -> Result<T, JsonError> {
    let json: Value = serde_json::from_str(text).map_err(ErrorKind::Parse)?;
    T::from_json(&json)
}

// -----------------------------------------------------------------------------
// Aggregate

/// The embedded conversion of an [`Aggregate`], used by derived
/// [`JsonMapped::from_json`] implementations.
///
/// # Errors
///
/// [`ErrorKind::MissingField`] if `json` is not an object holding every field
/// tag, or any error raised while converting a field value.
pub fn aggregate_from_json<T: Aggregate>(json: &Value) -> Result<T, JsonError> {
    let object = json.as_object();
    let mut value = T::default();

    for index in 0..value.member_len() {
        let Some(MemberMut::Field(field)) = value.member_at_mut(index) else {
            continue;
        };

        let tag = field.tag();
        let Some(item) = object.and_then(|object| object.get(tag)) else {
            return Err(JsonError::from(ErrorKind::MissingField {
                tag,
                type_name: type_name::<T>(),
                found: JsonKind::of(json),
            }));
        };

        field
            .read_json(item)
            .map_err(|err| err.within_field(tag))?;
    }

    Ok(value)
}

// -----------------------------------------------------------------------------
// Sequences

/// Converts a JSON array into a dynamic sequence created by `with_capacity`.
/// Anything but an array yields an empty sequence.
pub(crate) fn dynamic_from_json<S, T>(
    json: &Value,
    with_capacity: impl FnOnce(usize) -> S,
    mut push: impl FnMut(&mut S, T),
) -> Result<S, JsonError>
where
    T: JsonMapped,
{
    let Value::Array(array) = json else {
        log::debug!(
            "expected a JSON array for `{}`, found JSON {}; using an empty sequence",
            type_name::<S>(),
            JsonKind::of(json),
        );
        return Ok(with_capacity(0));
    };

    let mut sequence = with_capacity(array.len());
    for (index, item) in array.iter().enumerate() {
        let element = T::from_json(item).map_err(|err| err.within_index(index))?;
        push(&mut sequence, element);
    }
    Ok(sequence)
}

pub(crate) fn fixed_from_json<T: JsonMapped, const N: usize>(
    json: &Value,
) -> Result<[T; N], JsonError> {
    let Value::Array(array) = json else {
        return Err(JsonError::from(ErrorKind::NotAnArray {
            type_name: type_name::<[T; N]>(),
            found: JsonKind::of(json),
        }));
    };

    let arity_mismatch = |found: usize| {
        JsonError::from(ErrorKind::ArityMismatch {
            type_name: type_name::<[T; N]>(),
            expected: N,
            found,
        })
    };

    if array.len() != N {
        return Err(arity_mismatch(array.len()));
    }

    let elements = array
        .iter()
        .enumerate()
        .map(|(index, item)| T::from_json(item).map_err(|err| err.within_index(index)))
        .collect::<Result<Vec<T>, JsonError>>()?;

    // The length was checked above, the conversion cannot fail here.
    <[T; N]>::try_from(elements).map_err(|elements: Vec<T>| arity_mismatch(elements.len()))
}

// -----------------------------------------------------------------------------
// Scalars

/// Extracts a leaf through the JSON value's own `Deserialize` support.
pub(crate) fn scalar_from_json<T>(json: &Value) -> Result<T, JsonError>
where
    T: for<'de> serde_core::Deserialize<'de>,
{
    T::deserialize(json).map_err(|_| {
        JsonError::from(ErrorKind::ScalarKindMismatch {
            expected: type_name::<T>(),
            found: JsonKind::of(json),
        })
    })
}

// -----------------------------------------------------------------------------
// Tests
