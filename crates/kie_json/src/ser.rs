use alloc::string::String;

use serde_json::{Map, Value};

use crate::{Aggregate, JsonMapped, MemberRef};

// -----------------------------------------------------------------------------
// Entry points

/// Converts `value` to JSON.
///
/// # Rules
///
/// - Dynamic sequence: an array of converted elements, or `null` when empty.
/// - Fixed sequence: always an array of its full length.
/// - Aggregate: an object holding every [`Field`](crate::Field) member under its
///   tag, in declaration order. Other members are skipped. With no field
///   members at all the result is `null`.
/// - Scalar or text passed directly: `null`. Such values only produce JSON as
///   the value of a field or as a sequence element.
///
/// Serialization cannot fail, every decision is made by the type.
///
/// # Examples
///
/// ```
/// use kie_json::serialize;
/// use serde_json::json;
///
/// assert_eq!(serialize(&vec![1, 2, 3]), json!([1, 2, 3]));
/// assert_eq!(serialize(&Vec::<i32>::new()), json!(null));
/// assert_eq!(serialize(&[0_u8; 4]), json!([0, 0, 0, 0]));
/// assert_eq!(serialize(&7), json!(null));
/// ```
pub fn serialize<T: JsonMapped>(value: &T) -> Value {
    if T::SHAPE.is_leaf() {
        return Value::Null;
    }
    value.to_json()
}

/// Converts `value` to compact JSON text, following the rules of [`serialize`].
///
/// ```
/// assert_eq!(kie_json::serialize_to_string(&vec![1.5, 2.0]), "[1.5,2.0]");
/// assert_eq!(kie_json::serialize_to_string(&"text".to_owned()), "null");
/// ```
pub fn serialize_to_string<T: JsonMapped>(value: &T) -> String {
    serialize(value).to_string()
}

// -----------------------------------------------------------------------------
// Aggregate

/// The embedded conversion of an [`Aggregate`], used by derived
/// [`JsonMapped::to_json`] implementations.
pub fn aggregate_to_json<T: Aggregate>(value: &T) -> Value {
    let mut object = Map::new();

    for member in value.iter_members() {
        match member {
            MemberRef::Field(field) => {
                object.insert(field.tag().into(), field.write_json());
            }
            MemberRef::Plain(name) => {
                log::trace!(
                    "skip member `{name}` of `{}`: not a field",
                    core::any::type_name::<T>()
                );
            }
        }
    }

    if object.is_empty() {
        Value::Null
    } else {
        Value::Object(object)
    }
}

// -----------------------------------------------------------------------------
// Sequences

/// Dynamic sequences collapse to `null` when empty.
pub(crate) fn dynamic_to_json<'a, T, I>(items: I) -> Value
where
    T: JsonMapped + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let array: alloc::vec::Vec<Value> = items.into_iter().map(JsonMapped::to_json).collect();
    if array.is_empty() {
        Value::Null
    } else {
        Value::Array(array)
    }
}

pub(crate) fn fixed_to_json<T: JsonMapped>(items: &[T]) -> Value {
    Value::Array(items.iter().map(JsonMapped::to_json).collect())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use crate::{Aggregate, Field, JsonMapped, MemberRef, serialize, serialize_to_string};

    crate::define_tags! {
        I = "i";
        Ii = "ii";
        V = "v";
        InnerTag = "inner";
        InnerVec = "inner_vec";
        InnerArray = "inner_array";
        InnerRecognized = "inner_recognized";
    }

    #[derive(Default, Debug, Clone, JsonMapped)]
    struct Inner {
        i: Field<i32, I>,
        v: Field<Vec<i32>, V>,
    }

    #[derive(Default, Debug, JsonMapped)]
    struct Outer {
        i: Field<Vec<i32>, I>,
        b: bool,
        inner: Field<Inner, InnerTag>,
        inner_vec: Field<Vec<Inner>, InnerVec>,
    }

    #[derive(Default, JsonMapped)]
    struct Untagged {
        i: i32,
    }

    #[derive(Default, JsonMapped)]
    struct NoTagged {
        i: i32,
        b: bool,
        inner: Untagged,
    }

    #[derive(Default, JsonMapped)]
    struct Partial {
        i: Field<i32, Ii>,
        b: bool,
        inner: Untagged,
    }

    #[derive(Default, JsonMapped)]
    struct UntaggedInside {
        i: Field<i32, I>,
        b: bool,
        inner: Field<Untagged, InnerTag>,
    }

    #[derive(Default, JsonMapped)]
    struct Recognized {
        i: Field<i32, I>,
        b: bool,
        inner: Field<UntaggedInside, InnerRecognized>,
    }

    fn inner(i: i32, v: Vec<i32>) -> Inner {
        Inner {
            i: i.into(),
            v: v.into(),
        }
    }

    #[test]
    fn default_inner() {
        assert_eq!(serialize_to_string(&Inner::default()), r#"{"i":0,"v":null}"#);
    }

    #[test]
    fn struct_without_fields_is_null() {
        assert_eq!(serialize(&NoTagged::default()), json!(null));
        assert_eq!(serialize(&Untagged { i: 42 }), json!(null));
    }

    #[test]
    fn unit_struct_is_null() {
        #[derive(Default, JsonMapped)]
        struct Unit;

        assert_eq!(serialize(&Unit), json!(null));
        assert_eq!(Unit.member_len(), 0);
    }

    #[test]
    fn partial_structs() {
        assert_eq!(serialize_to_string(&Partial::default()), r#"{"ii":0}"#);

        let mut value = UntaggedInside::default();
        value.inner.i = 10;
        assert_eq!(serialize_to_string(&value), r#"{"i":0,"inner":null}"#);

        let mut value = Recognized::default();
        *value.inner.i = 20;
        assert_eq!(
            serialize_to_string(&value),
            r#"{"i":0,"inner_recognized":{"i":20,"inner":null}}"#
        );
    }

    #[test]
    fn complex_struct() {
        let mut outer = Outer {
            i: vec![1, 2, 3].into(),
            b: true,
            inner: inner(10, vec![1, 2, 3]).into(),
            inner_vec: Field::default(),
        };
        assert_eq!(
            serialize_to_string(&outer),
            r#"{"i":[1,2,3],"inner":{"i":10,"v":[1,2,3]},"inner_vec":null}"#
        );

        outer.inner_vec.set(vec![Inner::default(), inner(2, vec![1, 2, 3])]);
        assert_eq!(
            serialize_to_string(&outer),
            r#"{"i":[1,2,3],"inner":{"i":10,"v":[1,2,3]},"inner_vec":[{"i":0,"v":null},{"i":2,"v":[1,2,3]}]}"#
        );

        let fresh = Outer {
            inner_vec: outer.inner_vec.clone(),
            ..Outer::default()
        };
        assert_eq!(
            serialize_to_string(&fresh),
            r#"{"i":null,"inner":{"i":0,"v":null},"inner_vec":[{"i":0,"v":null},{"i":2,"v":[1,2,3]}]}"#
        );
    }

    #[test]
    fn fixed_array_of_aggregates() {
        #[derive(Default, JsonMapped)]
        struct WithArray {
            i: Field<Vec<i32>, I>,
            inner_array: Field<[Inner; 3], InnerArray>,
        }

        let value = WithArray {
            i: vec![1, 2].into(),
            inner_array: [inner(10, vec![1]), inner(10, vec![1]), inner(10, vec![1])].into(),
        };
        assert_eq!(
            serialize_to_string(&value),
            r#"{"i":[1,2],"inner_array":[{"i":10,"v":[1]},{"i":10,"v":[1]},{"i":10,"v":[1]}]}"#
        );

        let defaults = WithArray::default();
        assert_eq!(
            serialize(&defaults)["inner_array"],
            json!([{"i": 0, "v": null}, {"i": 0, "v": null}, {"i": 0, "v": null}])
        );
    }

    #[test]
    fn plain_members_are_enumerated_but_skipped() {
        let outer = Outer::default();
        let members = outer
            .iter_members()
            .map(|member| match member {
                MemberRef::Field(field) => field.tag(),
                MemberRef::Plain(name) => name,
            })
            .collect::<Vec<_>>();
        assert_eq!(members, ["i", "b", "inner", "inner_vec"]);
        assert_eq!(outer.iter_members().len(), 4);
        assert_eq!(outer.iter_members().filter_map(MemberRef::as_field).count(), 3);

        let json = serialize(&outer);
        assert!(json.get("b").is_none());
    }

    #[test]
    fn tuple_struct() {
        #[derive(Default, JsonMapped)]
        struct Pair(Field<i32, I>, u64, Field<Vec<i32>, V>);

        let pair = Pair(5.into(), 99, vec![7].into());
        assert_eq!(serialize(&pair), json!({"i": 5, "v": [7]}));
    }

    #[test]
    fn skip_and_force_attributes() {
        type Alias = Field<i32, Ii>;

        #[derive(Default, JsonMapped)]
        struct Marked {
            #[json(field)]
            alias: Alias,
            #[json(skip)]
            hidden: Field<i32, I>,
        }

        let value = Marked {
            alias: 1.into(),
            hidden: 2.into(),
        };
        assert_eq!(serialize(&value).to_string(), r#"{"ii":1}"#);
        assert_eq!(*value.hidden, 2);
    }

    #[test]
    fn generic_struct() {
        #[derive(Default, JsonMapped)]
        struct Wrapper<T> {
            items: Field<Vec<T>, V>,
        }

        let value = Wrapper::<u8> {
            items: vec![1, 2].into(),
        };
        assert_eq!(serialize(&value), json!({"v": [1, 2]}));
    }
}
