use alloc::collections::{LinkedList, VecDeque};
use alloc::vec::Vec;

use serde_json::Value;

use crate::de::dynamic_from_json;
use crate::ser::dynamic_to_json;
use crate::{DynamicSequence, JsonError, JsonMapped, Shape};

macro_rules! impl_dynamic_sequence {
    ($ty:ident, $with_capacity:expr, $push:path) => {
        impl<T: JsonMapped> JsonMapped for $ty<T> {
            const SHAPE: Shape = Shape::DynamicSequence;

            #[inline]
            fn to_json(&self) -> Value {
                dynamic_to_json(self)
            }

            #[inline]
            fn from_json(json: &Value) -> Result<Self, JsonError> {
                dynamic_from_json(json, $with_capacity, $push)
            }
        }

        impl<T: JsonMapped> DynamicSequence for $ty<T> {
            type Element = T;
        }
    };
}

impl_dynamic_sequence!(Vec, Vec::with_capacity, Vec::push);
impl_dynamic_sequence!(VecDeque, VecDeque::with_capacity, VecDeque::push_back);
impl_dynamic_sequence!(LinkedList, |_| LinkedList::new(), LinkedList::push_back);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::{LinkedList, VecDeque};
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use crate::{PathSegment, deserialize, deserialize_str, serialize};

    #[test]
    fn serialize_vec() {
        assert_eq!(serialize(&vec![1]).to_string(), "[1]");
        assert_eq!(serialize(&vec![1, 2]).to_string(), "[1,2]");
        assert_eq!(serialize(&vec![1, 2, 3]).to_string(), "[1,2,3]");
        assert_eq!(serialize(&Vec::<i32>::new()).to_string(), "null");
        assert_eq!(serialize(&vec![1.1, 1.2, 1.3]).to_string(), "[1.1,1.2,1.3]");
    }

    #[test]
    fn serialize_list_and_deque() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(serialize(&list).to_string(), "[1,2,3]");
        assert_eq!(serialize(&LinkedList::<i32>::new()).to_string(), "null");

        let deque: VecDeque<f64> = [1.1, 1.2].into_iter().collect();
        assert_eq!(serialize(&deque).to_string(), "[1.1,1.2]");
        assert_eq!(serialize(&VecDeque::<f64>::new()).to_string(), "null");
    }

    #[test]
    fn nested_empty_collapses_to_null() {
        let nested = vec![vec![1], Vec::new()];
        assert_eq!(serialize(&nested), json!([[1], null]));
    }

    #[test]
    fn strings_are_elements() {
        let names = vec![String::from("a"), String::from("b")];
        assert_eq!(serialize(&names), json!(["a", "b"]));
        assert_eq!(deserialize::<Vec<String>>(&json!(["a", "b"])).unwrap(), names);
    }

    #[test]
    fn deserialize_vec() {
        assert_eq!(deserialize_str::<Vec<i32>>("[1]").unwrap(), [1]);
        assert_eq!(deserialize_str::<Vec<i32>>("[1,2]").unwrap(), [1, 2]);
        assert_eq!(deserialize_str::<Vec<i32>>("[1,2,3]").unwrap(), [1, 2, 3]);
        assert_eq!(deserialize_str::<Vec<i32>>("null").unwrap(), Vec::<i32>::new());
        assert_eq!(
            deserialize_str::<Vec<f64>>("[1.1,1.2,1.3]").unwrap(),
            [1.1, 1.2, 1.3]
        );
    }

    #[test]
    fn deserialize_list_and_deque() {
        let list = deserialize_str::<LinkedList<i32>>("[1,2,3]").unwrap();
        assert_eq!(list, [1, 2, 3].into_iter().collect::<LinkedList<_>>());
        assert!(deserialize_str::<LinkedList<i32>>("null").unwrap().is_empty());

        let deque = deserialize_str::<VecDeque<i32>>("[4,5]").unwrap();
        assert_eq!(deque, [4, 5]);
    }

    #[test]
    fn wrong_shape_is_empty() {
        for json in [json!(null), json!(1), json!("x"), json!({"a": [1]}), json!(true)] {
            assert!(deserialize::<Vec<i32>>(&json).unwrap().is_empty(), "{json}");
        }
    }

    #[test]
    fn element_errors_carry_index() {
        let err = deserialize::<Vec<i32>>(&json!([1, "two", 3])).unwrap_err();
        assert!(err.is_scalar_kind_mismatch());
        assert_eq!(
            err.path().segments().copied().collect::<Vec<_>>(),
            [PathSegment::Index(1)]
        );
    }

    #[test]
    fn capacity_is_reserved() {
        let v = deserialize::<Vec<u8>>(&json!([1, 2, 3, 4, 5])).unwrap();
        assert!(v.capacity() >= 5);
        assert_eq!(v.len(), 5);
    }
}
