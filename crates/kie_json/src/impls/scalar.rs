use alloc::string::{String, ToString};

use serde_json::Value;

use crate::de::scalar_from_json;
use crate::{JsonError, JsonMapped, Shape};

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl JsonMapped for $ty {
                const SHAPE: Shape = Shape::Scalar;

                #[inline]
                fn to_json(&self) -> Value {
                    Value::from(*self)
                }

                #[inline]
                fn from_json(json: &Value) -> Result<Self, JsonError> {
                    scalar_from_json(json)
                }
            }
        )*
    };
}

impl_scalar!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl JsonMapped for char {
    const SHAPE: Shape = Shape::Scalar;

    #[inline]
    fn to_json(&self) -> Value {
        Value::String(self.to_string())
    }

    #[inline]
    fn from_json(json: &Value) -> Result<Self, JsonError> {
        scalar_from_json(json)
    }
}

impl JsonMapped for String {
    const SHAPE: Shape = Shape::Text;

    #[inline]
    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }

    #[inline]
    fn from_json(json: &Value) -> Result<Self, JsonError> {
        scalar_from_json(json)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use serde_json::json;

    use crate::{ErrorKind, JsonKind, JsonMapped, deserialize, serialize};

    #[test]
    fn standalone_leaves_serialize_to_null() {
        assert_eq!(serialize(&1_i32), json!(null));
        assert_eq!(serialize(&'a'), json!(null));
        assert_eq!(serialize(&String::from("hello")), json!(null));
        assert_eq!(serialize(&true), json!(null));
        assert_eq!(serialize(&1.1_f64), json!(null));
    }

    #[test]
    fn embedded_leaves() {
        assert_eq!(7_u8.to_json(), json!(7));
        assert_eq!((-3_i64).to_json(), json!(-3));
        assert_eq!(false.to_json(), json!(false));
        assert_eq!('x'.to_json(), json!("x"));
        assert_eq!(String::from("kie").to_json(), json!("kie"));
        assert_eq!(f64::NAN.to_json(), json!(null));
    }

    #[test]
    fn extract_leaves() {
        assert_eq!(deserialize::<i32>(&json!(-5)).unwrap(), -5);
        assert_eq!(deserialize::<f64>(&json!(2)).unwrap(), 2.0);
        assert!(deserialize::<bool>(&json!(true)).unwrap());
        assert_eq!(deserialize::<char>(&json!("z")).unwrap(), 'z');
        assert_eq!(deserialize::<String>(&json!("s")).unwrap(), "s");
    }

    #[test]
    fn kind_mismatch() {
        let err = deserialize::<i32>(&json!("1")).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::ScalarKindMismatch {
                expected: "i32",
                found: JsonKind::String
            }
        ));

        assert!(deserialize::<String>(&json!(null)).unwrap_err().is_scalar_kind_mismatch());
        assert!(deserialize::<bool>(&json!(0)).unwrap_err().is_scalar_kind_mismatch());
        assert!(deserialize::<i32>(&json!(1.5)).unwrap_err().is_scalar_kind_mismatch());
    }

    #[test]
    fn out_of_range() {
        let err = deserialize::<u8>(&json!(300)).unwrap_err();
        assert!(err.is_scalar_kind_mismatch());
        assert!(deserialize::<u32>(&json!(-1)).is_err());
    }
}
