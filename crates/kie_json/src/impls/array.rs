use serde_json::Value;

use crate::de::fixed_from_json;
use crate::ser::fixed_to_json;
use crate::{FixedSequence, JsonError, JsonMapped, Shape};

impl<T: JsonMapped, const N: usize> JsonMapped for [T; N] {
    const SHAPE: Shape = Shape::FixedSequence { len: N };

    #[inline]
    fn to_json(&self) -> Value {
        fixed_to_json(self)
    }

    #[inline]
    fn from_json(json: &Value) -> Result<Self, JsonError> {
        fixed_from_json(json)
    }
}

impl<T: JsonMapped, const N: usize> FixedSequence for [T; N] {
    type Element = T;

    const LEN: usize = N;
}

// -----------------------------------------------------------------------------
// Tests
