use core::fmt;

use serde_json::Value;

// -----------------------------------------------------------------------------
// Shape

/// The structural category of a Rust type, as seen by the traversals.
///
/// Every [`JsonMapped`](crate::JsonMapped) type declares exactly one shape,
/// which selects the conversion rule applied to it:
///
/// | Shape             | standalone `serialize`             | as field value / element |
/// |-------------------|------------------------------------|--------------------------|
/// | `Scalar`, `Text`  | `null`                             | JSON scalar              |
/// | `DynamicSequence` | array, `null` if empty             | same                     |
/// | `FixedSequence`   | array of `len`                     | same                     |
/// | `Aggregate`       | object, `null` if no field members | same                     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Numbers, booleans and characters.
    Scalar,
    /// String-like values. Leaves, never traversed as aggregates.
    Text,
    /// A sequence whose length is part of its type, such as `[T; N]`.
    FixedSequence { len: usize },
    /// A sequence whose length varies at runtime, such as `Vec<T>`.
    DynamicSequence,
    /// A struct whose members are enumerated through [`Aggregate`](crate::Aggregate).
    Aggregate,
}

impl Shape {
    /// Returns `true` for [`Shape::Scalar`] and [`Shape::Text`].
    #[inline]
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Scalar | Self::Text)
    }

    #[inline]
    pub const fn is_fixed_sequence(self) -> bool {
        matches!(self, Self::FixedSequence { .. })
    }

    #[inline]
    pub const fn is_dynamic_sequence(self) -> bool {
        matches!(self, Self::DynamicSequence)
    }

    #[inline]
    pub const fn is_sequence(self) -> bool {
        self.is_fixed_sequence() || self.is_dynamic_sequence()
    }

    #[inline]
    pub const fn is_aggregate(self) -> bool {
        matches!(self, Self::Aggregate)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Text => f.pad("Text"),
            Self::FixedSequence { len } => write!(f, "FixedSequence({len})"),
            Self::DynamicSequence => f.pad("DynamicSequence"),
            Self::Aggregate => f.pad("Aggregate"),
        }
    }
}

// -----------------------------------------------------------------------------
// JsonKind

/// The runtime kind of a JSON [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    #[inline]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("null"),
            Self::Bool => f.pad("boolean"),
            Self::Number => f.pad("number"),
            Self::String => f.pad("string"),
            Self::Array => f.pad("array"),
            Self::Object => f.pad("object"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
