use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::JsonKind;

// -----------------------------------------------------------------------------
// ErrorKind

/// What went wrong while reading JSON.
///
/// A dynamic sequence that meets a non-array JSON value is deliberately absent
/// here: it degrades to an empty sequence instead of failing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input text is not well-formed JSON.
    #[error("malformed JSON text: {0}")]
    Parse(#[source] serde_json::Error),

    /// A field member has no matching key in the JSON object.
    #[error("missing required field `{tag}` of `{type_name}` in JSON {found}")]
    MissingField {
        tag: &'static str,
        type_name: &'static str,
        found: JsonKind,
    },

    /// A JSON leaf has a kind, or a numeric range, incompatible with the target.
    #[error("cannot read `{expected}` from JSON {found}")]
    ScalarKindMismatch {
        expected: &'static str,
        found: JsonKind,
    },

    /// A fixed sequence met a JSON value that is not an array.
    #[error("expected a JSON array for `{type_name}`, found JSON {found}")]
    NotAnArray {
        type_name: &'static str,
        found: JsonKind,
    },

    /// A fixed sequence met a JSON array of a different length.
    #[error("`{type_name}` holds exactly {expected} elements, found a JSON array of {found}")]
    ArityMismatch {
        type_name: &'static str,
        expected: usize,
        found: usize,
    },
}

// -----------------------------------------------------------------------------
// JsonError

/// An error raised by [`deserialize`](crate::deserialize) and
/// [`deserialize_str`](crate::deserialize_str).
///
/// Besides its [`ErrorKind`] it records where in the document the failure
/// happened, e.g. `$.inner_vec[1].i`.
#[derive(Debug, Error)]
#[error("{kind}{}", .path.location())]
pub struct JsonError {
    kind: ErrorKind,
    path: JsonPath,
}

impl JsonError {
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Location of the failing value, `$` for the document root.
    #[inline]
    pub fn path(&self) -> &JsonPath {
        &self.path
    }

    #[inline]
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse(_))
    }

    #[inline]
    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingField { .. })
    }

    #[inline]
    pub fn is_scalar_kind_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::ScalarKindMismatch { .. })
    }

    #[cold]
    pub(crate) fn within_field(mut self, tag: &'static str) -> Self {
        self.path.reversed.push(PathSegment::Field(tag));
        self
    }

    #[cold]
    pub(crate) fn within_index(mut self, index: usize) -> Self {
        self.path.reversed.push(PathSegment::Index(index));
        self
    }
}

impl From<ErrorKind> for JsonError {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: JsonPath::default(),
        }
    }
}

// -----------------------------------------------------------------------------
// JsonPath

/// One step from a JSON value into a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member under a field tag.
    Field(&'static str),
    /// Array element.
    Index(usize),
}

/// A location inside a JSON document, displayed as `$.outer[2].inner`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPath {
    // Innermost segment first, segments are added while an error unwinds.
    reversed: Vec<PathSegment>,
}

impl JsonPath {
    #[inline]
    pub fn is_root(&self) -> bool {
        self.reversed.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    /// Segments from the document root inwards.
    #[inline]
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &PathSegment> + ExactSizeIterator {
        self.reversed.iter().rev()
    }

    fn location(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            alloc::format!(" at `{self}`")
        }
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.segments() {
            match segment {
                PathSegment::Field(tag) => write!(f, ".{tag}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests
