#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::kie_json::...` paths. Inside this crate (unit tests
// and doctests) that name must also resolve, hence the alias.
extern crate self as kie_json;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod de;
mod error;
mod field;
mod mapped;
mod ser;
mod shape;
mod tag;

pub mod impls;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use de::{aggregate_from_json, deserialize, deserialize_str};
pub use error::{ErrorKind, JsonError, JsonPath, PathSegment};
pub use field::{Field, FieldWrapper};
pub use mapped::{Aggregate, MappedField, MemberIter, MemberMut, MemberRef};
pub use mapped::{DynamicSequence, FixedSequence, JsonMapped};
pub use ser::{aggregate_to_json, serialize, serialize_to_string};
pub use shape::{JsonKind, Shape};
pub use tag::Tag;

pub use kie_json_derive as derive;
pub use kie_json_derive::JsonMapped;

pub use serde_json::Value;
