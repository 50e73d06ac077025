//! Items used by code generated by `kie_json_derive`. Not public API.

pub use serde_json::Value;

pub use crate::de::aggregate_from_json;
pub use crate::ser::aggregate_to_json;
