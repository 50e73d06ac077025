//! [`JsonMapped`](crate::JsonMapped) implementations for foreign types.
//!
//! ## Implemented Menu
//!
//! - scalar: `bool`, `char`, `i8`-`i64`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64`
//! - text: `String`
//! - dynamic sequence: `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`
//! - fixed sequence: `[T; N]`
//!
//! Structs implement it through `#[derive(JsonMapped)]`.

// -----------------------------------------------------------------------------
// Modules

mod array;
mod scalar;
mod sequence;
