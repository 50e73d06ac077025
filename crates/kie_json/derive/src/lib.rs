//! See the [`JsonMapped`](macro@JsonMapped) derive macro.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static JSON_ATTRIBUTE_NAME: &str = "json";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Opt-in JSON Mapping Derivation
///
/// `#[derive(JsonMapped)]` implements the following traits for a struct:
///
/// - `Aggregate`: enumerates the direct members in declaration order.
/// - `JsonMapped`: with `Shape::Aggregate`, converting through the members.
///
/// The struct must implement `Default`, deserialization starts from the
/// default value and only overwrites field members.
///
/// ## Field Members
///
/// A member whose type is written as `Field<T, Tag>` (any path ending in
/// `Field` with two generic arguments) takes part in the mapping under the
/// tag's text. Every other member is *plain*: enumerated, but never read or
/// written by the traversals.
///
/// ```rust, ignore
/// define_tags! {
///     I = "i";
///     V = "v";
/// }
///
/// #[derive(Default, JsonMapped)]
/// struct Inner {
///     i: Field<i32, I>,
///     v: Field<Vec<i32>, V>,
///     cache: bool, // plain
/// }
/// ```
///
/// Tuple structs and unit structs are supported; unit structs have no members
/// and therefore serialize to `null`.
///
/// ## Overriding Detection
///
/// Detection looks at the written type, so a type alias of `Field` is not
/// recognised. Mark such members with `#[json(field)]`. Conversely,
/// `#[json(skip)]` keeps a `Field` member out of the mapping.
///
/// ```rust, ignore
/// type Id = Field<u64, IdTag>;
///
/// #[derive(Default, JsonMapped)]
/// struct User {
///     #[json(field)]
///     id: Id,
///     #[json(skip)]
///     draft: Field<String, DraftTag>,
/// }
/// ```
///
/// These attributes can only be applied to members.
///
/// ## Generics
///
/// For generic structs the implementations require `Self: Default` and every
/// field member type to implement `MappedField`.
///
/// Enums and unions are not supported.
#[proc_macro_derive(JsonMapped, attributes(json))]
pub fn derive_json_mapped(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::MappedStruct::from_derive_input(&ast) {
        Ok(info) => impls::impl_mapped_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
