//! This independent module is used to provide the required paths,
//! so as to minimize changes when the `kie_json` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) use kie_macro_utils::full_path as fp;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `kie_json` crate.
///
/// 1. For crates that depend on `kie_json`, `::kie_json` is returned.
/// 2. For crates that depend on the `kie` facade, `::kie::json` is returned.
/// 3. For other situations, `::kie_json` is returned, but this may be incorrect.
///
/// The cost of this function is relatively high (reading and caching the
/// caller's `Cargo.toml`), so the path is passed around once obtained.
pub(crate) fn kie_json() -> syn::Path {
    kie_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("kie_json"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn aggregate_(kie_json_path: &syn::Path) -> TokenStream {
    quote! { #kie_json_path::Aggregate }
}

#[inline(always)]
pub(crate) fn json_mapped_(kie_json_path: &syn::Path) -> TokenStream {
    quote! { #kie_json_path::JsonMapped }
}

#[inline(always)]
pub(crate) fn mapped_field_(kie_json_path: &syn::Path) -> TokenStream {
    quote! { #kie_json_path::MappedField }
}

#[inline(always)]
pub(crate) fn member_ref_(kie_json_path: &syn::Path) -> TokenStream {
    quote! { #kie_json_path::MemberRef }
}

#[inline(always)]
pub(crate) fn member_mut_(kie_json_path: &syn::Path) -> TokenStream {
    quote! { #kie_json_path::MemberMut }
}

#[inline(always)]
pub(crate) fn shape_(kie_json_path: &syn::Path) -> TokenStream {
    quote! { #kie_json_path::Shape }
}

#[inline(always)]
pub(crate) fn json_error_(kie_json_path: &syn::Path) -> TokenStream {
    quote! { #kie_json_path::JsonError }
}

#[inline(always)]
pub(crate) fn macro_exports_(kie_json_path: &syn::Path) -> TokenStream {
    quote! { #kie_json_path::__macro_exports }
}
