use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::MappedStruct;
use crate::path::fp::ResultFP;

/// Generate `JsonMapped` trait implementation tokens, delegating to the
/// aggregate traversal.
pub(super) fn impl_trait_json_mapped(info: &MappedStruct, kie_json_path: &syn::Path) -> TokenStream {
    let json_mapped_ = crate::path::json_mapped_(kie_json_path);
    let shape_ = crate::path::shape_(kie_json_path);
    let json_error_ = crate::path::json_error_(kie_json_path);
    let macro_exports_ = crate::path::macro_exports_(kie_json_path);

    let ident = info.ident;
    let generics = super::impl_generics(info, kie_json_path);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #json_mapped_ for #ident #ty_generics #where_clause {
            const SHAPE: #shape_ = #shape_::Aggregate;

            #[inline]
            fn to_json(&self) -> #macro_exports_::Value {
                #macro_exports_::aggregate_to_json(self)
            }

            #[inline]
            fn from_json(json: &#macro_exports_::Value) -> #ResultFP<Self, #json_error_> {
                #macro_exports_::aggregate_from_json(json)
            }
        }
    }
}
