// -----------------------------------------------------------------------------
// Modules

mod aggregate;
mod json_mapped;

// -----------------------------------------------------------------------------
// Internal API

use aggregate::impl_trait_aggregate;
use json_mapped::impl_trait_json_mapped;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, WherePredicate, parse_quote};

use crate::derive_data::MappedStruct;
use crate::path::fp::DefaultFP;

/// Implement `Aggregate` and `JsonMapped` for a struct.
pub(crate) fn impl_mapped_struct(info: &MappedStruct) -> TokenStream {
    let kie_json_path = crate::path::kie_json();

    let aggregate_tokens = impl_trait_aggregate(info, &kie_json_path);
    let json_mapped_tokens = impl_trait_json_mapped(info, &kie_json_path);

    quote! {
        const _: () = {
            #aggregate_tokens

            #json_mapped_tokens
        };
    }
}

/// Generics of the generated impls.
///
/// Generic structs additionally require `Self: Default` and every field member
/// type to implement `MappedField`.
fn impl_generics(info: &MappedStruct, kie_json_path: &syn::Path) -> Generics {
    let mut generics = info.generics.clone();
    if generics.params.is_empty() {
        return generics;
    }

    let mapped_field_ = crate::path::mapped_field_(kie_json_path);
    let default_ = DefaultFP.to_token_stream();

    let where_clause = generics.make_where_clause();
    where_clause
        .predicates
        .push(parse_quote!(Self: #default_));
    for member in info.field_members() {
        let ty = member.ty;
        let predicate: WherePredicate = parse_quote!(#ty: #mapped_field_);
        where_clause.predicates.push(predicate);
    }

    generics
}
