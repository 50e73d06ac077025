use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;

use crate::derive_data::{MappedStruct, MemberKind};
use crate::path::fp::OptionFP;

/// Generate `Aggregate` trait implementation tokens.
pub(super) fn impl_trait_aggregate(info: &MappedStruct, kie_json_path: &syn::Path) -> TokenStream {
    let aggregate_ = crate::path::aggregate_(kie_json_path);
    let member_ref_ = crate::path::member_ref_(kie_json_path);
    let member_mut_ = crate::path::member_mut_(kie_json_path);

    let member_count = info.members.len();
    let member_indices = (0..member_count).collect::<Vec<usize>>();

    let mut members_ref = Vec::with_capacity(member_count);
    let mut members_mut = Vec::with_capacity(member_count);

    for member in &info.members {
        let access = &member.member;
        let name = &member.name;
        match member.kind {
            MemberKind::Field => {
                // Spanned on the type, a non-`Field` type marked `#[json(field)]`
                // reports the missing `MappedField` impl there.
                let span = member.ty.span();
                members_ref.push(quote_spanned! {span=>
                    #OptionFP::Some(#member_ref_::Field(&self.#access))
                });
                members_mut.push(quote_spanned! {span=>
                    #OptionFP::Some(#member_mut_::Field(&mut self.#access))
                });
            }
            MemberKind::Plain => {
                members_ref.push(quote! { #OptionFP::Some(#member_ref_::Plain(#name)) });
                members_mut.push(quote! { #OptionFP::Some(#member_mut_::Plain(#name)) });
            }
        }
    }

    let ident = info.ident;
    let generics = super::impl_generics(info, kie_json_path);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #aggregate_ for #ident #ty_generics #where_clause {
            #[inline]
            fn member_len(&self) -> usize {
                #member_count
            }

            fn member_at(&self, index: usize) -> #OptionFP<#member_ref_<'_>> {
                match index {
                    #(#member_indices => #members_ref,)*
                    _ => #OptionFP::None,
                }
            }

            fn member_at_mut(&mut self, index: usize) -> #OptionFP<#member_mut_<'_>> {
                match index {
                    #(#member_indices => #members_mut,)*
                    _ => #OptionFP::None,
                }
            }
        }
    }
}
