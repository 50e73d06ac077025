//! Fully qualified paths of prelude items.
//!
//! Generated code must not rely on the caller's prelude, a user may shadow
//! `Option` or `Default` in the module where the derive is expanded.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$meta:meta])* $name:ident => $path:path;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($path));
                }
            }
        )*
    };
}

define_full_path! {
    /// `::core::option::Option`
    OptionFP => ::core::option::Option;
    /// `::core::result::Result`
    ResultFP => ::core::result::Result;
    /// `::core::default::Default`
    DefaultFP => ::core::default::Default;
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;

    use super::{DefaultFP, OptionFP, ResultFP};

    fn render(path: impl ToTokens) -> String {
        path.to_token_stream().to_string().replace(' ', "")
    }

    #[test]
    fn render_paths() {
        assert_eq!(render(OptionFP), "::core::option::Option");
        assert_eq!(render(ResultFP), "::core::result::Result");
        assert_eq!(render(DefaultFP), "::core::default::Default");
    }

    #[test]
    fn paths_parse_back() {
        for tokens in [
            OptionFP.to_token_stream(),
            ResultFP.to_token_stream(),
            DefaultFP.to_token_stream(),
        ] {
            let path: syn::Path = syn::parse2(tokens).unwrap();
            assert!(path.leading_colon.is_some());
            assert_eq!(path.segments.len(), 3);
        }
    }
}
