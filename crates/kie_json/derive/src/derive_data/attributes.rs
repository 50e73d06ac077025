use proc_macro2::Span;
use syn::{Attribute, spanned::Spanned};

use crate::JSON_ATTRIBUTE_NAME;

/// How a member was marked with `#[json(...)]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MemberMode {
    /// No marker, detect from the written type.
    #[default]
    Detect,
    /// `#[json(field)]`
    Field,
    /// `#[json(skip)]`
    Skip,
}

/// Member-level attributes.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub mode: MemberMode,
    pub mode_span: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(JSON_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let mode = if meta.path.is_ident("field") {
                    MemberMode::Field
                } else if meta.path.is_ident("skip") {
                    MemberMode::Skip
                } else {
                    return Err(meta.error("unsupported attribute, expected `field` or `skip`"));
                };

                if let Some(previous) = result.mode_span
                    && result.mode != mode
                {
                    let mut err = meta.error("`field` and `skip` are mutually exclusive");
                    err.combine(syn::Error::new(previous, "previously marked here"));
                    return Err(err);
                }

                result.mode = mode;
                result.mode_span = Some(meta.path.span());
                Ok(())
            })?;
        }

        Ok(result)
    }

    /// Rejects `#[json(...)]` where only member attributes make sense.
    pub fn reject_on_type(attrs: &[Attribute]) -> syn::Result<()> {
        match attrs.iter().find(|attr| attr.path().is_ident(JSON_ATTRIBUTE_NAME)) {
            Some(attr) => Err(syn::Error::new(
                attr.span(),
                "`#[json(...)]` can only be applied to struct members",
            )),
            None => Ok(()),
        }
    }
}
