use syn::{Data, DeriveInput, Fields, Generics, Ident, Index, Member, PathArguments, Type};

use super::{FieldAttributes, MemberMode};

/// Whether a member takes part in the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MemberKind {
    /// A `Field<T, Tag>` member.
    Field,
    /// Any other member.
    Plain,
}

/// One direct member of the deriving struct.
pub(crate) struct StructMember<'a> {
    /// `self.#member` access.
    pub member: Member,
    /// Declared name, or the position for tuple structs.
    pub name: String,
    pub ty: &'a Type,
    pub kind: MemberKind,
}

/// A struct prepared for code generation.
pub(crate) struct MappedStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub members: Vec<StructMember<'a>>,
}

impl<'a> MappedStruct<'a> {
    pub fn from_derive_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        FieldAttributes::reject_on_type(&ast.attrs)?;

        let fields = match &ast.data {
            Data::Struct(data) => &data.fields,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`JsonMapped` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`JsonMapped` cannot be derived for unions",
                ));
            }
        };

        let members = match fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
        };

        let members = members
            .into_iter()
            .enumerate()
            .map(|(index, field)| {
                let attrs = FieldAttributes::parse_attrs(&field.attrs)?;

                let kind = match attrs.mode {
                    MemberMode::Field => MemberKind::Field,
                    MemberMode::Skip => MemberKind::Plain,
                    MemberMode::Detect if is_field_type(&field.ty) => MemberKind::Field,
                    MemberMode::Detect => MemberKind::Plain,
                };

                let (member, name) = match &field.ident {
                    Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
                    None => (Member::Unnamed(Index::from(index)), index.to_string()),
                };

                Ok(StructMember {
                    member,
                    name,
                    ty: &field.ty,
                    kind,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            members,
        })
    }

    /// Members that take part in the mapping.
    pub fn field_members(&self) -> impl Iterator<Item = &StructMember<'a>> {
        self.members
            .iter()
            .filter(|member| member.kind == MemberKind::Field)
    }
}

/// `true` if `ty` is written as `Field<_, _>`, possibly behind a path.
fn is_field_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            type_path.path.segments.last().is_some_and(|segment| {
                segment.ident == "Field"
                    && matches!(
                        &segment.arguments,
                        PathArguments::AngleBracketed(args) if args.args.len() == 2
                    )
            })
        }
        Type::Group(group) => is_field_type(&group.elem),
        Type::Paren(paren) => is_field_type(&paren.elem),
        _ => false,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::{MappedStruct, MemberKind, is_field_type};

    #[test]
    fn detects_field_types() {
        assert!(is_field_type(&parse_quote!(Field<i32, I>)));
        assert!(is_field_type(&parse_quote!(kie_json::Field<Vec<Inner>, V>)));
        assert!(!is_field_type(&parse_quote!(Field<i32>)));
        assert!(!is_field_type(&parse_quote!(bool)));
        assert!(!is_field_type(&parse_quote!(Vec<Field<i32, I>>)));
        assert!(!is_field_type(&parse_quote!(&'static Field<i32, I>)));
    }

    #[test]
    fn member_kinds() {
        let ast: DeriveInput = parse_quote! {
            struct A {
                i: Field<Vec<i32>, I>,
                b: bool,
                #[json(skip)]
                hidden: Field<i32, H>,
                #[json(field)]
                alias: Alias,
            }
        };
        let info = MappedStruct::from_derive_input(&ast).unwrap();
        let kinds = info.members.iter().map(|m| m.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                MemberKind::Field,
                MemberKind::Plain,
                MemberKind::Plain,
                MemberKind::Field
            ]
        );
        let names = info.field_members().map(|m| m.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["i", "alias"]);
    }

    #[test]
    fn tuple_members_are_positional() {
        let ast: DeriveInput = parse_quote! {
            struct T(Field<i32, I>, u8);
        };
        let info = MappedStruct::from_derive_input(&ast).unwrap();
        assert_eq!(info.members[0].name, "0");
        assert_eq!(info.members[1].name, "1");
        assert_eq!(info.members[1].kind, MemberKind::Plain);
    }

    #[test]
    fn rejects_enums_and_conflicts() {
        let ast: DeriveInput = parse_quote! {
            enum E { A }
        };
        assert!(MappedStruct::from_derive_input(&ast).is_err());

        let ast: DeriveInput = parse_quote! {
            struct S {
                #[json(skip, field)]
                a: Field<i32, A>,
            }
        };
        assert!(MappedStruct::from_derive_input(&ast).is_err());

        let ast: DeriveInput = parse_quote! {
            #[json(skip)]
            struct S;
        };
        assert!(MappedStruct::from_derive_input(&ast).is_err());
    }
}
