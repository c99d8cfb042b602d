use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, Lit, LitStr, Type};

use super::PropertyDocs;
use crate::PROPERTY_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// ComputedProperty

/// `#[property(computed(name = "...", ty = T, get = ..., set = ..., doc = "..."))]`
pub(crate) struct ComputedProperty {
    pub name: LitStr,
    pub ty: Type,
    pub get: Option<Expr>,
    pub set: Option<Expr>,
    pub docs: PropertyDocs,
}

impl ComputedProperty {
    fn parse(meta: &ParseNestedMeta) -> syn::Result<Self> {
        let span = meta.path.span();
        let mut name: Option<LitStr> = None;
        let mut ty: Option<Type> = None;
        let mut get: Option<Expr> = None;
        let mut set: Option<Expr> = None;
        let mut docs = PropertyDocs::new();

        meta.parse_nested_meta(|inner| {
            if inner.path.is_ident("name") {
                check_unset(&inner, name.is_some())?;
                name = Some(inner.value()?.parse()?);
            } else if inner.path.is_ident("ty") {
                check_unset(&inner, ty.is_some())?;
                ty = Some(inner.value()?.parse()?);
            } else if inner.path.is_ident("get") {
                check_unset(&inner, get.is_some())?;
                get = Some(inner.value()?.parse()?);
            } else if inner.path.is_ident("set") {
                check_unset(&inner, set.is_some())?;
                set = Some(inner.value()?.parse()?);
            } else if inner.path.is_ident("doc") {
                let lit: Lit = inner.value()?.parse()?;
                docs.parse_custom_docs(&lit)?;
            } else {
                return Err(inner.error(
                    "unsupported key in `computed(...)`, expected `name`, `ty`, `get`, `set` or `doc`",
                ));
            }
            Ok(())
        })?;

        let Some(name) = name else {
            return Err(syn::Error::new(span, "`computed(...)` requires `name = \"...\"`"));
        };
        let Some(ty) = ty else {
            return Err(syn::Error::new(span, "`computed(...)` requires `ty = <type>`"));
        };
        if get.is_none() && set.is_none() {
            return Err(syn::Error::new(
                span,
                "`computed(...)` requires `get = ...`, `set = ...` or both",
            ));
        }

        Ok(Self {
            name,
            ty,
            get,
            set,
            docs,
        })
    }
}

fn check_unset(meta: &ParseNestedMeta, already_set: bool) -> syn::Result<()> {
    if already_set {
        Err(meta.error("duplicate key"))
    } else {
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes of the deriving type.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[property(auto_register)]`
    pub auto_register: Option<Span>,
    /// `#[property(computed(...))]`, in declaration order.
    pub computed: Vec<ComputedProperty>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(PROPERTY_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| this.parse_meta(&meta))?;
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("auto_register") {
            if self.auto_register.is_some() {
                return Err(meta.error("duplicate `auto_register`"));
            }
            self.auto_register = Some(meta.path.span());
            Ok(())
        } else if meta.path.is_ident("computed") {
            self.computed.push(ComputedProperty::parse(meta)?);
            Ok(())
        } else if meta.path.is_ident("skip")
            || meta.path.is_ident("read_only")
            || meta.path.is_ident("write_only")
            || meta.path.is_ident("rename")
        {
            Err(meta.error("this attribute is only valid on fields"))
        } else {
            Err(meta.error("unsupported type attribute, expected `auto_register` or `computed(...)`"))
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::TypeAttributes;

    fn parse(input: DeriveInput) -> syn::Result<TypeAttributes> {
        TypeAttributes::parse_attrs(&input.attrs)
    }

    #[test]
    fn computed_and_auto_register() {
        let attrs = parse(syn::parse_quote! {
            #[derive(Properties)]
            #[property(auto_register)]
            #[property(computed(name = "area", ty = f32, get = Self::area))]
            #[property(computed(name = "scale", ty = f32, get = |r: &Self| r.s, set = Self::set_scale))]
            struct Rect;
        })
        .unwrap();

        assert!(attrs.auto_register.is_some());
        assert_eq!(attrs.computed.len(), 2);
        assert_eq!(attrs.computed[0].name.value(), "area");
        assert!(attrs.computed[0].set.is_none());
        assert!(attrs.computed[1].get.is_some() && attrs.computed[1].set.is_some());
    }

    #[test]
    fn rejects_incomplete_computed() {
        assert!(parse(syn::parse_quote! {
            #[property(computed(name = "area", get = Self::area))]
            struct Rect;
        })
        .is_err());
        assert!(parse(syn::parse_quote! {
            #[property(computed(name = "area", ty = f32))]
            struct Rect;
        })
        .is_err());
        assert!(parse(syn::parse_quote! {
            #[property(computed(name = "a", name = "b", ty = f32, get = Self::a))]
            struct Rect;
        })
        .is_err());
    }

    #[test]
    fn rejects_field_attributes() {
        assert!(parse(syn::parse_quote! {
            #[property(read_only)]
            struct Rect;
        })
        .is_err());
        assert!(parse(syn::parse_quote! {
            #[property(unknown)]
            struct Rect;
        })
        .is_err());
    }
}
