use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Lit, LitStr, Meta};

use super::PropertyDocs;
use crate::PROPERTY_ATTRIBUTE_NAME;

/// Which handles are generated for a field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldAccess {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

/// Attributes of one field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[property(skip)]`
    pub skip: Option<Span>,
    /// `#[property(read_only)]` or `#[property(write_only)]`
    pub access: FieldAccess,
    access_span: Option<Span>,
    /// `#[property(rename = "...")]`
    pub rename: Option<LitStr>,
    /// `/// ...` or `#[property(doc = ...)]`
    pub docs: PropertyDocs,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident("doc") {
                if let Meta::NameValue(pair) = &attr.meta {
                    this.docs.parse_default_docs(&pair.value)?;
                }
                continue;
            }
            if !attr.path().is_ident(PROPERTY_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| this.parse_meta(&meta))?;
        }

        Ok(this)
    }

    fn parse_meta(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("skip") {
            if self.skip.is_some() {
                return Err(meta.error("duplicate `skip`"));
            }
            self.skip = Some(meta.path.span());
        } else if meta.path.is_ident("read_only") {
            self.set_access(meta, FieldAccess::ReadOnly)?;
        } else if meta.path.is_ident("write_only") {
            self.set_access(meta, FieldAccess::WriteOnly)?;
        } else if meta.path.is_ident("rename") {
            if self.rename.is_some() {
                return Err(meta.error("duplicate `rename`"));
            }
            let name: LitStr = meta.value()?.parse()?;
            if name.value().is_empty() {
                return Err(syn::Error::new(name.span(), "property name cannot be empty"));
            }
            self.rename = Some(name);
        } else if meta.path.is_ident("doc") {
            let lit: Lit = meta.value()?.parse()?;
            self.docs.parse_custom_docs(&lit)?;
        } else if meta.path.is_ident("auto_register") || meta.path.is_ident("computed") {
            return Err(meta.error("this attribute is only valid on the type"));
        } else {
            return Err(meta.error(
                "unsupported field attribute, expected `skip`, `read_only`, `write_only`, `rename` or `doc`",
            ));
        }
        Ok(())
    }

    fn set_access(&mut self, meta: &ParseNestedMeta, access: FieldAccess) -> syn::Result<()> {
        if self.access_span.is_some() {
            return Err(meta.error(if self.access == access {
                "duplicate access attribute"
            } else {
                "`read_only` and `write_only` cannot be combined"
            }));
        }
        self.access = access;
        self.access_span = Some(meta.path.span());
        Ok(())
    }

    /// Rejects attributes that make no sense on a skipped field.
    pub fn validity(&self) -> syn::Result<()> {
        if self.skip.is_none() {
            return Ok(());
        }
        if let Some(span) = self.access_span {
            return Err(syn::Error::new(span, "a skipped field has no access to restrict"));
        }
        if let Some(name) = &self.rename {
            return Err(syn::Error::new(name.span(), "a skipped field cannot be renamed"));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use syn::Field;

    use super::{FieldAccess, FieldAttributes};

    fn parse(field: Field) -> syn::Result<FieldAttributes> {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        attrs.validity()?;
        Ok(attrs)
    }

    #[test]
    fn field_attributes() {
        let attrs = parse(syn::parse_quote! {
            /// The displayed name.
            #[property(rename = "displayName", read_only)]
            pub display_name: String
        })
        .unwrap();
        assert_eq!(attrs.access, FieldAccess::ReadOnly);
        assert_eq!(attrs.rename.unwrap().value(), "displayName");
        assert!(attrs.skip.is_none());

        let attrs = parse(syn::parse_quote! {
            #[property(skip)]
            cache: Vec<u8>
        })
        .unwrap();
        assert!(attrs.skip.is_some());
        assert_eq!(attrs.access, FieldAccess::ReadWrite);
    }

    #[test]
    fn conflicting_attributes() {
        assert!(parse(syn::parse_quote! {
            #[property(read_only, write_only)]
            a: u8
        })
        .is_err());
        assert!(parse(syn::parse_quote! {
            #[property(read_only)]
            #[property(read_only)]
            a: u8
        })
        .is_err());
        assert!(parse(syn::parse_quote! {
            #[property(skip, rename = "b")]
            a: u8
        })
        .is_err());
        assert!(parse(syn::parse_quote! {
            #[property(rename = "")]
            a: u8
        })
        .is_err());
        assert!(parse(syn::parse_quote! {
            #[property(auto_register)]
            a: u8
        })
        .is_err());
    }
}
