use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, Lit};

/// The documentation of one property, if any.
///
/// By default, this will use the content of `#[doc = "..."]`, including the standard `/// ...` format.
/// But if the user explicitly adds `#[property(doc = "...")]`, this will switch to the custom document.
///
/// `enabled` field will only be true when feature `property_docs` is enabled.
#[derive(Debug)]
pub(crate) struct PropertyDocs {
    enabled: bool,
    is_custom: bool,
    docs: Vec<String>,
}

impl Default for PropertyDocs {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyDocs {
    #[inline]
    pub const fn new() -> Self {
        Self {
            enabled: cfg!(feature = "property_docs"),
            is_custom: false,
            docs: Vec::new(),
        }
    }

    /// Parse `#[doc = "..."]`.
    pub fn parse_default_docs(&mut self, value: &Expr) -> syn::Result<()> {
        if !self.enabled || self.is_custom {
            return Ok(());
        }
        match value {
            Expr::Lit(syn::ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) => {
                self.docs.push(lit_str.value());
                Ok(())
            }
            // e.g. `#[doc = include_str!(...)]`, not something we can inline.
            _ => Ok(()),
        }
    }

    /// Parse `#[property(doc = "...")]` or `#[property(doc = false)]`.
    pub fn parse_custom_docs(&mut self, lit: &Lit) -> syn::Result<()> {
        match lit {
            Lit::Str(lit_str) => {
                if self.enabled {
                    if !self.is_custom {
                        self.docs.clear();
                        self.is_custom = true;
                    }
                    self.docs.push(lit_str.value());
                }
                Ok(())
            }
            Lit::Bool(lit_bool) if !lit_bool.value() => {
                self.enabled = false;
                self.docs.clear();
                Ok(())
            }
            Lit::Bool(lit_bool) => Err(syn::Error::new(
                lit_bool.span(),
                "Explicit `true` is invalid, it's default value if `property_docs` feature is enabled.",
            )),
            _ => Err(syn::Error::new(lit.span(), "Expected a string or `false` literal")),
        }
    }

    fn doc_string(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        // `///` comments start with a space.
        let lines: Vec<&str> = self
            .docs
            .iter()
            .map(|line| line.strip_prefix(' ').unwrap_or(line))
            .collect();
        let doc = lines.join("\n");
        if doc.trim().is_empty() { None } else { Some(doc) }
    }

    /// If `property_docs` feature is disabled or there is no document,
    /// this function will return an empty token stream.
    ///
    /// Otherwise, it will return content similar to this:
    ///
    /// ```ignore
    /// .with_docs(::core::option::Option::Some("......"))
    /// ```
    pub fn get_expression_with(&self) -> TokenStream {
        match self.doc_string() {
            Some(doc) => quote! {
                .with_docs(::core::option::Option::Some(#doc))
            },
            None => TokenStream::new(),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
