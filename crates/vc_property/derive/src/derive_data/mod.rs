//! Parse the deriving type into a list of properties.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod property_docs;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use field_attributes::FieldAttributes;
use property_docs::PropertyDocs;

pub(crate) use field_attributes::FieldAccess;
pub(crate) use type_attributes::{ComputedProperty, TypeAttributes};

use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Index, Member, Type};

// -----------------------------------------------------------------------------
// PropertyField

/// A property backed by a struct field.
pub(crate) struct PropertyField<'a> {
    pub name: String,
    pub member: Member,
    pub ty: &'a Type,
    pub access: FieldAccess,
    pub docs: PropertyDocs,
}

// -----------------------------------------------------------------------------
// PropertyStruct

/// The parsed deriving type.
pub(crate) struct PropertyStruct<'a> {
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
    pub fields: Vec<PropertyField<'a>>,
}

impl<'a> PropertyStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        let fields = match &ast.data {
            Data::Struct(data) => &data.fields,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Properties` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Properties` cannot be derived for unions",
                ));
            }
        };

        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Properties` requires `'static` types, lifetime parameters are not supported",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
        let fields = parse_fields(fields)?;

        let this = Self {
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
            fields,
        };
        this.check_names()?;
        Ok(this)
    }

    /// Whether the table depends on generic parameters.
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some() || self.generics.const_params().next().is_some()
    }

    fn check_names(&self) -> syn::Result<()> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            if seen.contains(&field.name.as_str()) {
                return Err(syn::Error::new(
                    field.member.span(),
                    format!("duplicate property name `{}`", field.name),
                ));
            }
            seen.push(&field.name);
        }

        let mut computed_names: Vec<String> = Vec::with_capacity(self.attrs.computed.len());
        for computed in &self.attrs.computed {
            let name = computed.name.value();
            if name.is_empty() {
                return Err(syn::Error::new(computed.name.span(), "property name cannot be empty"));
            }
            if seen.contains(&name.as_str()) || computed_names.contains(&name) {
                return Err(syn::Error::new(
                    computed.name.span(),
                    format!("duplicate property name `{name}`"),
                ));
            }
            computed_names.push(name);
        }
        Ok(())
    }
}

fn parse_fields(fields: &Fields) -> syn::Result<Vec<PropertyField<'_>>> {
    let mut result = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        attrs.validity()?;
        if attrs.skip.is_some() {
            continue;
        }

        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };

        let name = match (&attrs.rename, &field.ident) {
            (Some(rename), _) => rename.value(),
            // Raw identifiers are listed without the `r#` prefix.
            (None, Some(ident)) => {
                let name = ident.to_string();
                name.strip_prefix("r#").map(str::to_owned).unwrap_or(name)
            }
            (None, None) => index.to_string(),
        };

        result.push(PropertyField {
            name,
            member,
            ty: &field.ty,
            access: attrs.access,
            docs: attrs.docs,
        });
    }

    Ok(result)
}

// -----------------------------------------------------------------------------
// Tests
