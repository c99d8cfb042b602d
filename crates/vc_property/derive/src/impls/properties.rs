use proc_macro2::{TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{Ident, Path, Type};

use crate::derive_data::{ComputedProperty, FieldAccess, PropertyField, PropertyStruct};

/// Generate the `Properties` implementation.
///
/// ```ignore
/// impl Properties for Foo {
///     fn type_properties() -> &'static TypeProperties {
///         static CELL: NonGenericPropertiesCell = NonGenericPropertiesCell::new();
///         CELL.get_or_init(|| TypeProperties::new::<Self>([
///             PropertyInfo::read_write::<Self, u32>("a", |this| ..., |this, value| ...),
///             // ...
///         ]))
///     }
/// }
/// ```
pub(crate) fn get_properties_impl(data: &PropertyStruct, vc_property_path: &Path) -> TokenStream {
    let ident = data.ident;
    let (impl_generics, ty_generics, where_clause) = split_generics(data);

    let properties_ = quote!(#vc_property_path::info::Properties);
    let type_properties_ = quote!(#vc_property_path::info::TypeProperties);
    let property_info_ = quote!(#vc_property_path::PropertyInfo);

    let field_infos = data
        .fields
        .iter()
        .map(|field| field_info_tokens(field, &property_info_));
    let computed_infos = data
        .attrs
        .computed
        .iter()
        .map(|computed| computed_info_tokens(computed, &property_info_));

    let init = quote! {
        || #type_properties_::new::<Self>([
            #(#field_infos,)*
            #(#computed_infos,)*
        ])
    };

    let body = if data.impl_with_generic() {
        let cell_ = quote!(#vc_property_path::info::GenericPropertiesCell);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(#init)
        }
    } else {
        let cell_ = quote!(#vc_property_path::info::NonGenericPropertiesCell);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(#init)
        }
    };

    quote! {
        impl #impl_generics #properties_ for #ident #ty_generics #where_clause {
            fn type_properties() -> &'static #type_properties_ {
                #body
            }
        }
    }
}

fn field_info_tokens(field: &PropertyField, property_info_: &TokenStream) -> TokenStream {
    let name = &field.name;
    let member = &field.member;
    let ty = field.ty;
    let with_docs = field.docs.get_expression_with();

    let get = quote! {
        |this: &Self| -> #ty { ::core::clone::Clone::clone(&this.#member) }
    };
    let set = quote! {
        |this: &mut Self, value: #ty| { this.#member = value; }
    };

    match field.access {
        FieldAccess::ReadWrite => quote! {
            #property_info_::read_write::<Self, #ty>(#name, #get, #set) #with_docs
        },
        FieldAccess::ReadOnly => quote! {
            #property_info_::read_only::<Self, #ty>(#name, #get) #with_docs
        },
        FieldAccess::WriteOnly => quote! {
            #property_info_::write_only::<Self, #ty>(#name, #set) #with_docs
        },
    }
}

fn computed_info_tokens(computed: &ComputedProperty, property_info_: &TokenStream) -> TokenStream {
    let name = &computed.name;
    let ty = &computed.ty;
    let with_docs = computed.docs.get_expression_with();

    // The explicit fn pointer types give readable errors on signature mismatch.
    match (&computed.get, &computed.set) {
        (Some(get), Some(set)) => quote! {
            #property_info_::read_write::<Self, #ty>(
                #name,
                (#get) as fn(&Self) -> #ty,
                (#set) as fn(&mut Self, #ty),
            ) #with_docs
        },
        (Some(get), None) => quote! {
            #property_info_::read_only::<Self, #ty>(#name, (#get) as fn(&Self) -> #ty) #with_docs
        },
        (None, Some(set)) => quote! {
            #property_info_::write_only::<Self, #ty>(#name, (#set) as fn(&mut Self, #ty)) #with_docs
        },
        // Rejected while parsing.
        (None, None) => TokenStream::new(),
    }
}

// -----------------------------------------------------------------------------
// Generics

/// Split the generics, adding the bounds the generated code relies on.
///
/// - `Self: Any` when there are type parameters.
/// - `T: Any` for property types that mention a type parameter.
/// - `T: Clone` for readable field types that mention a type parameter.
fn split_generics<'a>(
    data: &'a PropertyStruct,
) -> (syn::ImplGenerics<'a>, syn::TypeGenerics<'a>, TokenStream) {
    let generics = data.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let type_param_idents: Vec<Ident> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();

    let mut predicates: Vec<TokenStream> = Vec::new();

    if let Some(where_clause) = where_clause {
        predicates.extend(where_clause.predicates.iter().map(ToTokens::to_token_stream));
    }

    if !type_param_idents.is_empty() {
        predicates.push(quote!(Self: ::core::any::Any));

        let mentions_param = |ty: &Type| is_any_ident_in_token_stream(&type_param_idents, ty.to_token_stream());

        for field in &data.fields {
            if !mentions_param(field.ty) {
                continue;
            }
            let ty = field.ty;
            if field.access == FieldAccess::WriteOnly {
                predicates.push(quote!(#ty: ::core::any::Any));
            } else {
                predicates.push(quote!(#ty: ::core::any::Any + ::core::clone::Clone));
            }
        }
        for computed in &data.attrs.computed {
            if mentions_param(&computed.ty) {
                let ty = &computed.ty;
                predicates.push(quote!(#ty: ::core::any::Any));
            }
        }
    }

    let where_clause = if predicates.is_empty() {
        TokenStream::new()
    } else {
        quote!(where #(#predicates,)*)
    };

    (impl_generics, ty_generics, where_clause)
}

// Do any of the identifiers in `idents` appear in `token_stream`?
fn is_any_ident_in_token_stream(idents: &[Ident], token_stream: TokenStream) -> bool {
    token_stream.into_iter().any(|token_tree| match token_tree {
        TokenTree::Ident(ident) => idents.contains(&ident),
        TokenTree::Group(group) => is_any_ident_in_token_stream(idents, group.stream()),
        _ => false,
    })
}

// -----------------------------------------------------------------------------
// Tests
