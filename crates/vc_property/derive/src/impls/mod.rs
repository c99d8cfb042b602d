//! Code generation.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod properties;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::PropertyStruct;

/// Generate the `Properties` implementation and, if requested, the
/// auto registration of the deriving type.
pub(crate) fn impl_properties(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let data = PropertyStruct::from_ast(ast)?;
    let vc_property_path = crate::path::vc_property();

    let properties_impl = properties::get_properties_impl(&data, &vc_property_path);
    let auto_register_impl = auto_register::get_auto_register_impl(&data, &vc_property_path);

    Ok(quote! {
        #properties_impl

        #auto_register_impl
    })
}
