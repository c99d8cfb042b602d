use proc_macro2::TokenStream;
use syn::Path;

use crate::derive_data::PropertyStruct;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(data: &PropertyStruct, vc_property_path: &Path) -> TokenStream {
    use quote::quote_spanned;

    let Some(span) = data.attrs.auto_register else {
        return TokenStream::new();
    };
    // Invalid for generic types.
    if data.impl_with_generic() {
        return TokenStream::new();
    }

    let ident = data.ident;
    quote_spanned! { span =>
        #vc_property_path::__macro_exports::auto_register::inventory::submit!{
            #vc_property_path::__macro_exports::auto_register::__AutoRegisterFunc(
                <#ident as #vc_property_path::__macro_exports::auto_register::__RegisterType>::__register
            )
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &PropertyStruct, _: &Path) -> TokenStream {
    TokenStream::new()
}
