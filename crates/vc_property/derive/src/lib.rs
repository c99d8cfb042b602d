//! See following macros:
//!
//! - [`Properties`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static PROPERTY_ATTRIBUTE_NAME: &str = "property";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Property Table Derivation
///
/// `#[derive(Properties)]` implements `vc_property::info::Properties` for a
/// struct, listing one `PropertyInfo` per field.
///
/// - Named fields are listed under their name, tuple fields under their
///   index (`"0"`, `"1"`, ...).
/// - Unit structs have an empty table.
/// - Enums, unions and types with lifetime parameters are rejected.
///
/// Readable fields are read by cloning, so their types must implement
/// `Clone`. All property types must be `'static`.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Properties)]
/// struct Account {
///     // Read-write (default).
///     id: u64,
///     // Only a getter is generated.
///     #[property(read_only)]
///     created: u64,
///     // Only a setter is generated.
///     #[property(write_only)]
///     password_hash: u64,
///     // Listed as `displayName`.
///     #[property(rename = "displayName")]
///     display_name: String,
///     // Not listed at all.
///     #[property(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// `read_only` and `write_only` cannot be combined.
///
/// ## Computed Properties
///
/// Properties without a backing field are declared at the type level with a
/// name, a value type and a getter and/or setter function:
///
/// ```rust, ignore
/// #[derive(Properties)]
/// #[property(computed(name = "area", ty = f32, get = Self::area))]
/// #[property(computed(name = "scale", ty = f32, get = Self::scale, set = Self::set_scale))]
/// struct Rect { w: f32, h: f32 }
///
/// impl Rect {
///     fn area(&self) -> f32 { self.w * self.h }
///     fn scale(&self) -> f32 { /* ... */ }
///     fn set_scale(&mut self, scale: f32) { /* ... */ }
/// }
/// ```
///
/// `get` must coerce to `fn(&Self) -> T` and `set` to `fn(&mut Self, T)`,
/// a method path or a non-capturing closure both work.
///
/// Computed properties are listed after the fields, in attribute order.
/// Property names must be unique.
///
/// ## Auto Registration
///
/// ```rust, ignore
/// #[derive(Properties)]
/// #[property(auto_register)]
/// struct Light { intensity: f32 }
/// ```
///
/// Submits the type for `PropertyRegistry::auto_register`. This is a no-op
/// for generic types, and when the `auto_register` feature is disabled.
///
/// ## Documentation
///
/// With the `property_docs` feature, the doc comments of fields are kept in
/// `PropertyInfo::docs`. `#[property(doc = "...")]` replaces them and
/// `#[property(doc = false)]` drops them. Computed properties only take the
/// `doc` key inside `computed(...)`.
#[proc_macro_derive(Properties, attributes(property))]
pub fn derive_properties(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impls::impl_properties(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
