//! Provide a registry for looking up property tables at runtime.
//!
//! ## Menu
//!
//! - [`PropertyRegistry`]: Property tables keyed by `TypeId`, type path and type name.
//!
//! ## auto_register
//!
//! See [`PropertyRegistry::auto_register`] .
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//!
//! If it is not supported, the function returns `false` without causing any errors.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod property_registry;

// -----------------------------------------------------------------------------
// Exports

pub use property_registry::PropertyRegistry;
