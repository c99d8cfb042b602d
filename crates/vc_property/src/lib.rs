#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_property::...` paths, the alias lets the crate's
// own tests and doctests use the macro as any downstream crate would.
extern crate self as vc_property;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod utils;

pub mod access;
pub mod info;
pub mod registry;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use vc_property_derive as derive;

pub use access::{AccessError, BindError};
pub use info::{Properties, PropertyInfo};
