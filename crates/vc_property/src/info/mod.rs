//! Property descriptors and per-type property tables.
//!
//! ## Menu
//!
//! - [`Type`]: The `TypeId` and type path of a declaring or value type.
//! - [`PropertyAccess`]: Read / write capability flags of a property.
//! - [`PropertyInfo`]: The descriptor of a single property, carrying its typed get/set handles.
//! - [`TypeProperties`]: The ordered property table of one type.
//! - [`Properties`]: A static accessor to a type's [`TypeProperties`].
//! - [`DynamicProperties`]: Dynamic dispatch for [`Properties`].
//! - [`NonGenericPropertiesCell`] and [`GenericPropertiesCell`]: Helpers for implementing [`Properties`].

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod properties;
mod property_access;
mod property_info;
mod ty;
mod type_properties;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericPropertiesCell, NonGenericPropertiesCell};
pub use properties::{DynamicProperties, Properties};
pub use property_access::PropertyAccess;
pub use property_info::PropertyInfo;
pub use ty::Type;
pub use type_properties::TypeProperties;
