//! Capability objects for reading and writing properties.
//!
//! A property can be accessed in three capacities:
//!
//! - getter: [`GetValue`], reads the value from an instance.
//! - setter: [`SetValue`], writes a value into an instance.
//! - full accessor: [`AccessValue`], both of the above on one object.
//!
//! These traits are object safe and work on `dyn Any` instances, so generic
//! code can drive properties discovered at runtime. Each call checks the
//! instance (and value) against the types the accessor was bound to and
//! returns an [`AccessError`] instead of touching a mismatched instance.
//!
//! When the concrete types are known at compile time, use the typed side:
//! [`PropertyGetter`], [`PropertySetter`] and [`PropertyAccessor`] implement
//! [`TypedGet`] / [`TypedSet`] without any runtime cast, and the erased
//! traits as well.
//!
//! # Construction
//!
//! | function                  | requires     | output                 |
//! | ------------------------- | ------------ | ---------------------- |
//! | [`build_full_accessor`]   | read + write | `Box<dyn AccessValue>` |
//! | [`build_getter_accessor`] | read         | `Box<dyn GetValue>`    |
//! | [`build_setter_accessor`] | write        | `Box<dyn SetValue>`    |
//! | [`build_typed_accessor`]  | read + write | [`PropertyAccessor`]   |
//! | [`build_typed_getter`]    | read         | [`PropertyGetter`]     |
//! | [`build_typed_setter`]    | write        | [`PropertySetter`]     |
//!
//! All of them return `Ok(None)` when the property does not support the
//! requested capability, and a [`BindError`] when the descriptor is not
//! consistent with what is requested.
//!
//! # Examples
//!
//! ```
//! use core::any::Any;
//! use vc_property::{PropertyInfo, access::{build_full_accessor, AccessError}};
//!
//! struct Point { x: i32 }
//! struct Other { x: i32 }
//!
//! let info = PropertyInfo::read_write::<Point, i32>("x", |p| p.x, |p, v| p.x = v);
//! let accessor = build_full_accessor(&info).unwrap().unwrap();
//!
//! let mut point = Point { x: 0 };
//! accessor.set_value(&mut point, Box::new(5_i32)).unwrap();
//!
//! let value: Box<dyn Any> = accessor.get_value(&point).unwrap();
//! assert_eq!(*value.downcast::<i32>().unwrap(), 5);
//!
//! let mut other = Other { x: 1 };
//! let err = accessor.set_value(&mut other, Box::new(5_i32)).unwrap_err();
//! assert!(matches!(err, AccessError::MismatchedInstance { .. }));
//! assert_eq!(other.x, 1);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod binding;
mod capability;
mod error;
mod factory;
mod handles;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use binding::Binding;
pub use capability::{AccessValue, BoundProperty, GetValue, SetValue};
pub use error::{AccessError, BindError};
pub use factory::{build_full_accessor, build_getter_accessor, build_setter_accessor};
pub use factory::{build_typed_accessor, build_typed_getter, build_typed_setter};
pub use typed::{PropertyAccessor, PropertyGetter, PropertySetter};
pub use typed::{TypedAccess, TypedGet, TypedSet};

pub(crate) use handles::{Handles, PropertyHandles};
