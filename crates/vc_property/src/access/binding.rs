use core::any::Any;

use crate::info::Type;

// -----------------------------------------------------------------------------
// Binding

/// The property an accessor is bound to: its name, declaring type and value type.
///
/// Every accessor carries one, see [`BoundProperty`](crate::access::BoundProperty).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Binding {
    name: &'static str,
    owner: Type,
    value: Type,
}

impl Binding {
    /// Creates a binding of property `name`, declared on `T` with value type `V`.
    #[inline]
    pub fn new<T: Any, V: Any>(name: &'static str) -> Self {
        Self {
            name,
            owner: Type::of::<T>(),
            value: Type::of::<V>(),
        }
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declaring type.
    #[inline]
    pub const fn owner(&self) -> Type {
        self.owner
    }

    /// Returns the value type.
    #[inline]
    pub const fn value(&self) -> Type {
        self.value
    }
}
