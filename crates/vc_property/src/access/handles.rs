use alloc::boxed::Box;
use core::any::Any;

use crate::access::{AccessValue, Binding, GetValue, SetValue};
use crate::access::{PropertyAccessor, PropertyGetter, PropertySetter};

// -----------------------------------------------------------------------------
// PropertyHandles

/// The type-erased get/set functions stored in a `PropertyInfo`.
///
/// The only implementation is [`Handles`], the trait exists so that the
/// descriptor does not need the declaring and value types as parameters.
pub(crate) trait PropertyHandles: Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    fn has_getter(&self) -> bool;

    fn has_setter(&self) -> bool;

    fn erased_getter(&self, binding: Binding) -> Option<Box<dyn GetValue>>;

    fn erased_setter(&self, binding: Binding) -> Option<Box<dyn SetValue>>;

    fn erased_accessor(&self, binding: Binding) -> Option<Box<dyn AccessValue>>;
}

// -----------------------------------------------------------------------------
// Handles

pub(crate) struct Handles<T, V> {
    pub get: Option<fn(&T) -> V>,
    pub set: Option<fn(&mut T, V)>,
}

impl<T: Any, V: Any> Handles<T, V> {
    #[inline]
    pub fn getter(&self, binding: Binding) -> Option<PropertyGetter<T, V>> {
        self.get.map(|get| PropertyGetter::bound(binding, get))
    }

    #[inline]
    pub fn setter(&self, binding: Binding) -> Option<PropertySetter<T, V>> {
        self.set.map(|set| PropertySetter::bound(binding, set))
    }

    #[inline]
    pub fn accessor(&self, binding: Binding) -> Option<PropertyAccessor<T, V>> {
        match (self.get, self.set) {
            (Some(get), Some(set)) => Some(PropertyAccessor::bound(binding, get, set)),
            _ => None,
        }
    }
}

impl<T: Any, V: Any> PropertyHandles for Handles<T, V> {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn has_getter(&self) -> bool {
        self.get.is_some()
    }

    #[inline]
    fn has_setter(&self) -> bool {
        self.set.is_some()
    }

    fn erased_getter(&self, binding: Binding) -> Option<Box<dyn GetValue>> {
        self.getter(binding)
            .map(|getter| Box::new(getter) as Box<dyn GetValue>)
    }

    fn erased_setter(&self, binding: Binding) -> Option<Box<dyn SetValue>> {
        self.setter(binding)
            .map(|setter| Box::new(setter) as Box<dyn SetValue>)
    }

    fn erased_accessor(&self, binding: Binding) -> Option<Box<dyn AccessValue>> {
        self.accessor(binding)
            .map(|accessor| Box::new(accessor) as Box<dyn AccessValue>)
    }
}
