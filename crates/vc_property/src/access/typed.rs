use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::access::{AccessError, Binding, BoundProperty, GetValue, SetValue};

// -----------------------------------------------------------------------------
// Typed traits

/// Statically typed getter capability.
pub trait TypedGet<T, V> {
    /// Reads the property from `instance`.
    fn get(&self, instance: &T) -> V;
}

/// Statically typed setter capability.
pub trait TypedSet<T, V> {
    /// Writes `value` into `instance`.
    fn set(&self, instance: &mut T, value: V);
}

/// Statically typed full capability.
///
/// Implemented for every type that implements [`TypedGet`] and [`TypedSet`].
pub trait TypedAccess<T, V>: TypedGet<T, V> + TypedSet<T, V> {}

impl<T, V, A: TypedGet<T, V> + TypedSet<T, V> + ?Sized> TypedAccess<T, V> for A {}

// -----------------------------------------------------------------------------
// PropertyGetter

/// A getter bound to a function `fn(&T) -> V`.
///
/// Non-capturing closures coerce to the function pointer.
///
/// # Examples
///
/// ```
/// use vc_property::access::{PropertyGetter, TypedGet};
///
/// struct Foo { name: String }
///
/// let getter = PropertyGetter::<Foo, usize>::new("name_len", |f| f.name.len());
/// let foo = Foo { name: "four".into() };
///
/// assert_eq!(getter.get(&foo), 4);
/// assert_eq!(getter.binding().name(), "name_len");
/// ```
pub struct PropertyGetter<T, V> {
    binding: Binding,
    get: fn(&T) -> V,
}

impl<T: Any, V: Any> PropertyGetter<T, V> {
    /// Creates a getter of property `name`.
    #[inline]
    pub fn new(name: &'static str, get: fn(&T) -> V) -> Self {
        Self::bound(Binding::new::<T, V>(name), get)
    }

    #[inline]
    pub(crate) const fn bound(binding: Binding, get: fn(&T) -> V) -> Self {
        Self { binding, get }
    }
}

impl<T, V> PropertyGetter<T, V> {
    /// Returns the property this getter is bound to.
    #[inline]
    pub const fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Returns the bound function.
    #[inline]
    pub const fn function(&self) -> fn(&T) -> V {
        self.get
    }
}

impl<T, V> TypedGet<T, V> for PropertyGetter<T, V> {
    #[inline]
    fn get(&self, instance: &T) -> V {
        (self.get)(instance)
    }
}

impl<T, V> Clone for PropertyGetter<T, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for PropertyGetter<T, V> {}

impl<T, V> fmt::Debug for PropertyGetter<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyGetter")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

impl<T: Any, V: Any> BoundProperty for PropertyGetter<T, V> {
    #[inline]
    fn binding(&self) -> &Binding {
        &self.binding
    }
}

impl<T: Any, V: Any> GetValue for PropertyGetter<T, V> {
    fn get_value(&self, instance: &dyn Any) -> Result<Box<dyn Any>, AccessError> {
        let Some(instance) = instance.downcast_ref::<T>() else {
            return Err(AccessError::instance(&self.binding));
        };
        Ok(Box::new((self.get)(instance)))
    }
}

// -----------------------------------------------------------------------------
// PropertySetter

/// A setter bound to a function `fn(&mut T, V)`.
///
/// Non-capturing closures coerce to the function pointer.
///
/// # Examples
///
/// ```
/// use vc_property::access::{PropertySetter, TypedSet};
///
/// struct Foo { id: u32 }
///
/// let setter = PropertySetter::<Foo, u32>::new("id", |f, id| f.id = id);
/// let mut foo = Foo { id: 0 };
///
/// setter.set(&mut foo, 7);
/// assert_eq!(foo.id, 7);
/// ```
pub struct PropertySetter<T, V> {
    binding: Binding,
    set: fn(&mut T, V),
}

impl<T: Any, V: Any> PropertySetter<T, V> {
    /// Creates a setter of property `name`.
    #[inline]
    pub fn new(name: &'static str, set: fn(&mut T, V)) -> Self {
        Self::bound(Binding::new::<T, V>(name), set)
    }

    #[inline]
    pub(crate) const fn bound(binding: Binding, set: fn(&mut T, V)) -> Self {
        Self { binding, set }
    }
}

impl<T, V> PropertySetter<T, V> {
    /// Returns the property this setter is bound to.
    #[inline]
    pub const fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Returns the bound function.
    #[inline]
    pub const fn function(&self) -> fn(&mut T, V) {
        self.set
    }
}

impl<T, V> TypedSet<T, V> for PropertySetter<T, V> {
    #[inline]
    fn set(&self, instance: &mut T, value: V) {
        (self.set)(instance, value);
    }
}

impl<T, V> Clone for PropertySetter<T, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for PropertySetter<T, V> {}

impl<T, V> fmt::Debug for PropertySetter<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySetter")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

impl<T: Any, V: Any> BoundProperty for PropertySetter<T, V> {
    #[inline]
    fn binding(&self) -> &Binding {
        &self.binding
    }
}

impl<T: Any, V: Any> SetValue for PropertySetter<T, V> {
    fn set_value(&self, instance: &mut dyn Any, value: Box<dyn Any>) -> Result<(), AccessError> {
        // Check both sides before writing anything.
        let Some(instance) = instance.downcast_mut::<T>() else {
            return Err(AccessError::instance(&self.binding));
        };
        let Ok(value) = value.downcast::<V>() else {
            return Err(AccessError::value(&self.binding));
        };
        (self.set)(instance, *value);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// PropertyAccessor

/// A full accessor bound to a getter and a setter function.
///
/// # Examples
///
/// ```
/// use vc_property::access::{PropertyAccessor, TypedGet, TypedSet};
///
/// struct Point { x: i32 }
///
/// let accessor = PropertyAccessor::<Point, i32>::new("x", |p| p.x, |p, x| p.x = x);
/// let mut p = Point { x: 0 };
///
/// accessor.set(&mut p, 5);
/// assert_eq!(accessor.get(&p), 5);
///
/// let (getter, setter) = (accessor.getter(), accessor.setter());
/// setter.set(&mut p, 6);
/// assert_eq!(getter.get(&p), 6);
/// ```
pub struct PropertyAccessor<T, V> {
    binding: Binding,
    get: fn(&T) -> V,
    set: fn(&mut T, V),
}

impl<T: Any, V: Any> PropertyAccessor<T, V> {
    /// Creates a full accessor of property `name`.
    #[inline]
    pub fn new(name: &'static str, get: fn(&T) -> V, set: fn(&mut T, V)) -> Self {
        Self::bound(Binding::new::<T, V>(name), get, set)
    }

    #[inline]
    pub(crate) const fn bound(binding: Binding, get: fn(&T) -> V, set: fn(&mut T, V)) -> Self {
        Self { binding, get, set }
    }
}

impl<T, V> PropertyAccessor<T, V> {
    /// Returns the property this accessor is bound to.
    #[inline]
    pub const fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Returns the getter half.
    #[inline]
    pub const fn getter(&self) -> PropertyGetter<T, V> {
        PropertyGetter {
            binding: self.binding,
            get: self.get,
        }
    }

    /// Returns the setter half.
    #[inline]
    pub const fn setter(&self) -> PropertySetter<T, V> {
        PropertySetter {
            binding: self.binding,
            set: self.set,
        }
    }
}

impl<T, V> TypedGet<T, V> for PropertyAccessor<T, V> {
    #[inline]
    fn get(&self, instance: &T) -> V {
        (self.get)(instance)
    }
}

impl<T, V> TypedSet<T, V> for PropertyAccessor<T, V> {
    #[inline]
    fn set(&self, instance: &mut T, value: V) {
        (self.set)(instance, value);
    }
}

impl<T, V> Clone for PropertyAccessor<T, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for PropertyAccessor<T, V> {}

impl<T, V> fmt::Debug for PropertyAccessor<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyAccessor")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

impl<T: Any, V: Any> BoundProperty for PropertyAccessor<T, V> {
    #[inline]
    fn binding(&self) -> &Binding {
        &self.binding
    }
}

impl<T: Any, V: Any> GetValue for PropertyAccessor<T, V> {
    #[inline]
    fn get_value(&self, instance: &dyn Any) -> Result<Box<dyn Any>, AccessError> {
        self.getter().get_value(instance)
    }
}

impl<T: Any, V: Any> SetValue for PropertyAccessor<T, V> {
    #[inline]
    fn set_value(&self, instance: &mut dyn Any, value: Box<dyn Any>) -> Result<(), AccessError> {
        self.setter().set_value(instance, value)
    }
}

// -----------------------------------------------------------------------------
// Tests
