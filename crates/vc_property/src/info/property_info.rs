use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use crate::access::{AccessValue, BindError, Binding, GetValue, SetValue};
use crate::access::{Handles, PropertyHandles};
use crate::access::{PropertyAccessor, PropertyGetter, PropertySetter};
use crate::info::{PropertyAccess, Type};

// -----------------------------------------------------------------------------
// PropertyInfo

/// The descriptor of a single property.
///
/// It records the property name, the declaring type, the value type, the
/// [`PropertyAccess`] flags and the typed get/set functions. Accessors are
/// built from it with the functions in [`access`](crate::access), or with the
/// shortcut methods on this type.
///
/// Cloning is cheap, the handles are shared.
///
/// # Examples
///
/// ```
/// use vc_property::PropertyInfo;
///
/// struct Point { x: i32 }
///
/// let info = PropertyInfo::read_write::<Point, i32>(
///     "x",
///     |p| p.x,
///     |p, x| p.x = x,
/// );
///
/// assert_eq!(info.name(), "x");
/// assert!(info.owner().is::<Point>());
/// assert!(info.value().is::<i32>());
/// assert!(info.can_read() && info.can_write());
///
/// let mut point = Point { x: 1 };
/// let accessor = info.full_accessor().unwrap().unwrap();
/// accessor.set_value_from(&mut point, 5_i32).unwrap();
/// assert_eq!(point.x, 5);
/// ```
#[derive(Clone)]
pub struct PropertyInfo {
    binding: Binding,
    access: PropertyAccess,
    handles: Arc<dyn PropertyHandles>,
    #[cfg(feature = "property_docs")]
    docs: Option<&'static str>,
}

impl PropertyInfo {
    /// Creates a readable and writable property.
    #[inline]
    pub fn read_write<T: Any, V: Any>(
        name: &'static str,
        get: fn(&T) -> V,
        set: fn(&mut T, V),
    ) -> Self {
        Self::from_parts(name, PropertyAccess::READ_WRITE, Some(get), Some(set))
    }

    /// Creates a read-only property, e.g. a computed value.
    #[inline]
    pub fn read_only<T: Any, V: Any>(name: &'static str, get: fn(&T) -> V) -> Self {
        Self::from_parts(name, PropertyAccess::READ, Some(get), None)
    }

    /// Creates a write-only property.
    #[inline]
    pub fn write_only<T: Any, V: Any>(name: &'static str, set: fn(&mut T, V)) -> Self {
        Self::from_parts(name, PropertyAccess::WRITE, None, Some(set))
    }

    /// Creates a property from raw parts.
    ///
    /// The flags and the handles are not checked against each other here.
    /// The flags decide which accessors are available; a flag without the
    /// matching handle makes accessor construction fail with a [`BindError`].
    ///
    /// ```
    /// use vc_property::{PropertyInfo, BindError, info::PropertyAccess};
    ///
    /// struct Foo { a: u8 }
    ///
    /// // Claims to be writable, but has no setter.
    /// let info = PropertyInfo::from_parts::<Foo, u8>(
    ///     "a",
    ///     PropertyAccess::READ_WRITE,
    ///     Some(|f| f.a),
    ///     None,
    /// );
    ///
    /// assert!(info.getter().unwrap().is_some());
    /// assert!(matches!(info.setter(), Err(BindError::MissingSetter { .. })));
    /// ```
    pub fn from_parts<T: Any, V: Any>(
        name: &'static str,
        access: PropertyAccess,
        get: Option<fn(&T) -> V>,
        set: Option<fn(&mut T, V)>,
    ) -> Self {
        Self {
            binding: Binding::new::<T, V>(name),
            access,
            handles: Arc::new(Handles { get, set }),
            #[cfg(feature = "property_docs")]
            docs: None,
        }
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.binding.name()
    }

    /// Returns the declaring type.
    #[inline]
    pub const fn owner(&self) -> Type {
        self.binding.owner()
    }

    /// Returns the value type.
    #[inline]
    pub const fn value(&self) -> Type {
        self.binding.value()
    }

    /// Returns the capability flags.
    #[inline]
    pub const fn access(&self) -> PropertyAccess {
        self.access
    }

    /// Returns `true` if the property reports read support.
    #[inline]
    pub const fn can_read(&self) -> bool {
        self.access.can_read()
    }

    /// Returns `true` if the property reports write support.
    #[inline]
    pub const fn can_write(&self) -> bool {
        self.access.can_write()
    }

    /// Returns the [`Binding`] accessors built from this property carry.
    #[inline]
    pub const fn binding(&self) -> &Binding {
        &self.binding
    }

    #[inline]
    pub(crate) fn handles(&self) -> &dyn PropertyHandles {
        &*self.handles
    }

    /// Replaces the property documentation.
    #[cfg(feature = "property_docs")]
    #[inline]
    pub fn with_docs(self, docs: Option<&'static str>) -> Self {
        Self { docs, ..self }
    }

    /// Returns the property documentation, if any.
    #[cfg(feature = "property_docs")]
    #[inline]
    pub const fn docs(&self) -> Option<&'static str> {
        self.docs
    }

    /// See [`build_full_accessor`](crate::access::build_full_accessor).
    #[inline]
    pub fn full_accessor(&self) -> Result<Option<Box<dyn AccessValue>>, BindError> {
        crate::access::build_full_accessor(self)
    }

    /// See [`build_getter_accessor`](crate::access::build_getter_accessor).
    #[inline]
    pub fn getter(&self) -> Result<Option<Box<dyn GetValue>>, BindError> {
        crate::access::build_getter_accessor(self)
    }

    /// See [`build_setter_accessor`](crate::access::build_setter_accessor).
    #[inline]
    pub fn setter(&self) -> Result<Option<Box<dyn SetValue>>, BindError> {
        crate::access::build_setter_accessor(self)
    }

    /// See [`build_typed_accessor`](crate::access::build_typed_accessor).
    #[inline]
    pub fn typed_accessor<T: Any, V: Any>(
        &self,
    ) -> Result<Option<PropertyAccessor<T, V>>, BindError> {
        crate::access::build_typed_accessor(self)
    }

    /// See [`build_typed_getter`](crate::access::build_typed_getter).
    #[inline]
    pub fn typed_getter<T: Any, V: Any>(&self) -> Result<Option<PropertyGetter<T, V>>, BindError> {
        crate::access::build_typed_getter(self)
    }

    /// See [`build_typed_setter`](crate::access::build_typed_setter).
    #[inline]
    pub fn typed_setter<T: Any, V: Any>(&self) -> Result<Option<PropertySetter<T, V>>, BindError> {
        crate::access::build_typed_setter(self)
    }
}

impl fmt::Debug for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name())
            .field("owner", &self.owner())
            .field("value", &self.value())
            .field("access", &self.access)
            .finish()
    }
}
