use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::access::{AccessError, Binding};

// -----------------------------------------------------------------------------
// BoundProperty

/// Shared base of every accessor, exposing what it was bound to.
pub trait BoundProperty: Send + Sync {
    /// Returns the property this accessor was constructed for.
    fn binding(&self) -> &Binding;
}

// -----------------------------------------------------------------------------
// GetValue

/// The getter capability.
///
/// # Examples
///
/// ```
/// use vc_property::access::{GetValue, PropertyGetter};
///
/// struct Circle { r: f64 }
///
/// let getter: Box<dyn GetValue> = Box::new(
///     PropertyGetter::<Circle, f64>::new("diameter", |c| c.r * 2.0)
/// );
///
/// let circle = Circle { r: 1.5 };
/// assert_eq!(getter.get_value_as::<f64>(&circle).unwrap(), 3.0);
/// assert!(getter.get_value_as::<f32>(&circle).is_err());
/// assert!(getter.get_value(&1_u8).is_err());
/// ```
pub trait GetValue: BoundProperty {
    /// Reads the property from `instance`.
    ///
    /// Fails with [`AccessError::MismatchedInstance`] if `instance` is not
    /// the declaring type.
    fn get_value(&self, instance: &dyn Any) -> Result<Box<dyn Any>, AccessError>;
}

impl dyn GetValue {
    /// Reads the property from `instance` as a `V`.
    ///
    /// Fails with [`AccessError::MismatchedRequest`] if `V` is not the value type.
    pub fn get_value_as<V: Any>(&self, instance: &dyn Any) -> Result<V, AccessError> {
        let binding = self.binding();
        if !binding.value().is::<V>() {
            return Err(AccessError::request::<V>(binding));
        }
        let value = self.get_value(instance)?;
        match value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(AccessError::request::<V>(self.binding())),
        }
    }
}

// -----------------------------------------------------------------------------
// SetValue

/// The setter capability.
///
/// # Examples
///
/// ```
/// use vc_property::access::{SetValue, PropertySetter};
///
/// struct Account { hash: u64 }
///
/// let setter: Box<dyn SetValue> = Box::new(
///     PropertySetter::<Account, String>::new("password", |a, p| a.hash = p.len() as u64)
/// );
///
/// let mut account = Account { hash: 0 };
/// setter.set_value_from(&mut account, String::from("hunter2")).unwrap();
/// assert_eq!(account.hash, 7);
///
/// assert!(setter.set_value(&mut account, Box::new(12_u8)).is_err());
/// assert_eq!(account.hash, 7);
/// ```
pub trait SetValue: BoundProperty {
    /// Writes `value` into `instance`.
    ///
    /// Fails with [`AccessError::MismatchedInstance`] if `instance` is not the
    /// declaring type, and with [`AccessError::MismatchedValue`] if `value` is
    /// not the value type. `instance` is untouched on failure.
    fn set_value(&self, instance: &mut dyn Any, value: Box<dyn Any>) -> Result<(), AccessError>;
}

impl dyn SetValue {
    /// Writes a `V` into `instance`.
    ///
    /// Fails with [`AccessError::MismatchedRequest`] if `V` is not the value type.
    pub fn set_value_from<V: Any>(&self, instance: &mut dyn Any, value: V) -> Result<(), AccessError> {
        let binding = self.binding();
        if TypeId::of::<V>() != binding.value().id() {
            return Err(AccessError::request::<V>(binding));
        }
        self.set_value(instance, Box::new(value))
    }
}

// -----------------------------------------------------------------------------
// AccessValue

/// The full capability: both [`GetValue`] and [`SetValue`] on one object.
///
/// Implemented for every type that implements both halves.
/// `&dyn AccessValue` upcasts to `&dyn GetValue` and `&dyn SetValue`.
pub trait AccessValue: GetValue + SetValue {}

impl<A: GetValue + SetValue + ?Sized> AccessValue for A {}

impl dyn AccessValue {
    /// See [`get_value_as`](trait.GetValue.html#method.get_value_as).
    #[inline]
    pub fn get_value_as<V: Any>(&self, instance: &dyn Any) -> Result<V, AccessError> {
        let getter: &dyn GetValue = self;
        getter.get_value_as(instance)
    }

    /// See [`set_value_from`](trait.SetValue.html#method.set_value_from).
    #[inline]
    pub fn set_value_from<V: Any>(&self, instance: &mut dyn Any, value: V) -> Result<(), AccessError> {
        let setter: &dyn SetValue = self;
        setter.set_value_from(instance, value)
    }
}
