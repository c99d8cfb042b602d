use core::any::Any;

use crate::info::TypeProperties;

// -----------------------------------------------------------------------------
// Properties

/// A static accessor to the property table of a type.
///
/// Automatically implemented by [`#[derive(Properties)]`](crate::derive::Properties).
///
/// # Examples
///
/// ```
/// use vc_property::{derive::Properties, info::Properties as _};
///
/// #[derive(Properties)]
/// struct Foo {
///     a: u32,
///     #[property(read_only)]
///     b: String,
/// }
///
/// let props = Foo::type_properties();
/// assert_eq!(props.len(), 2);
/// assert!(!props.property("b").unwrap().can_write());
/// ```
///
/// # Manually Impl
///
/// Use [`NonGenericPropertiesCell`] for non-generic types:
///
/// ```
/// use vc_property::{
///     PropertyInfo,
///     info::{Properties, TypeProperties, NonGenericPropertiesCell},
/// };
///
/// struct Rect { w: f32, h: f32 }
///
/// impl Properties for Rect {
///     fn type_properties() -> &'static TypeProperties {
///         static CELL: NonGenericPropertiesCell = NonGenericPropertiesCell::new();
///         CELL.get_or_init(|| TypeProperties::new::<Self>([
///             PropertyInfo::read_write::<Self, f32>("w", |r| r.w, |r, w| r.w = w),
///             PropertyInfo::read_write::<Self, f32>("h", |r| r.h, |r, h| r.h = h),
///             PropertyInfo::read_only::<Self, f32>("area", |r| r.w * r.h),
///         ]))
///     }
/// }
///
/// assert_eq!(Rect::type_properties().len(), 3);
/// ```
///
/// And [`GenericPropertiesCell`] for generic types:
///
/// ```
/// use vc_property::{
///     PropertyInfo,
///     info::{Properties, TypeProperties, GenericPropertiesCell},
/// };
///
/// struct Wrapper<T>(T);
///
/// impl<T: Clone + 'static> Properties for Wrapper<T> {
///     fn type_properties() -> &'static TypeProperties {
///         static CELL: GenericPropertiesCell = GenericPropertiesCell::new();
///         CELL.get_or_insert::<Self>(|| TypeProperties::new::<Self>([
///             PropertyInfo::read_write::<Self, T>("0", |w| w.0.clone(), |w, v| w.0 = v),
///         ]))
///     }
/// }
///
/// assert!(Wrapper::<u8>::type_properties().property("0").unwrap().value().is::<u8>());
/// assert!(Wrapper::<i64>::type_properties().property("0").unwrap().value().is::<i64>());
/// ```
///
/// [`NonGenericPropertiesCell`]: crate::info::NonGenericPropertiesCell
/// [`GenericPropertiesCell`]: crate::info::GenericPropertiesCell
pub trait Properties: Any {
    /// Returns the property table of this type.
    ///
    /// Note: Use [`DynamicProperties`] for dynamic dispatch.
    fn type_properties() -> &'static TypeProperties;
}

// -----------------------------------------------------------------------------
// DynamicProperties

/// Provide dynamic dispatch for types that implement [`Properties`].
///
/// Auto impl for all types that implemented [`Properties`].
/// `&dyn DynamicProperties` upcasts to `&dyn Any`, which is what accessors take.
///
/// # Examples
///
/// ```
/// use core::any::Any;
/// use vc_property::{derive::Properties, info::DynamicProperties};
///
/// #[derive(Properties)]
/// struct A { id: u64 }
///
/// #[derive(Properties)]
/// struct B { name: String }
///
/// let objects: [&dyn DynamicProperties; 2] = [&A { id: 7 }, &B { name: "b".into() }];
///
/// for object in objects {
///     let first = object.reflect_properties().property_at(0).unwrap();
///     let getter = first.getter().unwrap().unwrap();
///     let value = getter.get_value(object as &dyn Any).unwrap();
///     assert!(value.is::<u64>() || value.is::<String>());
/// }
/// ```
pub trait DynamicProperties: Any {
    /// Returns the property table of the underlying type.
    fn reflect_properties(&self) -> &'static TypeProperties;
}

impl<T: Properties> DynamicProperties for T {
    #[inline]
    fn reflect_properties(&self) -> &'static TypeProperties {
        T::type_properties()
    }
}
