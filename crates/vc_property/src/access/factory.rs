use alloc::boxed::Box;
use core::any::Any;

use crate::access::{AccessValue, BindError, GetValue, SetValue};
use crate::access::{Handles, PropertyAccessor, PropertyGetter, PropertySetter};
use crate::info::{PropertyInfo, Type};

// -----------------------------------------------------------------------------
// Checks

#[cold]
#[inline(never)]
fn unsupported(info: &PropertyInfo, capability: &'static str) {
    log::trace!(
        "property `{}` of `{}` is {:?}, no {capability} built",
        info.name(),
        info.owner(),
        info.access(),
    );
}

#[cold]
#[inline(never)]
fn bind_error(error: BindError) -> BindError {
    log::debug!("{error}");
    error
}

fn missing_getter(info: &PropertyInfo) -> BindError {
    bind_error(BindError::MissingGetter {
        property: info.name(),
        owner: info.owner().path(),
    })
}

fn missing_setter(info: &PropertyInfo) -> BindError {
    bind_error(BindError::MissingSetter {
        property: info.name(),
        owner: info.owner().path(),
    })
}

// Flags promise handles, every promised handle must exist.
fn check_handles(info: &PropertyInfo, read: bool, write: bool) -> Result<(), BindError> {
    let handles = info.handles();
    if read && !handles.has_getter() {
        return Err(missing_getter(info));
    }
    if write && !handles.has_setter() {
        return Err(missing_setter(info));
    }
    Ok(())
}

fn check_types<T: Any, V: Any>(info: &PropertyInfo) -> Result<(), BindError> {
    if info.owner() != Type::of::<T>() {
        return Err(bind_error(BindError::MismatchedOwner {
            property: info.name(),
            expected: info.owner().path(),
            requested: core::any::type_name::<T>(),
        }));
    }
    if info.value() != Type::of::<V>() {
        return Err(bind_error(BindError::MismatchedValue {
            property: info.name(),
            expected: info.value().path(),
            requested: core::any::type_name::<V>(),
        }));
    }
    Ok(())
}

fn typed_handles<T: Any, V: Any>(info: &PropertyInfo) -> Result<&Handles<T, V>, BindError> {
    check_types::<T, V>(info)?;
    // `PropertyInfo` builds its handles from the same `T` and `V` as its binding.
    info.handles()
        .as_any()
        .downcast_ref::<Handles<T, V>>()
        .ok_or_else(|| {
            bind_error(BindError::MismatchedOwner {
                property: info.name(),
                expected: info.owner().path(),
                requested: core::any::type_name::<T>(),
            })
        })
}

// -----------------------------------------------------------------------------
// Erased factory

/// Builds a full accessor of `info`.
///
/// Returns `Ok(None)` unless the property supports both read and write.
///
/// # Examples
///
/// ```
/// use vc_property::{PropertyInfo, access::build_full_accessor};
///
/// struct Rect { w: f32, h: f32 }
///
/// let w = PropertyInfo::read_write::<Rect, f32>("w", |r| r.w, |r, w| r.w = w);
/// let area = PropertyInfo::read_only::<Rect, f32>("area", |r| r.w * r.h);
///
/// assert!(build_full_accessor(&w).unwrap().is_some());
/// assert!(build_full_accessor(&area).unwrap().is_none());
/// ```
pub fn build_full_accessor(info: &PropertyInfo) -> Result<Option<Box<dyn AccessValue>>, BindError> {
    if !info.can_read() || !info.can_write() {
        unsupported(info, "full accessor");
        return Ok(None);
    }
    check_handles(info, true, true)?;
    match info.handles().erased_accessor(*info.binding()) {
        Some(accessor) => Ok(Some(accessor)),
        None => Err(missing_getter(info)),
    }
}

/// Builds a setter of `info`.
///
/// Returns `Ok(None)` unless the property supports write.
///
/// # Examples
///
/// ```
/// use vc_property::{PropertyInfo, access::build_setter_accessor};
///
/// struct Rect { w: f32, h: f32 }
///
/// let area = PropertyInfo::read_only::<Rect, f32>("area", |r| r.w * r.h);
/// assert!(build_setter_accessor(&area).unwrap().is_none());
/// ```
pub fn build_setter_accessor(info: &PropertyInfo) -> Result<Option<Box<dyn SetValue>>, BindError> {
    if !info.can_write() {
        unsupported(info, "setter");
        return Ok(None);
    }
    match info.handles().erased_setter(*info.binding()) {
        Some(setter) => Ok(Some(setter)),
        None => Err(missing_setter(info)),
    }
}

/// Builds a getter of `info`.
///
/// Returns `Ok(None)` unless the property supports read.
///
/// # Examples
///
/// ```
/// use vc_property::{PropertyInfo, access::build_getter_accessor};
///
/// struct Account { hash: u64 }
///
/// let password = PropertyInfo::write_only::<Account, String>(
///     "password",
///     |a, p| a.hash = p.len() as u64,
/// );
/// assert!(build_getter_accessor(&password).unwrap().is_none());
/// ```
pub fn build_getter_accessor(info: &PropertyInfo) -> Result<Option<Box<dyn GetValue>>, BindError> {
    if !info.can_read() {
        unsupported(info, "getter");
        return Ok(None);
    }
    match info.handles().erased_getter(*info.binding()) {
        Some(getter) => Ok(Some(getter)),
        None => Err(missing_getter(info)),
    }
}

// -----------------------------------------------------------------------------
// Typed factory

/// Binds `info` to a statically typed full accessor.
///
/// `T` and `V` are checked against the descriptor first, a mismatch is a
/// [`BindError`] even when the capability is unsupported. Then returns
/// `Ok(None)` unless the property supports both read and write.
///
/// # Examples
///
/// ```
/// use vc_property::{PropertyInfo, BindError, access::{build_typed_accessor, TypedGet}};
///
/// struct Point { x: i32 }
///
/// let info = PropertyInfo::read_write::<Point, i32>("x", |p| p.x, |p, x| p.x = x);
///
/// let accessor = build_typed_accessor::<Point, i32>(&info).unwrap().unwrap();
/// assert_eq!(accessor.get(&Point { x: 3 }), 3);
///
/// let err = build_typed_accessor::<Point, u32>(&info).unwrap_err();
/// assert!(matches!(err, BindError::MismatchedValue { .. }));
/// ```
pub fn build_typed_accessor<T: Any, V: Any>(
    info: &PropertyInfo,
) -> Result<Option<PropertyAccessor<T, V>>, BindError> {
    let handles = typed_handles::<T, V>(info)?;
    if !info.can_read() || !info.can_write() {
        unsupported(info, "full accessor");
        return Ok(None);
    }
    check_handles(info, true, true)?;
    match handles.accessor(*info.binding()) {
        Some(accessor) => Ok(Some(accessor)),
        None => Err(missing_getter(info)),
    }
}

/// Binds `info` to a statically typed getter.
///
/// See [`build_typed_accessor`] for the order of checks.
pub fn build_typed_getter<T: Any, V: Any>(
    info: &PropertyInfo,
) -> Result<Option<PropertyGetter<T, V>>, BindError> {
    let handles = typed_handles::<T, V>(info)?;
    if !info.can_read() {
        unsupported(info, "getter");
        return Ok(None);
    }
    match handles.getter(*info.binding()) {
        Some(getter) => Ok(Some(getter)),
        None => Err(missing_getter(info)),
    }
}

/// Binds `info` to a statically typed setter.
///
/// See [`build_typed_accessor`] for the order of checks.
pub fn build_typed_setter<T: Any, V: Any>(
    info: &PropertyInfo,
) -> Result<Option<PropertySetter<T, V>>, BindError> {
    let handles = typed_handles::<T, V>(info)?;
    if !info.can_write() {
        unsupported(info, "setter");
        return Ok(None);
    }
    match handles.setter(*info.binding()) {
        Some(setter) => Ok(Some(setter)),
        None => Err(missing_setter(info)),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::access::{AccessError, BindError, TypedGet, TypedSet};
    use crate::access::{build_full_accessor, build_getter_accessor, build_setter_accessor};
    use crate::access::{build_typed_accessor, build_typed_getter, build_typed_setter};
    use crate::info::{PropertyAccess, PropertyInfo};

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
    }

    #[derive(Debug, PartialEq)]
    struct Rect {
        w: f32,
        h: f32,
    }

    #[derive(Debug, PartialEq)]
    struct Account {
        hash: usize,
    }

    fn point_x() -> PropertyInfo {
        PropertyInfo::read_write::<Point, i32>("x", |p| p.x, |p, x| p.x = x)
    }

    fn rect_area() -> PropertyInfo {
        PropertyInfo::read_only::<Rect, f32>("area", |r| r.w * r.h)
    }

    fn account_password() -> PropertyInfo {
        PropertyInfo::write_only::<Account, String>("password", |a, p| a.hash = p.len())
    }

    #[test]
    fn point_full_accessor() {
        let accessor = build_full_accessor(&point_x()).unwrap().unwrap();
        let mut p = Point { x: 0 };

        accessor.set_value(&mut p, Box::new(5_i32)).unwrap();
        assert_eq!(accessor.get_value_as::<i32>(&p).unwrap(), 5);
        assert_eq!(p.x, 5);
    }

    #[test]
    fn overwrite_round_trip() {
        let accessor = build_full_accessor(&point_x()).unwrap().unwrap();
        let mut p = Point { x: 0 };

        for v in [1, -7, 1, i32::MAX] {
            accessor.set_value_from(&mut p, v).unwrap();
            assert_eq!(accessor.get_value_as::<i32>(&p).unwrap(), v);
        }
    }

    #[test]
    fn read_only_area() {
        let area = rect_area();

        assert!(build_setter_accessor(&area).unwrap().is_none());
        assert!(build_full_accessor(&area).unwrap().is_none());

        let getter = build_getter_accessor(&area).unwrap().unwrap();
        let rect = Rect { w: 2.0, h: 4.0 };
        assert_eq!(getter.get_value_as::<f32>(&rect).unwrap(), 8.0);
    }

    #[test]
    fn write_only_password() {
        let password = account_password();

        assert!(build_getter_accessor(&password).unwrap().is_none());
        assert!(build_full_accessor(&password).unwrap().is_none());

        let setter = build_setter_accessor(&password).unwrap().unwrap();
        let mut account = Account { hash: 0 };
        setter.set_value_from(&mut account, String::from("secret")).unwrap();
        assert_eq!(account.hash, 6);
    }

    #[test]
    fn no_capability_at_all() {
        let info = PropertyInfo::from_parts::<Point, i32>(
            "x",
            PropertyAccess::empty(),
            Some(|p| p.x),
            Some(|p, x| p.x = x),
        );

        assert!(build_getter_accessor(&info).unwrap().is_none());
        assert!(build_setter_accessor(&info).unwrap().is_none());
        assert!(build_full_accessor(&info).unwrap().is_none());
        assert!(build_typed_getter::<Point, i32>(&info).unwrap().is_none());
    }

    #[test]
    fn unrelated_instance_is_untouched() {
        let accessor = build_full_accessor(&point_x()).unwrap().unwrap();
        let mut rect = Rect { w: 1.0, h: 1.0 };

        let err = accessor.set_value_from(&mut rect, 5_i32).unwrap_err();
        assert!(matches!(err, AccessError::MismatchedInstance { property: "x", .. }));
        assert_eq!(rect, Rect { w: 1.0, h: 1.0 });

        let err = accessor.get_value(&rect).unwrap_err();
        assert!(matches!(err, AccessError::MismatchedInstance { .. }));
    }

    #[test]
    fn missing_handles() {
        let info = PropertyInfo::from_parts::<Point, i32>(
            "x",
            PropertyAccess::READ_WRITE,
            None,
            Some(|p, x| p.x = x),
        );

        assert!(build_setter_accessor(&info).unwrap().is_some());
        assert!(matches!(
            build_getter_accessor(&info),
            Err(BindError::MissingGetter { property: "x", .. })
        ));
        assert!(matches!(
            build_full_accessor(&info),
            Err(BindError::MissingGetter { .. })
        ));

        let info = PropertyInfo::from_parts::<Point, i32>(
            "x",
            PropertyAccess::READ_WRITE,
            Some(|p| p.x),
            None,
        );
        assert!(matches!(
            build_full_accessor(&info),
            Err(BindError::MissingSetter { .. })
        ));
        assert!(matches!(
            build_typed_setter::<Point, i32>(&info),
            Err(BindError::MissingSetter { .. })
        ));
    }

    #[test]
    fn flags_win_over_handles() {
        // A setter is present, but the property only reports read support.
        let info = PropertyInfo::from_parts::<Point, i32>(
            "x",
            PropertyAccess::READ,
            Some(|p| p.x),
            Some(|p, x| p.x = x),
        );

        assert!(build_setter_accessor(&info).unwrap().is_none());
        assert!(build_full_accessor(&info).unwrap().is_none());
        assert!(build_getter_accessor(&info).unwrap().is_some());
    }

    #[test]
    fn typed_binding() {
        let info = point_x();
        let mut p = Point { x: 0 };

        let accessor = build_typed_accessor::<Point, i32>(&info).unwrap().unwrap();
        accessor.set(&mut p, 3);
        assert_eq!(accessor.get(&p), 3);

        let getter = build_typed_getter::<Point, i32>(&info).unwrap().unwrap();
        let setter = build_typed_setter::<Point, i32>(&info).unwrap().unwrap();
        setter.set(&mut p, 4);
        assert_eq!(getter.get(&p), 4);
        assert_eq!(getter.binding(), info.binding());
    }

    #[test]
    fn typed_binding_mismatch() {
        let info = point_x();

        assert_eq!(
            build_typed_getter::<Rect, i32>(&info).unwrap_err(),
            BindError::MismatchedOwner {
                property: "x",
                expected: core::any::type_name::<Point>(),
                requested: core::any::type_name::<Rect>(),
            }
        );
        assert_eq!(
            build_typed_setter::<Point, i64>(&info).unwrap_err(),
            BindError::MismatchedValue {
                property: "x",
                expected: "i32",
                requested: "i64",
            }
        );

        // Type checks come before capability checks.
        let area = rect_area();
        assert!(matches!(
            build_typed_setter::<Point, f32>(&area),
            Err(BindError::MismatchedOwner { .. })
        ));
        assert!(build_typed_setter::<Rect, f32>(&area).unwrap().is_none());
        assert!(build_typed_accessor::<Rect, f32>(&area).unwrap().is_none());
    }

    #[test]
    fn accessors_are_shareable() {
        fn assert_send_sync<T: Send + Sync + ?Sized>(_: &T) {}

        let info = point_x();
        let accessor = build_full_accessor(&info).unwrap().unwrap();
        assert_send_sync(&info);
        assert_send_sync(&*accessor);
    }
}
