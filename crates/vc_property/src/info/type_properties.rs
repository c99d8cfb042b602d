use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;
use core::slice::Iter;

use crate::info::{PropertyInfo, Type};
use crate::utils::HashMap;

// -----------------------------------------------------------------------------
// TypeProperties

/// The ordered property table of one type.
///
/// Properties keep the order they were given in; names are unique, a
/// repeated name is dropped with a warning and the first entry wins.
///
/// # Examples
///
/// ```
/// use vc_property::{PropertyInfo, info::TypeProperties};
///
/// struct Rect { w: f32, h: f32 }
///
/// let table = TypeProperties::new::<Rect>([
///     PropertyInfo::read_write::<Rect, f32>("w", |r| r.w, |r, w| r.w = w),
///     PropertyInfo::read_write::<Rect, f32>("h", |r| r.h, |r, h| r.h = h),
///     PropertyInfo::read_only::<Rect, f32>("area", |r| r.w * r.h),
/// ]);
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.index_of("area"), Some(2));
/// assert!(table.property("area").unwrap().can_read());
/// assert!(table.property("depth").is_none());
/// ```
pub struct TypeProperties {
    ty: Type,
    properties: Box<[PropertyInfo]>,
    indices: HashMap<&'static str, usize>,
}

impl TypeProperties {
    /// Creates the property table of `T`.
    pub fn new<T: Any>(properties: impl IntoIterator<Item = PropertyInfo>) -> Self {
        let ty = Type::of::<T>();
        let iter = properties.into_iter();

        let mut indices = HashMap::with_capacity_and_hasher(iter.size_hint().0, Default::default());
        let mut table = Vec::with_capacity(iter.size_hint().0);

        for info in iter {
            if info.owner() != ty {
                log::warn!(
                    "property `{}` declared on `{}` is listed in the table of `{ty}`",
                    info.name(),
                    info.owner(),
                );
            }
            if indices.contains_key(info.name()) {
                log::warn!("duplicate property `{}` on `{ty}` is ignored", info.name());
                continue;
            }
            indices.insert(info.name(), table.len());
            table.push(info);
        }

        Self {
            ty,
            properties: table.into_boxed_slice(),
            indices,
        }
    }

    /// Returns the type this table describes.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Returns the property with the given name.
    #[inline]
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.index_of(name).map(|index| &self.properties[index])
    }

    /// Returns the property at the given index.
    #[inline]
    pub fn property_at(&self, index: usize) -> Option<&PropertyInfo> {
        self.properties.get(index)
    }

    /// Returns the index of the property with the given name.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns an iterator over the properties, in declaration order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, PropertyInfo> {
        self.properties.iter()
    }

    /// Returns an iterator over the property names, in declaration order.
    #[inline]
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.properties.iter().map(PropertyInfo::name)
    }

    /// Returns the number of properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the type has no properties.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a TypeProperties {
    type Item = &'a PropertyInfo;
    type IntoIter = Iter<'a, PropertyInfo>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for TypeProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeProperties")
            .field("ty", &self.ty)
            .field("properties", &self.properties)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::info::{PropertyInfo, TypeProperties};

    struct Rect {
        w: f32,
        h: f32,
    }

    fn table() -> TypeProperties {
        TypeProperties::new::<Rect>([
            PropertyInfo::read_write::<Rect, f32>("w", |r| r.w, |r, w| r.w = w),
            PropertyInfo::read_write::<Rect, f32>("h", |r| r.h, |r, h| r.h = h),
            PropertyInfo::read_only::<Rect, f32>("area", |r| r.w * r.h),
        ])
    }

    #[test]
    fn lookup() {
        let table = table();

        assert!(table.ty().is::<Rect>());
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.names().collect::<Vec<_>>(), ["w", "h", "area"]);
        assert_eq!(table.property_at(1).unwrap().name(), "h");
        assert!(table.property_at(3).is_none());
        assert_eq!(table.index_of("w"), Some(0));
        assert!(table.property("W").is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let table = TypeProperties::new::<Rect>([
            PropertyInfo::read_write::<Rect, f32>("w", |r| r.w, |r, w| r.w = w),
            PropertyInfo::read_only::<Rect, f32>("w", |r| r.h),
        ]);

        assert_eq!(table.len(), 1);
        assert!(table.property("w").unwrap().can_write());
    }

    #[test]
    fn table_drives_accessors() {
        let table = table();
        let mut rect = Rect { w: 0.0, h: 0.0 };

        for info in &table {
            if let Some(setter) = info.setter().unwrap() {
                setter.set_value_from(&mut rect, 3.0_f32).unwrap();
            }
        }

        let area = table.property("area").unwrap().getter().unwrap().unwrap();
        assert_eq!(area.get_value_as::<f32>(&rect).unwrap(), 9.0);
    }
}
