use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::info::TypeProperties;
use crate::utils::{NoOpHashState, TypeIdMap};

// -----------------------------------------------------------------------------
// NonGenericPropertiesCell

/// A container for the property table of a non-generic type.
///
/// The table is built on first access, see [`Properties`](crate::info::Properties)
/// for an example.
pub struct NonGenericPropertiesCell(OnceLock<TypeProperties>);

impl NonGenericPropertiesCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the table, building it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeProperties) -> &TypeProperties {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericPropertiesCell

/// A container for the property tables of every instance of a generic type.
///
/// A `static` inside a generic function is shared by all instances, so the
/// tables are keyed by `TypeId`. Each table is leaked once and lives for the
/// rest of the program.
pub struct GenericPropertiesCell(RwLock<TypeIdMap<&'static TypeProperties>>);

impl GenericPropertiesCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::with_hasher(NoOpHashState)))
    }

    /// Returns the table of `G`, building it with `f` on first access.
    pub fn get_or_insert<G: Any>(&self, f: impl FnOnce() -> TypeProperties) -> &TypeProperties {
        let type_id = TypeId::of::<G>();

        let mapping = self.0.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(info) = mapping.get(&type_id).copied() {
            return info;
        }
        drop(mapping);

        // Build outside the lock, `f` may touch other cells.
        let value = f();

        let mut mapping = self.0.write().unwrap_or_else(PoisonError::into_inner);
        let info: &'static TypeProperties = *mapping
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)));
        info
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::{GenericPropertiesCell, NonGenericPropertiesCell};
    use crate::info::TypeProperties;

    struct Marker<T>(PhantomData<T>);

    #[test]
    fn non_generic_builds_once() {
        static CELL: NonGenericPropertiesCell = NonGenericPropertiesCell::new();

        let a = CELL.get_or_init(|| TypeProperties::new::<u8>([]));
        let b = CELL.get_or_init(|| unreachable!());
        assert!(core::ptr::eq(a, b));
    }

    #[test]
    fn generic_keyed_by_type() {
        static CELL: GenericPropertiesCell = GenericPropertiesCell::new();

        let a = CELL.get_or_insert::<Marker<u8>>(|| TypeProperties::new::<Marker<u8>>([]));
        let b = CELL.get_or_insert::<Marker<u16>>(|| TypeProperties::new::<Marker<u16>>([]));
        let c = CELL.get_or_insert::<Marker<u8>>(|| unreachable!());

        assert!(a.ty().is::<Marker<u8>>());
        assert!(b.ty().is::<Marker<u16>>());
        assert!(core::ptr::eq(a, c));
    }
}
