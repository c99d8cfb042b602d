use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The identity of a declaring type or a property value type.
///
/// The path comes from [`core::any::type_name`], it is meant for diagnostics
/// and registry lookups, identity is always decided by the [`TypeId`].
///
/// # Examples
///
/// ```
/// use vc_property::info::Type;
///
/// let ty = Type::of::<Option<String>>();
///
/// assert!(ty.is::<Option<String>>());
/// assert_eq!(ty.name(), "Option<alloc::string::String>");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, e.g. `alloc::string::String`.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the type path without the leading module path.
    ///
    /// Generic arguments are kept as they are, e.g. `Vec<u8>` for
    /// `alloc::vec::Vec<u8>`. Arrays, slices, tuples, references and
    /// pointers have no leading path and keep the full path.
    pub fn name(&self) -> &'static str {
        if self.path.starts_with(['[', '(', '&', '*']) {
            return self.path;
        }
        let head = match self.path.find('<') {
            Some(index) => &self.path[..index],
            None => self.path,
        };
        match head.rfind("::") {
            Some(index) => &self.path[index + 2..],
            None => self.path,
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// -----------------------------------------------------------------------------
// Tests
