use core::any::{Any, TypeId};

use crate::info::{Properties, PropertyInfo, TypeProperties};
use crate::utils::{HashMap, HashSet, NoOpHashState, TypeIdMap};

// -----------------------------------------------------------------------------
// PropertyRegistry

/// A registry of property tables.
///
/// Generic code that only holds a `TypeId`, a type path, or a `&dyn Any`
/// uses it to discover the properties of a value.
///
/// # Example
///
/// ```
/// use core::any::Any;
/// use vc_property::{derive::Properties, registry::PropertyRegistry};
///
/// #[derive(Properties, Default)]
/// struct Player {
///     name: String,
///     level: u32,
/// }
///
/// let mut registry = PropertyRegistry::new();
/// registry.register::<Player>();
///
/// let mut player = Player::default();
/// let object: &mut dyn Any = &mut player;
///
/// let table = registry.properties_of(object).unwrap();
/// let level = table.property("level").unwrap().setter().unwrap().unwrap();
/// level.set_value_from(object, 12_u32).unwrap();
///
/// assert_eq!(player.level, 12);
/// assert!(registry.get_with_type_name("Player").is_some());
/// ```
pub struct PropertyRegistry {
    tables: TypeIdMap<&'static TypeProperties>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    #[cfg_attr(not(feature = "auto_register"), expect(dead_code, reason = "auto_register only"))]
    auto_registered: bool,
}

impl Default for PropertyRegistry {
    /// See [`PropertyRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyRegistry {
    /// Create a empty [`PropertyRegistry`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            tables: TypeIdMap::with_hasher(NoOpHashState),
            type_path_to_id: HashMap::with_hasher(crate::utils::FixedHashState),
            type_name_to_id: HashMap::with_hasher(crate::utils::FixedHashState),
            ambiguous_names: HashSet::with_hasher(crate::utils::FixedHashState),
            auto_registered: false,
        }
    }

    /// Registers the property table of `T`.
    ///
    /// Returns `false` if `T` was already registered.
    #[inline]
    pub fn register<T: Properties>(&mut self) -> bool {
        self.register_table(T::type_properties())
    }

    /// Registers a property table.
    ///
    /// Returns `false` if a table of the same type was already registered,
    /// the existing table is kept.
    pub fn register_table(&mut self, table: &'static TypeProperties) -> bool {
        let ty = table.ty();
        if self.tables.contains_key(&ty.id()) {
            return false;
        }

        let type_name = ty.name();
        if !self.ambiguous_names.contains(type_name) {
            if let Some(other) = self.type_name_to_id.remove(type_name) {
                log::warn!(
                    "type name `{type_name}` is ambiguous ({:?} and `{ty}`), use the type path instead",
                    self.tables.get(&other).map(|table| table.ty()),
                );
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, ty.id());
            }
        }

        self.type_path_to_id.insert(ty.path(), ty.id());
        self.tables.insert(ty.id(), table);
        true
    }

    /// Registers every non-generic type marked with `#[property(auto_register)]`.
    ///
    /// This method is equivalent to calling [`register`](Self::register) for each qualifying type.
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration is supported on the current platform; otherwise, `false`.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it always do nothing and
    /// returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vc_property::{derive::Properties, registry::PropertyRegistry};
    ///
    /// #[derive(Properties)]
    /// #[property(auto_register)]
    /// struct Light {
    ///     intensity: f32,
    /// }
    ///
    /// let mut registry = PropertyRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(core::any::TypeId::of::<Light>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                self.auto_registered = crate::__macro_exports::auto_register::__register_types(self);
            }
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Whether the type with given [`TypeId`] has been registered in this registry.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.tables.contains_key(&type_id)
    }

    /// Returns the property table of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static TypeProperties> {
        self.tables.get(&type_id).copied()
    }

    /// Returns the property table of the type with the given type path,
    /// e.g. `my_crate::scene::Light`.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static TypeProperties> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the property table of the type with the given short type name,
    /// e.g. `Light`.
    ///
    /// Returns `None` if the name is ambiguous.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static TypeProperties> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if the given type name matches multiple registered types.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the property `name` of the type with the given [`TypeId`].
    #[inline]
    pub fn property(&self, type_id: TypeId, name: &str) -> Option<&'static PropertyInfo> {
        self.get(type_id)?.property(name)
    }

    /// Returns the property table of the concrete type behind `instance`.
    #[inline]
    pub fn properties_of(&self, instance: &dyn Any) -> Option<&'static TypeProperties> {
        self.get(instance.type_id())
    }

    /// Returns an iterator over the registered tables, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'static TypeProperties> + '_ {
        self.tables.values().copied()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Tests
