//! Items used by the code `#[derive(Properties)]` generates.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::Properties;
    use crate::registry::PropertyRegistry;

    /// A registration function submitted by `#[property(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&mut PropertyRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut PropertyRegistry);
    }

    impl<T: Properties> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut PropertyRegistry) {
            registry.register::<T>();
        }
    }

    // Always submitted, seeing it proves static registration works here.
    fn __probe(_: &mut PropertyRegistry) {}

    inventory::submit! {
        __AutoRegisterFunc(__probe)
    }

    /// Runs every submitted registration, returns `false` if none was seen.
    pub(crate) fn __register_types(registry: &mut PropertyRegistry) -> bool {
        let mut supported = false;
        for func in inventory::iter::<__AutoRegisterFunc> {
            supported = true;
            (func.0)(registry);
        }
        supported
    }
}
