use thiserror::Error;

use crate::access::Binding;

// -----------------------------------------------------------------------------
// AccessError

/// An error returned when an accessor is invoked with the wrong types.
///
/// The instance is never modified when this is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("property `{property}` expects an instance of `{expected}`, found another type")]
    MismatchedInstance {
        property: &'static str,
        expected: &'static str,
    },

    #[error("property `{property}` expects a value of `{expected}`, found another type")]
    MismatchedValue {
        property: &'static str,
        expected: &'static str,
    },

    #[error("property `{property}` holds `{expected}`, not `{requested}`")]
    MismatchedRequest {
        property: &'static str,
        expected: &'static str,
        requested: &'static str,
    },
}

impl AccessError {
    #[cold]
    #[inline(never)]
    pub(crate) fn instance(binding: &Binding) -> Self {
        Self::MismatchedInstance {
            property: binding.name(),
            expected: binding.owner().path(),
        }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn value(binding: &Binding) -> Self {
        Self::MismatchedValue {
            property: binding.name(),
            expected: binding.value().path(),
        }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn request<V>(binding: &Binding) -> Self {
        Self::MismatchedRequest {
            property: binding.name(),
            expected: binding.value().path(),
            requested: core::any::type_name::<V>(),
        }
    }
}

// -----------------------------------------------------------------------------
// BindError

/// An error returned when a property descriptor cannot be bound to the
/// requested accessor shape.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindError {
    #[error("property `{property}` is declared on `{expected}`, cannot bind it for `{requested}`")]
    MismatchedOwner {
        property: &'static str,
        expected: &'static str,
        requested: &'static str,
    },

    #[error("property `{property}` holds `{expected}`, cannot bind it as `{requested}`")]
    MismatchedValue {
        property: &'static str,
        expected: &'static str,
        requested: &'static str,
    },

    #[error("property `{property}` of `{owner}` reports read support but has no getter")]
    MissingGetter {
        property: &'static str,
        owner: &'static str,
    },

    #[error("property `{property}` of `{owner}` reports write support but has no setter")]
    MissingSetter {
        property: &'static str,
        owner: &'static str,
    },
}
