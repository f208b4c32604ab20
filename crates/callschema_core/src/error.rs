//! Error types for callable descriptors.

use thiserror::Error;

/// Errors raised while building a [`CallableDescriptor`](crate::CallableDescriptor).
///
/// Schema conversion itself never fails; these are the only errors a caller
/// of [`convert`](crate::convert) can observe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// The callable has an empty name.
    #[error("Callable name must not be empty")]
    EmptyName,

    /// A parameter of the callable has an empty name.
    #[error("Callable '{callable}' has a parameter with an empty name")]
    EmptyParameterName {
        /// Name of the callable.
        callable: String,
    },

    /// Two parameters share the same name.
    #[error("Callable '{callable}' declares parameter '{parameter}' more than once")]
    DuplicateParameter {
        /// Name of the callable.
        callable: String,
        /// The repeated parameter name.
        parameter: String,
    },
}

impl DescriptorError {
    /// Creates a [`DuplicateParameter`](Self::DuplicateParameter).
    pub fn duplicate_parameter(callable: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::DuplicateParameter {
            callable: callable.into(),
            parameter: parameter.into(),
        }
    }
}
