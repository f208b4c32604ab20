//! Signature extraction from callable descriptors.

use crate::descriptor::{CallableDescriptor, TypeDescriptor};

/// Name of the method receiver, which never appears in a schema.
pub const RECEIVER: &str = "self";

/// A parameter as seen by the schema pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureParam<'a> {
    /// Parameter name.
    pub name: &'a str,
    /// Declared type, [`TypeDescriptor::Unknown`] when undeclared.
    pub ty: &'a TypeDescriptor,
    /// Whether the parameter declares a default value.
    pub has_default: bool,
}

static UNKNOWN: TypeDescriptor = TypeDescriptor::Unknown;

/// Returns the callable's parameters in declaration order, without `self`.
#[must_use]
pub fn extract_parameters(callable: &CallableDescriptor) -> Vec<SignatureParam<'_>> {
    callable
        .parameters()
        .iter()
        .filter(|param| {
            let is_receiver = param.name == RECEIVER;
            if is_receiver {
                tracing::trace!(callable = callable.name(), "Skipping receiver parameter");
            }
            !is_receiver
        })
        .map(|param| SignatureParam {
            name: &param.name,
            ty: param.ty.as_ref().unwrap_or(&UNKNOWN),
            has_default: param.has_default,
        })
        .collect()
}
