//! Traits for values that can be described as callables.

use crate::descriptor::CallableDescriptor;
use crate::error::DescriptorError;

/// A callable whose signature and documentation can be reflected.
///
/// Implemented by the unit structs that `#[callable]` generates, and by
/// [`CallableDescriptor`] itself.
pub trait Callable {
    /// Returns the reflected descriptor.
    fn descriptor(&self) -> Result<CallableDescriptor, DescriptorError>;
}

impl Callable for CallableDescriptor {
    fn descriptor(&self) -> Result<CallableDescriptor, DescriptorError> {
        Ok(self.clone())
    }
}

impl<C: Callable + ?Sized> Callable for &C {
    fn descriptor(&self) -> Result<CallableDescriptor, DescriptorError> {
        (**self).descriptor()
    }
}

/// A type whose methods are described as a group (via `#[callables]`).
pub trait CallableSet {
    /// Returns one descriptor per described method, in source order.
    fn descriptors() -> Result<Vec<CallableDescriptor>, DescriptorError>;
}
