//! The conversion entry points.
//!
//! [`convert`] reflects a [`Callable`] and runs the full pipeline:
//! signature extraction and documentation parsing over the descriptor,
//! type mapping per parameter, then schema assembly.
//!
//! # Example
//!
//! ```
//! use callschema_core::{ConvertOptions, callable, convert};
//!
//! #[callable]
//! /// Greets a person.
//! /// name: the person's name
//! fn greet(name: String, #[default] shout: bool) -> String {
//!     if shout { name.to_uppercase() } else { name }
//! }
//!
//! let schema = convert(&GreetCallable, &ConvertOptions::default()).unwrap();
//! assert_eq!(schema.required(), ["name"]);
//! ```

use serde::Deserialize;

use crate::callable::{Callable, CallableSet};
use crate::descriptor::CallableDescriptor;
use crate::doc;
use crate::error::DescriptorError;
use crate::mapper::type_to_schema;
use crate::schema::{FunctionSchema, ParameterInfo};
use crate::signature::extract_parameters;

/// Options controlling schema generation.
///
/// Deserializable so hosts can keep it in their own configuration files;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Overrides the description taken from the documentation.
    pub description: Option<String>,
    /// Emits `required` and `additionalProperties: false`. Defaults to `true`.
    pub strict: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            description: None,
            strict: true,
        }
    }
}

impl ConvertOptions {
    /// Creates strict options without a description override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description override.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets strict mode.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Reflects `callable` and converts it to a [`FunctionSchema`].
///
/// Fails only when the callable cannot produce a valid descriptor.
pub fn convert<C: Callable + ?Sized>(
    callable: &C,
    options: &ConvertOptions,
) -> Result<FunctionSchema, DescriptorError> {
    let descriptor = callable.descriptor()?;
    Ok(convert_descriptor(&descriptor, options))
}

/// Converts every callable described by `S`.
pub fn convert_set<S: CallableSet>(
    options: &ConvertOptions,
) -> Result<Vec<FunctionSchema>, DescriptorError> {
    Ok(S::descriptors()?
        .iter()
        .map(|descriptor| convert_descriptor(descriptor, options))
        .collect())
}

/// Converts an already reflected descriptor. Never fails.
#[must_use]
pub fn convert_descriptor(callable: &CallableDescriptor, options: &ConvertOptions) -> FunctionSchema {
    let _span = tracing::debug_span!(
        "convert",
        callable = callable.name(),
        strict = options.strict
    )
    .entered();

    let documentation = callable.documentation();
    let description = options
        .description
        .clone()
        .unwrap_or_else(|| doc::summary(documentation, callable.name()));

    let params = extract_parameters(callable);
    tracing::debug!(parameters = params.len(), "Extracted signature");

    params.into_iter().fold(
        FunctionSchema::new(callable.name(), description, options.strict),
        |schema, param| {
            schema.add_parameter(ParameterInfo {
                name: param.name.to_string(),
                schema: type_to_schema(param.ty, param.has_default),
                description: doc::parameter_doc(documentation, param.name).map(str::to_string),
                has_default: param.has_default,
            })
        },
    )
}
