//! Callable introspection and function schema generation.
//!
//! This crate turns a function's signature and documentation into the
//! JSON function schema that tool-calling interfaces expect. Signatures are
//! reflected at compile time by the `#[callable]` attribute, or described at
//! run time with [`CallableDescriptor::builder`].
//!
//! # Quick Start
//!
//! ```
//! use callschema_core::{ConvertOptions, callable, convert};
//!
//! #[callable]
//! /// Search for documents matching a query.
//! /// query: the search query
//! /// limit: max results to return
//! fn search(query: String, #[default] limit: Option<u32>) -> Vec<String> {
//!     Vec::new()
//! }
//!
//! let schema = convert(&SearchCallable, &ConvertOptions::default()).unwrap();
//! assert_eq!(schema.description, "Search for documents matching a query.");
//! assert_eq!(schema.required(), ["query"]);
//! ```
//!
//! # Architecture
//!
//! - [`CallableDescriptor`] / [`TypeDescriptor`]: reflected signature data
//! - [`DescribeType`]: maps Rust types to descriptors
//! - [`signature`]: extracts schema-visible parameters
//! - [`doc`]: summary and per-parameter documentation
//! - [`mapper`]: descriptor to [`SchemaFragment`]
//! - [`FunctionSchema`]: assembled output
//! - [`convert()`]: the end-to-end entry point

// Self-reference to ensure `#[callable]`/`#[callables]` generated code can use `callschema_core::` paths within this crate.
extern crate self as callschema_core;

pub mod callable;
pub mod convert;
pub mod describe;
pub mod descriptor;
pub mod doc;
pub mod error;
pub mod json_schema;
pub mod mapper;
pub mod schema;
pub mod signature;

// Re-export core types at crate root.
pub use callable::{Callable, CallableSet};
pub use convert::{ConvertOptions, convert, convert_descriptor, convert_set};
pub use describe::DescribeType;
pub use descriptor::{
    CallableDescriptor, CallableDescriptorBuilder, ParameterDescriptor, PrimitiveKind,
    TypeDescriptor,
};
pub use error::DescriptorError;
pub use schema::{FunctionSchema, JsonType, ParameterInfo, ParametersSchema, SchemaFragment, Shape};

// Re-export proc macros.
pub use schema_macros::{callable, callables};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::{
        Callable, CallableDescriptor, CallableSet, ConvertOptions, DescribeType, FunctionSchema,
        ParameterDescriptor, TypeDescriptor, callable, callables, convert,
    };
}
