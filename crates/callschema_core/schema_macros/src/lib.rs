//! Procedural macros for callschema.
//!
//! Provides `#[callable]` for standalone functions and `#[callables]` for
//! methods grouped on an impl block. Both reflect the signature and doc
//! comments into a `CallableDescriptor` at compile time.

mod callable_fn;
mod callable_set;
mod common;

use proc_macro::TokenStream;

/// Describes a standalone function.
///
/// Generates a `<Name>Callable` unit struct implementing `Callable`. The
/// function itself is left in place.
///
/// # Parameter Attributes
///
/// - `#[default]`: the parameter has a default and is never `required`
///
/// Parameter descriptions come from `name: description` lines in the
/// function's doc comment.
///
/// # Example
///
/// ```
/// use callschema_core::{callable, Callable};
///
/// #[callable]
/// /// Search for documents.
/// /// query: the search query
/// fn search(query: String, #[default] limit: usize) -> Vec<String> {
///     Vec::new()
/// }
///
/// let descriptor = SearchCallable.descriptor().unwrap();
/// assert_eq!(descriptor.name(), "search");
/// ```
#[proc_macro_attribute]
pub fn callable(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[callable] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = syn::parse_macro_input!(item as syn::ItemFn);
    callable_fn::generate_callable_fn(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Describes the `#[callable]` methods of an inherent impl block.
///
/// Generates a `CallableSet` impl whose `descriptors()` lists one
/// descriptor per marked method, in source order. Receivers are recorded
/// as a `self` parameter, which never reaches the schema.
///
/// # Example
///
/// ```
/// use callschema_core::{callables, CallableSet};
///
/// struct MathTools;
///
/// #[callables]
/// impl MathTools {
///     #[callable]
///     /// Add two numbers.
///     fn add(&self, a: f64, b: f64) -> f64 {
///         a + b
///     }
/// }
///
/// let descriptors = MathTools::descriptors().unwrap();
/// assert_eq!(descriptors[0].name(), "add");
/// ```
#[proc_macro_attribute]
pub fn callables(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemImpl);
    callable_set::generate_callable_set(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
