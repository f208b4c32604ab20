//! Shared utilities for descriptor code generation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Attribute, Expr, ExprLit, FnArg, Lit, Meta, Pat, PatType, Signature, Type};

/// Validates that a function signature can be described.
///
/// Rejects generic and variadic functions, and `impl Trait` parameters.
pub(crate) fn validate_signature(sig: &Signature) -> syn::Result<()> {
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "#[callable] does not support generic parameters",
        ));
    }

    if let Some(variadic) = &sig.variadic {
        return Err(syn::Error::new_spanned(
            variadic,
            "#[callable] cannot describe variadic functions",
        ));
    }

    for input in &sig.inputs {
        if let FnArg::Typed(pat_type) = input
            && let Type::ImplTrait(impl_trait) = &*pat_type.ty
        {
            return Err(syn::Error::new_spanned(
                impl_trait,
                "#[callable] cannot describe `impl Trait` parameters",
            ));
        }
    }

    Ok(())
}

/// Validates that a standalone `#[callable]` function has no receiver.
pub(crate) fn validate_standalone(sig: &Signature) -> syn::Result<()> {
    if let Some(FnArg::Receiver(receiver)) = sig.inputs.first() {
        return Err(syn::Error::new_spanned(
            receiver,
            "#[callable] standalone functions cannot have a `self` receiver; \
             use #[callables] on the impl block instead",
        ));
    }
    Ok(())
}

/// Parsed information about a single function parameter.
#[derive(Debug, Clone)]
pub(crate) struct ParamInfo {
    /// Parameter name, without any `r#` prefix.
    pub name: String,
    /// Declared type. `None` for the receiver.
    pub ty: Option<Type>,
    /// Whether the parameter is marked `#[default]`.
    pub has_default: bool,
}

/// Extracts doc comment text from attributes, one trimmed line per comment.
pub(crate) fn extract_doc_comments(attrs: &[Attribute]) -> String {
    let mut docs = Vec::new();

    for attr in attrs {
        if attr.path().is_ident("doc")
            && let Meta::NameValue(meta) = &attr.meta
            && let Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) = &meta.value
        {
            docs.push(lit_str.value().trim().to_string());
        }
    }

    docs.join("\n")
}

/// Parses every input of a signature, receiver included.
pub(crate) fn parse_inputs(inputs: &Punctuated<FnArg, Comma>) -> syn::Result<Vec<ParamInfo>> {
    inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Receiver(_) => Ok(ParamInfo {
                name: "self".to_string(),
                ty: None,
                has_default: false,
            }),
            FnArg::Typed(pat_type) => parse_param(pat_type),
        })
        .collect()
}

/// Parses a typed function parameter into a [`ParamInfo`].
pub(crate) fn parse_param(pat_type: &PatType) -> syn::Result<ParamInfo> {
    let Pat::Ident(pat_ident) = &*pat_type.pat else {
        return Err(syn::Error::new_spanned(
            &pat_type.pat,
            "#[callable] parameters must be plain identifiers",
        ));
    };

    Ok(ParamInfo {
        name: pat_ident.ident.unraw().to_string(),
        ty: Some((*pat_type.ty).clone()),
        has_default: has_default_attr(&pat_type.attrs)?,
    })
}

/// Checks for a bare `#[default]` marker.
fn has_default_attr(attrs: &[Attribute]) -> syn::Result<bool> {
    for attr in attrs {
        if attr.path().is_ident("default") {
            return match &attr.meta {
                Meta::Path(_) => Ok(true),
                other => Err(syn::Error::new_spanned(
                    other,
                    "#[default] takes no arguments",
                )),
            };
        }
    }
    Ok(false)
}

/// Removes the `#[default]` markers and doc comments from typed parameters.
pub(crate) fn strip_param_attrs(inputs: &mut Punctuated<FnArg, Comma>) {
    for input in inputs {
        if let FnArg::Typed(pat_type) = input {
            pat_type
                .attrs
                .retain(|attr| !attr.path().is_ident("default") && !attr.path().is_ident("doc"));
        }
    }
}

/// Converts a `snake_case` string to `PascalCase`.
pub(crate) fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            }
        })
        .collect()
}

/// Generates an expression evaluating to
/// `Result<CallableDescriptor, DescriptorError>`.
pub(crate) fn generate_descriptor(
    fn_name: &str,
    documentation: &str,
    params: &[ParamInfo],
    core: &TokenStream,
) -> TokenStream {
    let parameters: Vec<_> = params
        .iter()
        .map(|param| {
            let name = &param.name;
            let base = match &param.ty {
                Some(ty) => quote! {
                    #core::ParameterDescriptor::new(#name, <#ty as #core::DescribeType>::describe())
                },
                None => quote! { #core::ParameterDescriptor::untyped(#name) },
            };

            if param.has_default {
                quote! { #base.with_default() }
            } else {
                base
            }
        })
        .collect();

    quote! {
        #core::CallableDescriptor::builder(#fn_name)
            .documentation(#documentation)
            #(
                .parameter(#parameters)
            )*
            .build()
    }
}
