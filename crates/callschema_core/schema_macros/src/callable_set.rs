//! Code generation for `#[callables]` on impl blocks.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{ImplItem, ItemImpl};

use callschema_macro_utils::{CallschemaCrate, resolve_crate_path};

use crate::common::{
    extract_doc_comments, generate_descriptor, parse_inputs, strip_param_attrs,
    validate_signature,
};

/// Generates a `CallableSet` impl for an impl block with `#[callable]` methods.
pub(crate) fn generate_callable_set(input: &ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[callables] must be applied to an inherent impl block",
        ));
    }

    let core = resolve_crate_path(CallschemaCrate::Core);

    let mut cleaned = input.clone();
    let mut descriptors = Vec::new();

    for item in &mut cleaned.items {
        let ImplItem::Fn(method) = item else {
            continue;
        };

        let is_callable = method
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("callable"));
        if !is_callable {
            continue;
        }
        method.attrs.retain(|attr| !attr.path().is_ident("callable"));

        validate_signature(&method.sig)?;
        let params = parse_inputs(&method.sig.inputs)?;
        let documentation = extract_doc_comments(&method.attrs);
        let method_name = method.sig.ident.unraw().to_string();
        descriptors.push(generate_descriptor(
            &method_name,
            &documentation,
            &params,
            &core,
        ));

        strip_param_attrs(&mut method.sig.inputs);
    }

    let self_ty = &input.self_ty;
    let (impl_generics, _ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #cleaned

        impl #impl_generics #core::CallableSet for #self_ty #where_clause {
            fn descriptors() -> ::core::result::Result<
                ::std::vec::Vec<#core::CallableDescriptor>,
                #core::DescriptorError,
            > {
                ::core::result::Result::Ok(::std::vec![
                    #( (#descriptors)? ),*
                ])
            }
        }
    })
}
