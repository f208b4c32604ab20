//! Code generation for `#[callable]` on standalone functions.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemFn;
use syn::ext::IdentExt;

use callschema_macro_utils::{CallschemaCrate, resolve_crate_path};

use crate::common::{
    extract_doc_comments, generate_descriptor, parse_inputs, strip_param_attrs, to_pascal_case,
    validate_signature, validate_standalone,
};

/// Generates a `Callable` impl struct for a standalone `#[callable]` function.
///
/// The function is emitted unchanged apart from its parameter helper
/// attributes, followed by a `<Name>Callable` unit struct implementing
/// `Callable`.
pub(crate) fn generate_callable_fn(input: &ItemFn) -> syn::Result<TokenStream> {
    validate_signature(&input.sig)?;
    validate_standalone(&input.sig)?;

    let core = resolve_crate_path(CallschemaCrate::Core);

    let fn_name = &input.sig.ident;
    let fn_name_str = fn_name.unraw().to_string();
    let struct_name = format_ident!("{}Callable", to_pascal_case(&fn_name_str));

    let documentation = extract_doc_comments(&input.attrs);
    let params = parse_inputs(&input.sig.inputs)?;
    let descriptor_code = generate_descriptor(&fn_name_str, &documentation, &params, &core);

    let mut cleaned = input.clone();
    strip_param_attrs(&mut cleaned.sig.inputs);

    let vis = &input.vis;
    let struct_doc = format!("Reflected signature of `{fn_name_str}`.");

    Ok(quote! {
        #cleaned

        #[doc = #struct_doc]
        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #struct_name;

        impl #core::Callable for #struct_name {
            fn descriptor(
                &self,
            ) -> ::core::result::Result<#core::CallableDescriptor, #core::DescriptorError> {
                #descriptor_code
            }
        }
    })
}
