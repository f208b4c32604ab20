//! Shared utilities for callschema procedural macro crates.
//!
//! Provides crate-path resolution so that generated code emits correct
//! fully-qualified paths regardless of whether the consumer depends on
//! `callschema_core` directly or on the `callschema` umbrella re-export.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Name of the umbrella crate that re-exports every callschema crate.
const UMBRELLA: &str = "callschema";

/// A callschema crate that macro-generated code may reference.
pub enum CallschemaCrate {
    /// `callschema_core`
    Core,
}

impl CallschemaCrate {
    /// Returns the `Cargo.toml` package name for this crate.
    fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "callschema_core",
        }
    }
}

/// Returns a [`TokenStream`] path for the given callschema crate.
///
/// Resolution order:
/// 1. Direct dependency (possibly renamed in `Cargo.toml`).
/// 2. The `callschema` umbrella crate, which re-exports the core items at
///    its root.
/// 3. Fallback to the literal crate name (compile error will point the user
///    to the missing dependency).
pub fn resolve_crate_path(krate: CallschemaCrate) -> TokenStream {
    let name = krate.as_str();

    match crate_name(name) {
        Ok(FoundCrate::Itself) => {
            let ident = format_ident!("{}", name);
            quote!(::#ident)
        }
        Ok(FoundCrate::Name(found)) => {
            let ident = format_ident!("{}", found);
            quote!(::#ident)
        }
        Err(_) => match crate_name(UMBRELLA) {
            Ok(FoundCrate::Name(found)) => {
                let umbrella = format_ident!("{}", found);
                quote!(::#umbrella)
            }
            Ok(FoundCrate::Itself) => {
                let umbrella = format_ident!("{}", UMBRELLA);
                quote!(::#umbrella)
            }
            Err(_) => {
                let ident = format_ident!("{}", name);
                quote!(::#ident)
            }
        },
    }
}
