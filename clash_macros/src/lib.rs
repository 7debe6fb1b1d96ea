//! Procedural macros for `clash`.
//!
//! `#[derive(Clash)]` reads `#[clash(...)]` field attributes and emits a
//! `Clash::describe` implementation listing every field with its argument
//! metadata. See the `clash` crate for the attribute reference.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `clash::Clash`.
///
/// Field keys: `short`, `long`, `required`, `default`, `default_with`,
/// `parse_with`, `custom`, `skip` and `flatten`. Struct key: `crate`.
#[proc_macro_derive(Clash, attributes(clash))]
pub fn derive_clash(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::derive_clash(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
