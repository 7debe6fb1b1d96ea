//! Implementation of `#[derive(Clash)]`.

mod crate_path;
mod generate;
pub(crate) mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parses `input` and emits its `Clash` implementation.
pub(crate) fn derive_clash(input: &DeriveInput) -> syn::Result<TokenStream> {
    let (ident, fields, struct_attrs) = parse::parse_input(input)?;
    let krate = crate_path::resolve(struct_attrs.crate_path.as_ref());
    Ok(generate::describe_impl(
        &ident,
        &input.generics,
        &fields,
        &krate,
    ))
}
