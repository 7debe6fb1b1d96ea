//! Runtime crate path used by generated code.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Prefix for every runtime item the derive names.
///
/// `#[clash(crate = "cli::clash")]` yields `cli::clash`; without the
/// attribute the absolute `::clash` path is used, which keeps working when a
/// local module shadows the crate name.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    match crate_path {
        Some(path) => path.to_token_stream(),
        None => quote! { ::clash },
    }
}
