//! Typed readers for `key = literal` pairs inside `#[clash(...)]`.

use syn::meta::ParseNestedMeta;
use syn::{Lit, LitStr};

/// Reads the literal after `key =` and narrows it with `accept`.
///
/// `expected` completes the sentence "`key` must be ..." when `accept`
/// returns `None`, so the error points at the offending literal.
fn narrow<T>(
    meta: &ParseNestedMeta,
    key: &str,
    expected: &str,
    accept: impl FnOnce(Lit) -> Option<T>,
) -> syn::Result<T> {
    let literal: Lit = meta.value()?.parse()?;
    let span = literal.span();
    accept(literal).ok_or_else(|| syn::Error::new(span, format!("{key} must be {expected}")))
}

/// `long = "name"`, `crate = "path"`.
pub(crate) fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    narrow(meta, key, "a string literal", |lit| match lit {
        Lit::Str(text) => Some(text),
        _ => None,
    })
}

/// `short = "n"` or `short = 'n'`.
pub(crate) fn short_name(meta: &ParseNestedMeta, key: &str) -> syn::Result<String> {
    narrow(meta, key, "a string or char literal", |lit| match lit {
        Lit::Str(text) => Some(text.value()),
        Lit::Char(ch) => Some(ch.value().to_string()),
        _ => None,
    })
}

pub(crate) fn lit_bool(meta: &ParseNestedMeta, key: &str) -> syn::Result<bool> {
    narrow(meta, key, "a bool literal", |lit| match lit {
        Lit::Bool(flag) => Some(flag.value),
        _ => None,
    })
}

/// Function path for `default_with` and `parse_with`.
///
/// Both `parse_with = codec::parse` and `parse_with = "codec::parse"` name
/// the same function.
pub(crate) fn lit_path(meta: &ParseNestedMeta, key: &str) -> syn::Result<syn::Path> {
    let input = meta.value()?;
    if !input.peek(LitStr) {
        return input.parse();
    }
    let quoted: LitStr = input.parse()?;
    quoted
        .parse()
        .map_err(|err| syn::Error::new(quoted.span(), format!("{key} must name a function: {err}")))
}
