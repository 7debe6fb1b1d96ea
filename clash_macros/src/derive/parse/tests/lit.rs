//! Tests for literal parsing helpers.

use super::super::literals::{lit_bool, lit_path, lit_str, short_name};
use anyhow::{Result, anyhow, ensure};
use syn::Attribute;

/// Runs `parse` against the single key inside `attr` and returns its output.
fn parse_single<T>(
    attr: &Attribute,
    parse: impl Fn(&syn::meta::ParseNestedMeta) -> syn::Result<T>,
) -> Result<T> {
    let mut observed = None;
    attr.parse_nested_meta(|meta| {
        observed = Some(parse(&meta)?);
        Ok(())
    })
    .map_err(|err| anyhow!("expected attribute parsing to succeed: {err}"))?;
    observed.ok_or_else(|| anyhow!("attribute callback was not invoked"))
}

#[test]
fn lit_str_parses_string_values() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[clash(long = "name")]);
    let value = parse_single(&attr, |meta| lit_str(meta, "long"))?.value();
    ensure!(value == "name", "unexpected long value: {value}");
    Ok(())
}

#[test]
fn short_name_accepts_strings_and_chars() -> Result<()> {
    let quoted: Attribute = syn::parse_quote!(#[clash(short = "n")]);
    let ticked: Attribute = syn::parse_quote!(#[clash(short = 'n')]);
    let from_str = parse_single(&quoted, |meta| short_name(meta, "short"))?;
    let from_char = parse_single(&ticked, |meta| short_name(meta, "short"))?;
    ensure!(from_str == "n", "unexpected short value: {from_str}");
    ensure!(from_char == from_str, "char form differs: {from_char}");
    Ok(())
}

#[test]
fn short_name_rejects_numbers() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[clash(short = 1)]);
    let err = attr
        .parse_nested_meta(|meta| short_name(&meta, "short").map(drop))
        .err()
        .ok_or_else(|| anyhow!("expected a type error"))?;
    ensure!(
        err.to_string() == "short must be a string or char literal",
        "unexpected error: {err}"
    );
    Ok(())
}

#[test]
fn lit_bool_parses_bool_values() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[clash(required = false)]);
    let value = parse_single(&attr, |meta| lit_bool(meta, "required"))?;
    ensure!(!value, "expected false");
    Ok(())
}

#[test]
fn lit_bool_rejects_strings() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[clash(required = "yes")]);
    let err = attr
        .parse_nested_meta(|meta| lit_bool(&meta, "required").map(drop))
        .err()
        .ok_or_else(|| anyhow!("expected a type error"))?;
    ensure!(
        err.to_string() == "required must be a bool literal",
        "unexpected error: {err}"
    );
    Ok(())
}

#[test]
fn lit_path_rejects_quoted_non_paths() -> Result<()> {
    let attr: Attribute = syn::parse_quote!(#[clash(parse_with = "not a path")]);
    let err = attr
        .parse_nested_meta(|meta| lit_path(&meta, "parse_with").map(drop))
        .err()
        .ok_or_else(|| anyhow!("expected a path error"))?;
    ensure!(
        err.to_string().starts_with("parse_with must name a function"),
        "unexpected error: {err}"
    );
    Ok(())
}

#[test]
fn lit_path_accepts_bare_and_quoted_paths() -> Result<()> {
    let bare: Attribute = syn::parse_quote!(#[clash(parse_with = codec::parse)]);
    let quoted: Attribute = syn::parse_quote!(#[clash(parse_with = "codec::parse")]);
    for attr in [bare, quoted] {
        let path = parse_single(&attr, |meta| lit_path(meta, "parse_with"))?;
        let segments: Vec<_> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        ensure!(segments == ["codec", "parse"], "unexpected path: {segments:?}");
    }
    Ok(())
}
