//! Parsing utilities for the `Clash` derive macro.
//!
//! Every `#[clash(...)]` attribute on a field is folded into a single
//! [`FieldRole`]. Contradictory or unknown keys are rejected here so code
//! generation only ever sees well-formed input.

use heck::ToKebabCase;
use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Lit, Token};

mod input;
mod literals;
#[cfg(test)]
mod tests;

pub(crate) use input::{ParsedField, parse_input};
use literals::{lit_bool, lit_path, lit_str, short_name};

/// Struct-level `#[clash(...)]` settings.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[clash(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `clash::`.
    pub crate_path: Option<syn::Path>,
}

/// Argument metadata for a field that takes part in binding.
#[derive(Clone)]
pub(crate) struct ArgumentAttrs {
    pub short: String,
    pub longs: Vec<String>,
    pub required: bool,
    pub default: Option<String>,
    pub default_with: Option<syn::Path>,
    pub parse_with: Option<syn::Path>,
    /// Declared as an opaque custom type rather than through `Bindable`.
    pub custom: bool,
}

/// How the derive treats a field.
#[derive(Clone)]
pub(crate) enum FieldRole {
    /// No `#[clash]` attribute; declared without metadata.
    Undeclared,
    /// `skip`: never bound.
    Skip,
    /// `flatten`: the field's own `Clash` description is inherited.
    Flatten,
    /// Bound to the described argument.
    Bound(ArgumentAttrs),
}

/// Keys collected from every `#[clash(...)]` on one field.
#[derive(Default)]
struct FieldAttrs {
    annotated: bool,
    short: Option<String>,
    longs: Vec<String>,
    required: Option<bool>,
    default: Option<String>,
    default_with: Option<syn::Path>,
    parse_with: Option<syn::Path>,
    custom: bool,
    skip: bool,
    flatten: bool,
}

impl FieldAttrs {
    fn has_argument_keys(&self) -> bool {
        self.short.is_some()
            || !self.longs.is_empty()
            || self.required.is_some()
            || self.default.is_some()
            || self.default_with.is_some()
            || self.parse_with.is_some()
            || self.custom
    }
}

/// Iterate all `#[clash(...)]` attributes once and apply a callback.
fn parse_clash<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("clash")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    meta.error(format!("unknown clash attribute `{key}`"))
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &ParseNestedMeta, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate `{key}`")));
    }
    *slot = Some(value);
    Ok(())
}

/// Accepts a bare flag or `key = bool`.
fn flag(meta: &ParseNestedMeta, key: &str) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        lit_bool(meta, key)
    } else {
        Ok(true)
    }
}

/// Extracts `#[clash(...)]` metadata applied to a struct.
///
/// Only the `crate` key is recognised.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> Result<StructAttrs, syn::Error> {
    let mut out = StructAttrs::default();
    parse_clash(attrs, |meta| {
        if !meta.path.is_ident("crate") {
            return Err(unknown_key(meta));
        }
        let s = lit_str(meta, "crate")?;
        let path: syn::Path =
            syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
        set_once(&mut out.crate_path, path, meta, "crate")
    })?;
    Ok(out)
}

/// Parses a `default = ...` literal into the text the runtime coerces.
///
/// String, integer, float, bool and char literals are accepted; numbers may
/// carry a leading minus sign.
fn default_literal(meta: &ParseNestedMeta) -> syn::Result<String> {
    let input = meta.value()?;
    let sign = if input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        "-"
    } else {
        ""
    };
    let literal = input.parse::<Lit>()?;
    let text = match &literal {
        Lit::Int(int) => int.base10_digits().to_owned(),
        Lit::Float(float) => float.base10_digits().to_owned(),
        Lit::Str(s) if sign.is_empty() => s.value(),
        Lit::Bool(b) if sign.is_empty() => b.value.to_string(),
        Lit::Char(c) if sign.is_empty() => c.value().to_string(),
        other => {
            return Err(syn::Error::new(
                other.span(),
                "default must be a string, number or bool literal",
            ));
        }
    };
    Ok(format!("{sign}{text}"))
}

/// Applies one field key to `out`.
fn apply_field_attr(
    meta: &ParseNestedMeta,
    field: &syn::Ident,
    out: &mut FieldAttrs,
) -> syn::Result<()> {
    let Some(ident) = meta.path.get_ident() else {
        return Err(unknown_key(meta));
    };
    match ident.to_string().as_str() {
        "short" => {
            let short = short_name(meta, "short")?;
            set_once(&mut out.short, short, meta, "short")
        }
        "long" => {
            let long = if meta.input.peek(Token![=]) {
                lit_str(meta, "long")?.value()
            } else {
                field.unraw().to_string().to_kebab_case()
            };
            if !out.longs.contains(&long) {
                out.longs.push(long);
            }
            Ok(())
        }
        "required" => {
            let required = flag(meta, "required")?;
            set_once(&mut out.required, required, meta, "required")
        }
        "default" => {
            let default = default_literal(meta)?;
            set_once(&mut out.default, default, meta, "default")
        }
        "default_with" => {
            let path = lit_path(meta, "default_with")?;
            set_once(&mut out.default_with, path, meta, "default_with")
        }
        "parse_with" => {
            let path = lit_path(meta, "parse_with")?;
            set_once(&mut out.parse_with, path, meta, "parse_with")
        }
        "custom" => {
            out.custom = true;
            Ok(())
        }
        "skip" => {
            out.skip = true;
            Ok(())
        }
        "flatten" => {
            out.flatten = true;
            Ok(())
        }
        _ => Err(unknown_key(meta)),
    }
}

/// Parses field-level `#[clash(...)]` attributes into a [`FieldRole`].
///
/// Recognised keys are `short`, `long`, `required`, `default`,
/// `default_with`, `parse_with`, `custom`, `skip` and `flatten`. Unknown
/// keys are rejected.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> Result<FieldRole, syn::Error> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new(field.span(), "Clash requires named fields"));
    };
    let mut out = FieldAttrs::default();
    parse_clash(&field.attrs, |meta| {
        out.annotated = true;
        apply_field_attr(meta, ident, &mut out)
    })?;
    resolve_role(out, ident.span())
}

fn resolve_role(attrs: FieldAttrs, span: Span) -> syn::Result<FieldRole> {
    if attrs.skip && attrs.flatten {
        return Err(syn::Error::new(span, "`skip` and `flatten` are mutually exclusive"));
    }
    if attrs.skip {
        if attrs.has_argument_keys() {
            return Err(syn::Error::new(span, "`skip` cannot be combined with other keys"));
        }
        return Ok(FieldRole::Skip);
    }
    if attrs.flatten {
        if attrs.has_argument_keys() {
            return Err(syn::Error::new(span, "`flatten` cannot be combined with other keys"));
        }
        return Ok(FieldRole::Flatten);
    }
    if !attrs.annotated {
        return Ok(FieldRole::Undeclared);
    }
    let FieldAttrs {
        short,
        longs,
        required,
        default,
        default_with,
        parse_with,
        custom,
        ..
    } = attrs;
    let Some(short) = short else {
        return Err(syn::Error::new(span, "bound fields require a `short` name"));
    };
    Ok(FieldRole::Bound(ArgumentAttrs {
        short,
        longs,
        required: required.unwrap_or(false),
        default,
        default_with,
        parse_with,
        custom,
    }))
}
