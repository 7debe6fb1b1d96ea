//! Input parsing for the `Clash` derive macro.
//!
//! This module gathers the struct identifier, fields, and relevant attribute
//! metadata in one pass so macro expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields};

use super::{FieldRole, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A named field together with its parsed role.
pub(crate) struct ParsedField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    pub role: FieldRole,
}

/// Gathers information from the user-provided struct.
///
/// The returned tuple contains:
/// - `ident`: the struct identifier
/// - `fields`: the struct's fields in declaration order with their roles
/// - `struct_attrs`: parsed struct-level attributes
pub(crate) fn parse_input(
    input: &DeriveInput,
) -> Result<(syn::Ident, Vec<ParsedField>, StructAttrs), syn::Error> {
    let ident = input.ident.clone();
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Clash requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Clash can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let role = parse_field_attrs(field)?;
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Clash requires named fields"));
        };
        fields.push(ParsedField {
            ident: field_ident,
            ty: field.ty.clone(),
            role,
        });
    }
    Ok((ident, fields, struct_attrs))
}
