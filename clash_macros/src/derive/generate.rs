//! Code generation for the `Clash` derive.
//!
//! Emits one `Clash::describe` implementation: a `TypeDescription` with a
//! field declaration per field and an inherited description per flattened
//! field.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use super::parse::{ArgumentAttrs, FieldRole, ParsedField};

/// Builds the `impl Clash` block for `ident`.
pub(crate) fn describe_impl(
    ident: &syn::Ident,
    generics: &syn::Generics,
    fields: &[ParsedField],
    krate: &TokenStream,
) -> TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let type_name = ident.unraw().to_string();
    let decls = fields
        .iter()
        .filter(|field| !matches!(field.role, FieldRole::Flatten))
        .map(|field| field_decl(field, krate));
    let ancestors = fields
        .iter()
        .filter(|field| matches!(field.role, FieldRole::Flatten))
        .map(|field| ancestor(field, krate));

    quote! {
        impl #impl_generics #krate::Clash for #ident #ty_generics #where_clause {
            fn describe() -> #krate::TypeDescription<Self> {
                #krate::TypeDescription::new(#type_name)
                    #( .field(#decls) )*
                    #( .inherit(#ancestors) )*
            }
        }
    }
}

fn field_decl(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let name = field.ident.unraw().to_string();
    let ty = &field.ty;
    match &field.role {
        FieldRole::Undeclared | FieldRole::Flatten => undeclared(&name, ty, krate),
        FieldRole::Skip => {
            let decl = undeclared(&name, ty, krate);
            quote! { #decl.transient() }
        }
        FieldRole::Bound(attrs) => bound(field, &name, attrs, krate),
    }
}

fn undeclared(name: &str, ty: &syn::Type, krate: &TokenStream) -> TokenStream {
    let type_name = quote!(#ty).to_string();
    quote! { #krate::FieldDecl::undeclared(#name, #type_name) }
}

fn bound(
    field: &ParsedField,
    name: &str,
    attrs: &ArgumentAttrs,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &field.ident;
    let ty = &field.ty;
    let metadata = argument(ty, attrs, krate);
    let (kind, take) = if attrs.custom || attrs.parse_with.is_some() {
        (
            quote! { #krate::ValueKind::Custom },
            quote! { value.downcast::<#ty>()? },
        )
    } else {
        (
            quote! { <#ty as #krate::Bindable>::KIND },
            quote! { value.take::<#ty>()? },
        )
    };
    quote! {
        #krate::FieldDecl::new(
            #name,
            #kind,
            |target: &mut Self, value: #krate::Value| {
                target.#ident = #take;
                ::core::result::Result::Ok(())
            },
        )
        .argument(#metadata)
    }
}

fn argument(ty: &syn::Type, attrs: &ArgumentAttrs, krate: &TokenStream) -> TokenStream {
    let short = &attrs.short;
    let longs = &attrs.longs;
    let required = attrs.required.then(|| quote! { .required(true) });
    let default = attrs
        .default
        .as_ref()
        .map(|literal| quote! { .default_value(#literal) });
    let default_with = attrs.default_with.as_ref().map(|path| {
        quote! { .default_with(|| #krate::Value::custom::<#ty>(#path())) }
    });
    let initializer = attrs.parse_with.as_ref().map(|path| {
        quote! {
            .initializer(|raw: &str| {
                #path(raw)
                    .map(#krate::Value::custom::<#ty>)
                    .map_err(::core::convert::Into::into)
            })
        }
    });
    quote! {
        #krate::Argument::new(#short)
            #( .long(#longs) )*
            #required
            #default
            #default_with
            #initializer
    }
}

fn ancestor(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let ident = &field.ident;
    let ty = &field.ty;
    quote! {
        <#ty as #krate::Clash>::describe().lift(|target: &mut Self| &mut target.#ident)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for generated token shapes.

    use super::*;
    use crate::derive::parse::parse_input;
    use anyhow::{Result, anyhow, ensure};
    use syn::{DeriveInput, parse_quote};

    fn expand(input: &DeriveInput) -> Result<String> {
        let (ident, fields, _) = parse_input(input).map_err(|err| anyhow!(err))?;
        let krate = quote! { ::clash };
        Ok(describe_impl(&ident, &input.generics, &fields, &krate).to_string())
    }

    #[test]
    fn bound_fields_use_the_bindable_kind() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Demo {
                #[clash(short = "p", long = "port", default = 8080)]
                port: u16,
            }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens.contains("< u16 as :: clash :: Bindable > :: KIND"),
            "missing kind: {tokens}"
        );
        ensure!(tokens.contains(". long (\"port\")"), "missing long: {tokens}");
        ensure!(
            tokens.contains(". default_value (\"8080\")"),
            "missing default: {tokens}"
        );
        ensure!(!tokens.contains("required"), "unexpected required: {tokens}");
        Ok(())
    }

    #[test]
    fn parse_with_fields_are_custom() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Demo {
                #[clash(short = "t", parse_with = parse_timeout)]
                timeout: std::time::Duration,
            }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens.contains(":: clash :: ValueKind :: Custom"),
            "missing custom kind: {tokens}"
        );
        ensure!(tokens.contains("parse_timeout (raw)"), "missing initializer: {tokens}");
        ensure!(tokens.contains("downcast"), "missing downcast: {tokens}");
        Ok(())
    }

    #[test]
    fn custom_fields_skip_the_bindable_kind() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Demo {
                #[clash(short = "d", custom, default_with = five_seconds)]
                delay: std::time::Duration,
            }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens.contains(":: clash :: ValueKind :: Custom"),
            "missing custom kind: {tokens}"
        );
        ensure!(!tokens.contains("Bindable"), "unexpected Bindable bound: {tokens}");
        ensure!(!tokens.contains("initializer"), "unexpected initializer: {tokens}");
        ensure!(tokens.contains("five_seconds ()"), "missing factory: {tokens}");
        Ok(())
    }

    #[test]
    fn flattened_fields_are_inherited_after_own_fields() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Demo {
                #[clash(flatten)]
                common: Common,
                #[clash(short = "n")]
                name: String,
                #[clash(skip)]
                cache: String,
                scratch: u8,
            }
        };
        let tokens = expand(&input)?;
        let inherit = tokens
            .find(". inherit")
            .ok_or_else(|| anyhow!("missing inherit: {tokens}"))?;
        let last_field = tokens
            .rfind(". field")
            .ok_or_else(|| anyhow!("missing fields: {tokens}"))?;
        ensure!(last_field < inherit, "inherit precedes fields: {tokens}");
        ensure!(
            tokens.contains("undeclared (\"cache\" , \"String\") . transient ()"),
            "missing transient: {tokens}"
        );
        ensure!(
            tokens.contains("undeclared (\"scratch\" , \"u8\")"),
            "missing undeclared: {tokens}"
        );
        ensure!(!tokens.contains("\"common\""), "flattened field declared: {tokens}");
        Ok(())
    }

    #[test]
    fn generics_are_forwarded() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Demo<T: Default + 'static> {
                #[clash(skip)]
                inner: T,
            }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens.contains("impl < T : Default + 'static > :: clash :: Clash for Demo < T >"),
            "generics not forwarded: {tokens}"
        );
        Ok(())
    }
}
