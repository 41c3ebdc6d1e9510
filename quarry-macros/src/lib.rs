mod decode_field;

use decode_field::decode_field;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct, parse_macro_input};

/// Implements `quarry::Entity`, registering a setter for every named field.
///
/// A field is matched against the row columns by its name, or by the one
/// given in `#[quarry(name = "...")]`. Fields marked `#[quarry(ignore)]` are
/// never assigned. The struct must implement `Default`.
#[proc_macro_derive(Entity, attributes(quarry))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let item: ItemStruct = parse_macro_input!(input as ItemStruct);
    match entity_impl(&item) {
        Ok(v) => v.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn entity_impl(item: &ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    let name = &item.ident;
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "Entity cannot be derived for generic structs",
        ));
    }
    let Fields::Named(fields) = &item.fields else {
        return Err(syn::Error::new_spanned(
            item,
            "Entity can only be derived for structs with named fields",
        ));
    };
    let setters = fields
        .named
        .iter()
        .map(decode_field)
        .collect::<syn::Result<Vec<_>>>()?
        .into_iter()
        .filter(|v| !v.ignore)
        .map(|v| {
            let ident = &v.ident;
            let ty = &v.ty;
            let column = &v.name;
            quote! {
                .setter(#column, |entity: &mut #name, value: #ty| entity.#ident = value)
            }
        });
    Ok(quote! {
        impl ::quarry::Entity for #name {
            fn binder() -> &'static ::quarry::Binder<Self> {
                static BINDER: ::std::sync::LazyLock<::quarry::Binder<#name>> =
                    ::std::sync::LazyLock::new(|| ::quarry::Binder::new() #(#setters)*);
                &BINDER
            }
        }
    })
}
