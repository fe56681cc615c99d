use std::collections::HashMap;

use darling::{util::PathList, FromDeriveInput, FromField, FromMeta};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;

/// Generates key getters usable as identity functions of a `memorytable::Table`.
///
/// Every `#[record(key(fields(..)))]` attribute produces an associated function
/// `fn(&Self) -> (..)` returning the listed fields, cloned, as a tuple (or the bare
/// field for a single-field key). The getter is named `by_<fields>` unless
/// `getter = name` is given.
#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    impl_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implements `memorytable::Blank` for a struct: it is blank when all of its fields are.
#[proc_macro_derive(Blank)]
pub fn blank_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    impl_blank(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn impl_record(ast: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let options = match RecordOptions::from_derive_input(ast) {
        Ok(options) => options,
        Err(err) => return Ok(err.write_errors()),
    };

    let ident = &options.ident;
    let (impl_generics, ty_generics, where_clause) = options.generics.split_for_impl();

    let fields = options
        .data
        .take_struct()
        .ok_or_else(|| syn::Error::new(ast.span(), "Record can only be derived for structs"))?;
    let mut field_types = HashMap::new();

    for field in fields {
        if let Some(field_ident) = field.ident {
            field_types.insert(syn::Path::from(field_ident), field.ty);
        }
    }

    let mut getters = Vec::new();

    for key in options.keys.iter() {
        let fields = &key.fields;

        if fields.is_empty() {
            return Err(syn::Error::new(
                ast.span(),
                "a record key needs at least one field",
            ));
        }

        let mut names = Vec::new();
        let mut types = Vec::<syn::Type>::new();

        for field in fields.iter() {
            let name = field
                .get_ident()
                .ok_or_else(|| syn::Error::new(field.span(), "key fields must be plain field names"))?;
            let ty = field_types
                .get(field)
                .ok_or_else(|| syn::Error::new(field.span(), format!("no field named `{name}`")))?;
            names.push(name.to_string());
            types.push(ty.clone());
        }

        let getter = key
            .getter
            .clone()
            .unwrap_or_else(|| format_ident!("by_{}", names.join("_")));
        let doc = format!("Identity of a record by `{}`.", names.join("`, `"));

        let (key_type, key) = if types.len() == 1 {
            let ty = &types[0];
            let field = &fields[0];
            (quote!(#ty), quote!(record.#field.clone()))
        } else {
            (
                quote!((#(#types),*)),
                quote!((#(record.#fields.clone()),*)),
            )
        };

        getters.push(quote! {
            #[doc = #doc]
            pub fn #getter(record: &Self) -> #key_type {
                #key
            }
        });
    }

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#getters)*
        }
    })
}

fn impl_blank(ast: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let options = match BlankOptions::from_derive_input(ast) {
        Ok(options) => options,
        Err(err) => return Ok(err.write_errors()),
    };

    let ident = &options.ident;
    let mut generics = options.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(::memorytable::Blank));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = options
        .data
        .take_struct()
        .ok_or_else(|| syn::Error::new(ast.span(), "Blank can only be derived for structs"))?;

    let checks = fields.iter().enumerate().map(|(i, field)| match &field.ident {
        Some(name) => quote!(::memorytable::Blank::is_blank(&self.#name)),
        None => {
            let index = syn::Index::from(i);
            quote!(::memorytable::Blank::is_blank(&self.#index))
        }
    });

    Ok(quote! {
        impl #impl_generics ::memorytable::Blank for #ident #ty_generics #where_clause {
            fn is_blank(&self) -> bool {
                true #(&& #checks)*
            }
        }
    })
}

#[derive(FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
struct RecordOptions {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<(), FieldOptions>,
    #[darling(default, multiple, rename = "key")]
    keys: Vec<KeyAttr>,
}

#[derive(FromMeta)]
struct KeyAttr {
    fields: PathList,
    #[darling(default)]
    getter: Option<syn::Ident>,
}

#[derive(FromDeriveInput)]
#[darling(supports(struct_any))]
struct BlankOptions {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<(), FieldOptions>,
}

#[derive(FromField)]
struct FieldOptions {
    ident: Option<syn::Ident>,
    ty: syn::Type,
}
