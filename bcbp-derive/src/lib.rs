// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for BCBP record types.
//!
//! This crate allows to `derive` a `Record` implementation and implements
//! `TryFrom<&str>` on the record too. Every field names the schema entry it
//! is read from, so offsets live in one table only.
//!
//! # Example
//!
//! Deriving an implementation on a leg:
//!
//! ```ignore
//! #[derive(Record)]
//! pub struct Leg<'a> {
//!     #[bcbp(field = FormatCode)]
//!     pub format_code: Code<'a, 1>,
//!     #[bcbp(field = PassengerName)]
//!     pub passenger_name: Text<'a, 20>,
//!     #[bcbp(tail)]  // Everything after the last fixed field
//!     pub optional_data: &'a str,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprPath, Fields, Ident, Meta};

enum FieldAttribute {
    Field(Ident),
    Tail,
}

fn parse_field_attribute(field: &syn::Field) -> syn::Result<FieldAttribute> {
    for attr in &field.attrs {
        if !attr.path().is_ident("bcbp") {
            continue;
        }

        match attr.parse_args::<Meta>()? {
            // Handle #[bcbp(field = Name)]
            Meta::NameValue(nv) if nv.path.is_ident("field") => {
                if let Expr::Path(ExprPath { path, .. }) = &nv.value {
                    if let Some(ident) = path.get_ident() {
                        return Ok(FieldAttribute::Field(ident.clone()));
                    }
                }
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    "expected a schema field name, e.g. `field = PassengerName`",
                ));
            }
            // Handle #[bcbp(tail)]
            Meta::Path(path) if path.is_ident("tail") => return Ok(FieldAttribute::Tail),
            meta => {
                return Err(syn::Error::new_spanned(
                    meta,
                    "expected `field = Name` or `tail`",
                ))
            }
        }
    }

    Err(syn::Error::new_spanned(
        field,
        "every record field needs a #[bcbp(...)] attribute",
    ))
}

/// Derive macro for implementing the `Record` trait.
///
/// Generates both the `Record` trait implementation and `TryFrom<&str>`
/// implementation. Fields are written back in declaration order, which
/// must follow the schema order.
#[proc_macro_derive(Record, attributes(bcbp))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Records borrow from the raw string, so they need a lifetime (e.g. 'a)
    let lifetime = generics.lifetimes().next().ok_or_else(|| {
        syn::Error::new_spanned(
            name,
            "Record types must have a lifetime parameter (e.g., 'a)",
        )
    })?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record derive only supports structs",
            ))
        }
    };

    let mut field_parsers = Vec::new();
    let mut field_writers = Vec::new();

    for field in fields {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

        match parse_field_attribute(field)? {
            FieldAttribute::Field(schema) => {
                field_parsers.push(quote! {
                    #field_name: fields.get(crate::Field::#schema)?
                });
                field_writers.push(quote! {
                    writer.put(crate::Field::#schema, &self.#field_name);
                });
            }
            FieldAttribute::Tail => {
                field_parsers.push(quote! {
                    #field_name: fields.tail()?
                });
                field_writers.push(quote! {
                    writer.put_tail(self.#field_name);
                });
            }
        }
    }

    Ok(quote! {
        impl #impl_generics crate::record::Record<#lifetime> for #name #ty_generics #where_clause {
            fn parse(fields: crate::record::Fields<#lifetime>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }

            fn write(&self, writer: &mut crate::record::Writer) {
                #(#field_writers)*
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime str> for #name #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(raw: &#lifetime str) -> Result<Self, crate::Error> {
                <Self as crate::record::Record>::from_raw(raw)
            }
        }
    })
}
