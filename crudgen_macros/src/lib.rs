use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ext::IdentExt, parse_macro_input, Data, DeriveInput, Error, Field, Fields, Type, Visibility};

/// Derive `crudgen::mapper::Record` for a struct with named fields.
///
/// Only `pub` fields are visible to the mapper. A field can be hidden with
/// `#[record(skip)]`. `Option<T>` fields are reported as optional: an empty
/// value is never copied.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_record(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct MappedField<'a> {
    field: &'a Field,
    name: String,
    optional: bool,
}

fn expand_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => {
                return Err(Error::new_spanned(
                    other,
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                ident,
                "Record can only be derived for structs with named fields",
            ))
        }
    };

    let mut fields = Vec::new();
    for field in named {
        if !matches!(field.vis, Visibility::Public(_)) || is_skipped(field)? {
            continue;
        }
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        fields.push(MappedField {
            field,
            name: field_ident.unraw().to_string(),
            optional: is_option(&field.ty),
        });
    }

    let descriptors = fields.iter().map(descriptor_expr);

    let values = fields.iter().map(|mapped| {
        let descriptor = descriptor_expr(mapped);
        let field_ident = &mapped.field.ident;
        if mapped.optional {
            quote! {
                ::crudgen::mapper::FieldValue::optional(#descriptor, self.#field_ident.as_ref())
            }
        } else {
            quote! {
                ::crudgen::mapper::FieldValue::present(#descriptor, &self.#field_ident)
            }
        }
    });

    let assign_arms = fields.iter().map(|mapped| {
        let name = &mapped.name;
        let field_ident = &mapped.field.ident;
        let ty = &mapped.field.ty;
        quote! {
            #name => match value.downcast_ref::<#ty>() {
                Some(value) => {
                    self.#field_ident = ::std::clone::Clone::clone(value);
                    true
                }
                None => false,
            },
        }
    });

    let record_name = ident.to_string();

    Ok(quote! {
        impl #impl_generics ::crudgen::mapper::Record for #ident #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #record_name
            }

            fn descriptors(&self) -> ::std::vec::Vec<::crudgen::mapper::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn values(&self) -> ::std::vec::Vec<::crudgen::mapper::FieldValue<'_>> {
                ::std::vec![#(#values),*]
            }

            fn assign(&mut self, field: &str, value: &dyn ::std::any::Any) -> bool {
                match field {
                    #(#assign_arms)*
                    _ => false,
                }
            }
        }
    })
}

fn descriptor_expr(mapped: &MappedField<'_>) -> TokenStream2 {
    let name = &mapped.name;
    let ty = &mapped.field.ty;
    let kind = if mapped.optional {
        quote! { ::crudgen::mapper::FieldKind::Optional }
    } else {
        quote! { ::crudgen::mapper::FieldKind::Value }
    };
    quote! {
        ::crudgen::mapper::FieldDescriptor::new(#name, #kind, ::crudgen::mapper::TypeTag::of::<#ty>())
    }
}

fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.qself.is_none()
        && path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option")
}
