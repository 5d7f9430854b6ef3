use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, parse_macro_input};

use crate::support::{attrs, diag, utils};

const ATTR: &str = "validate";
const KEYS: &[&str] = &["rule", "name"];

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    if let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident(ATTR)) {
        return Err(diag::error_spanned(attr, "`#[validate]` is only allowed on fields"));
    }

    let fields = utils::require_named_fields(input)?;
    let entries = fields
        .named
        .iter()
        .map(field_entry)
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics ::nebula_rulecheck::Inspect for #struct_name #ty_generics #where_clause {
            fn to_value(&self) -> ::nebula_rulecheck::Value<'_> {
                ::nebula_rulecheck::Value::Composite(self)
            }
        }

        impl #impl_generics ::nebula_rulecheck::Element for #struct_name #ty_generics #where_clause {
            const KIND: ::nebula_rulecheck::ElementKind =
                ::nebula_rulecheck::ElementKind::Unsupported("record");
        }

        impl #impl_generics ::nebula_rulecheck::Record for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::nebula_rulecheck::Field<'_>> {
                ::std::vec![#(#entries),*]
            }
        }
    })
}

fn field_entry(field: &syn::Field) -> syn::Result<TokenStream2> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(diag::error_spanned(field, "expected a named field"));
    };

    let Some(args) = attrs::parse_attrs(&field.attrs, ATTR)? else {
        let name = ident.unraw().to_string();
        return Ok(quote! { ::nebula_rulecheck::Field::untagged(#name) });
    };

    args.ensure_known(KEYS)?;
    let rule = args.require_str("rule", ident)?;
    let name = match args.get_str("name")? {
        Some(name) if name.value().is_empty() => {
            return Err(diag::error_spanned(&name, "`name` must not be empty"));
        }
        Some(name) => name.value(),
        None => ident.unraw().to_string(),
    };

    Ok(quote! {
        ::nebula_rulecheck::Field::tagged(#name, #rule, &self.#ident)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: DeriveInput) -> syn::Result<String> {
        expand(&input).map(|ts| ts.to_string())
    }

    #[test]
    fn test_tagged_and_untagged_fields() {
        let out = expand_str(syn::parse_quote! {
            struct User {
                #[validate(rule = "len:36")]
                id: String,
                #[validate(rule = "in:200,404", name = "status")]
                code: i32,
                r#type: String,
            }
        })
        .unwrap();

        assert!(out.contains(r#"Field :: tagged ("id" , "len:36" , & self . id)"#));
        assert!(out.contains(r#"Field :: tagged ("status" , "in:200,404" , & self . code)"#));
        assert!(out.contains(r#"Field :: untagged ("type")"#));
        assert!(out.contains("Value :: Composite (self)"));
    }

    #[test]
    fn test_missing_rule() {
        let err = expand_str(syn::parse_quote! {
            struct User {
                #[validate(name = "id")]
                id: String,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("missing required attribute `rule"));
    }

    #[test]
    fn test_rejects_bad_attributes() {
        let unknown = expand_str(syn::parse_quote! {
            struct User {
                #[validate(rule = "len:1", skip)]
                id: String,
            }
        });
        let not_a_string = expand_str(syn::parse_quote! {
            struct User {
                #[validate(rule = 36)]
                id: String,
            }
        });
        let on_struct = expand_str(syn::parse_quote! {
            #[validate(rule = "len:1")]
            struct User {
                id: String,
            }
        });
        let empty_name = expand_str(syn::parse_quote! {
            struct User {
                #[validate(rule = "len:1", name = "")]
                id: String,
            }
        });

        assert!(unknown.is_err());
        assert!(not_a_string.is_err());
        assert!(on_struct.is_err());
        assert!(empty_name.is_err());
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let tuple = expand_str(syn::parse_quote! {
            struct Id(#[validate(rule = "len:1")] String);
        });
        assert!(tuple.is_err());
    }
}
