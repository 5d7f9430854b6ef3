use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use syn::{
    Attribute, Ident, Lit, LitStr, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed attribute arguments container.
#[derive(Debug, Clone, Default)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A bare flag like `skip`
    Flag(Ident),
    /// Key-value pair like `rule = "len:36"`
    KeyValue { key: Ident, value: AttrValue },
}

impl AttrItem {
    fn key(&self) -> &Ident {
        match self {
            Self::Flag(key) | Self::KeyValue { key, .. } => key,
        }
    }
}

/// Right-hand side of a key-value pair.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Ident(Ident),
    Lit(Lit),
    Tokens(TokenStream2),
}

impl ToTokens for AttrValue {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        match self {
            Self::Ident(i) => i.to_tokens(tokens),
            Self::Lit(l) => l.to_tokens(tokens),
            Self::Tokens(t) => t.to_tokens(tokens),
        }
    }
}

impl AttrArgs {
    /// Find a key-value pair by key name.
    pub fn get_value(&self, key: &str) -> Option<&AttrValue> {
        self.items.iter().find_map(|item| match item {
            AttrItem::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Get a string literal by key; any other value kind is an error.
    pub fn get_str(&self, key: &str) -> Result<Option<LitStr>> {
        match self.get_value(key) {
            None => Ok(None),
            Some(AttrValue::Lit(Lit::Str(s))) => Ok(Some(s.clone())),
            Some(other) => Err(diag::error_spanned(
                other,
                format!("expected a string literal for `{key}`"),
            )),
        }
    }

    /// Require a string literal, returning an error spanning `span` if missing.
    pub fn require_str(&self, key: &str, span: &impl ToTokens) -> Result<LitStr> {
        self.get_str(key)?.ok_or_else(|| {
            diag::error_spanned(
                span,
                format!("missing required attribute `{key} = \"...\"`"),
            )
        })
    }

    /// Reject keys outside `allowed` and repeated keys.
    pub fn ensure_known(&self, allowed: &[&str]) -> Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            let key = item.key();
            if !allowed.iter().any(|a| key == a) {
                return Err(diag::error_spanned(
                    key,
                    format!("unknown attribute `{key}`, expected one of: {}", allowed.join(", ")),
                ));
            }
            if self.items[..index].iter().any(|prev| prev.key() == key) {
                return Err(diag::error_spanned(key, format!("duplicate attribute `{key}`")));
            }
        }
        Ok(())
    }
}

/// Parse attribute like `#[validate(...)]` (the whole Attribute, not only args).
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(AttrArgs::default())),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] (not name-value)"),
        )),
    }
}

/// Parse all attributes of a given name and merge them.
///
/// Returns `None` when no such attribute is present.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<Option<AttrArgs>> {
    let mut result: Option<AttrArgs> = None;

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.get_or_insert_with(AttrArgs::default).items.extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|x| x.0)
            .collect();
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value = input.parse::<AttrValueParser>()?.0;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}

struct AttrValueParser(AttrValue);

impl Parse for AttrValueParser {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Lit) {
            return Ok(Self(AttrValue::Lit(input.parse()?)));
        }
        if input.peek(Ident) {
            return Ok(Self(AttrValue::Ident(input.parse()?)));
        }

        // Anything else up to the next comma, kept for diagnostics.
        let mut tokens = TokenStream2::new();
        while !input.is_empty() && !input.peek(Token![,]) {
            let tt: proc_macro2::TokenTree = input.parse()?;
            tokens.extend(std::iter::once(tt));
        }
        Ok(Self(AttrValue::Tokens(tokens)))
    }
}
