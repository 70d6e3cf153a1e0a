#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Lit, LitStr};

/// Checks that `value` is exactly one cluster.
fn check_cluster(value: &str, lit: &LitStr) -> syn::Result<()> {
    match grapheme_seg::length(value, Some(2)) {
        0 => Err(syn::Error::new(lit.span(), "string must not be empty")),
        1 => Ok(()),
        _ => Err(syn::Error::new(
            lit.span(),
            "string must not contain more than one grapheme cluster",
        )),
    }
}

fn grapheme_macro(literal: Lit) -> syn::Result<TokenStream2> {
    let lit_str = match literal {
        Lit::Str(lit_str) => lit_str,
        Lit::Char(lit_char) => LitStr::new(&lit_char.value().to_string(), lit_char.span()),
        other => {
            return Err(syn::Error::new(
                other.span(),
                "a string literal or a char literal was expected",
            ));
        }
    };
    check_cluster(&lit_str.value(), &lit_str)?;

    Ok(quote! {
        unsafe { ::grapheme_seg::Grapheme::from_code_points_unchecked(#lit_str) }
    })
}

/// Literal for `&'static Grapheme`.
///
/// Accepts a string literal or a char literal holding exactly one extended
/// grapheme cluster, and rejects anything else at compile time.
///
/// ```
/// use grapheme_seg_macro::g;
///
/// let baby = g!("\u{1F476}\u{1F3FB}");
/// assert_eq!(baby.as_str(), "\u{1F476}\u{1F3FB}");
/// assert_eq!(g!('x').as_str(), "x");
/// ```
///
/// ```compile_fail
/// let two = grapheme_seg_macro::g!("ab");
/// ```
///
/// ```compile_fail
/// let none = grapheme_seg_macro::g!("");
/// ```
#[proc_macro]
pub fn g(input: TokenStream) -> TokenStream {
    syn::parse::<Lit>(input)
        .and_then(grapheme_macro)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(tokens: TokenStream2) -> syn::Result<String> {
        grapheme_macro(syn::parse2(tokens)?).map(|t| t.to_string())
    }

    #[test]
    fn test_accepts_one_cluster() {
        let expanded = expand(quote!("e\u{0301}")).unwrap();
        assert!(expanded.contains("from_code_points_unchecked"));
        assert!(expand(quote!('\n')).is_ok());
        assert!(expand(quote!("\r\n")).is_ok());
    }

    #[test]
    fn test_rejects_other_input() {
        let err = expand(quote!("ab")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "string must not contain more than one grapheme cluster"
        );
        let err = expand(quote!("")).unwrap_err();
        assert_eq!(err.to_string(), "string must not be empty");
        assert!(expand(quote!(42)).is_err());
        assert!(expand(quote!(b"a")).is_err());
    }
}
