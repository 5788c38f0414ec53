use crate::{DeriveProperties, FieldVisibility, PropertyField};
use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};
use quote::{quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned};

pub fn expand(input: &DeriveProperties) -> TokenStream {
    let ident = &input.ident;
    let type_name = ident.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let properties = input
        .fields
        .iter()
        .filter(|field| !field.args.skip)
        .map(expand_property);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::assert_props::Described for #ident #ty_generics #where_clause {
            fn type_info() -> ::assert_props::TypeInfo {
                ::assert_props::TypeInfo::new(
                    #type_name,
                    ::core::module_path!(),
                )
            }

            fn properties() -> ::std::vec::Vec<::assert_props::PropertyInfo> {
                ::std::vec![#(#properties),*]
            }
        }
    }
}

/// Builder chain for one property:
///
/// ```text
/// PropertyInfo::new("name", "String")
///     .with_visibility(Visibility::Public)
///     .with_virtual(true)
///     .read_only()
///     .decorated_with::<Required>()
/// ```
fn expand_property(field: &PropertyField) -> TokenStream {
    let name = &field.name;
    let declared_type = type_to_string(&field.ty);

    let visibility = match field.visibility {
        FieldVisibility::Public => quote! { ::assert_props::Visibility::Public },
        FieldVisibility::Crate => quote! { ::assert_props::Visibility::Crate },
        FieldVisibility::Private => quote! { ::assert_props::Visibility::Private },
    };
    let is_virtual = field.args.is_virtual;
    let read_only = field.args.read_only.then(|| quote! { .read_only() });

    // Spanned at the annotation so an unknown type is reported where it is
    // written, not at the derive.
    let annotations = field.args.decorated_with.iter().map(|kind| {
        quote_spanned! {kind.span()=>
            .decorated_with::<#kind>()
        }
    });

    quote! {
        ::assert_props::PropertyInfo::new(#name, #declared_type)
            .with_visibility(#visibility)
            .with_virtual(#is_virtual)
            #read_only
            #(#annotations)*
    }
}

/// Renders a type the way it is usually written: `Option<String>`,
/// `HashMap<String, u32>`, `&'a str`, `fn(u32) -> bool`.
pub(crate) fn type_to_string(ty: &syn::Type) -> String {
    let mut out = String::new();
    write_tokens(quote! { #ty }, &mut out);
    out
}

// Keywords that are separated from a following `[...]` or `(...)`.
const SPACED_KEYWORDS: &[&str] = &["mut", "const", "dyn", "impl"];

#[derive(Clone, Copy, PartialEq)]
enum Last {
    Nothing,
    /// Identifier, literal or group.
    Word,
    Keyword,
    /// The `'` of a lifetime.
    Tick,
    Punct,
    /// A space is due before the next token.
    Gap,
}

fn write_tokens(tokens: TokenStream, out: &mut String) {
    let mut last = Last::Nothing;

    for token in tokens {
        match token {
            TokenTree::Ident(_) | TokenTree::Literal(_) => {
                if matches!(last, Last::Word | Last::Keyword | Last::Gap) {
                    out.push(' ');
                }
                let text = token.to_string();
                last = if SPACED_KEYWORDS.contains(&text.as_str()) {
                    Last::Keyword
                } else {
                    Last::Word
                };
                out.push_str(&text);
            }
            TokenTree::Group(group) => {
                if matches!(last, Last::Keyword | Last::Gap) {
                    out.push(' ');
                }
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", ""),
                };
                out.push_str(open);
                write_tokens(group.stream(), out);
                out.push_str(close);
                last = Last::Word;
            }
            TokenTree::Punct(punct) => {
                let ch = punct.as_char();
                match ch {
                    ',' | ';' => {
                        out.push(ch);
                        last = Last::Gap;
                    }
                    '+' | '=' => {
                        out.push(' ');
                        out.push(ch);
                        last = Last::Gap;
                    }
                    '\'' => {
                        if matches!(last, Last::Word | Last::Keyword | Last::Gap) {
                            out.push(' ');
                        }
                        out.push(ch);
                        last = Last::Tick;
                    }
                    '-' if punct.spacing() == Spacing::Joint => {
                        out.push_str(" -");
                        last = Last::Punct;
                    }
                    '>' if out.ends_with(" -") => {
                        out.push(ch);
                        last = Last::Gap;
                    }
                    _ => {
                        if last == Last::Gap {
                            out.push(' ');
                        }
                        out.push(ch);
                        last = Last::Punct;
                    }
                }
            }
        }
    }
}
