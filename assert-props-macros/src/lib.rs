//! Procedural macro implementation for assert-props.
//!
//! This crate provides `#[derive(Properties)]` for the `assert-props` crate.
//! Users should depend on `assert-props`, which re-exports the derive.
//!
//! # Architecture Overview
//!
//! The derive runs in two phases:
//!
//! 1. **Parse** (`parse.rs`): read the struct and its `#[property(...)]`
//!    attributes into `DeriveProperties`
//! 2. **Expand** (`expand.rs`): emit an `assert_props::Described` impl that
//!    builds one `PropertyInfo` per field
//!
//! The generated code only uses the public builder API of `assert-props`, so
//! hand-written descriptors and derived ones are interchangeable.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod expand;
mod parse;

// Root-level model of the derive input
struct DeriveProperties {
    ident: syn::Ident,
    generics: syn::Generics,
    fields: Vec<PropertyField>,
}

// One named field and what its attributes say about it
struct PropertyField {
    /// Field name without the `r#` prefix.
    name: String,
    ty: syn::Type,
    visibility: FieldVisibility,
    args: PropertyArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldVisibility {
    Public,
    Crate,
    Private,
}

/// Accumulated `#[property(...)]` arguments of a field.
#[derive(Default)]
struct PropertyArgs {
    is_virtual: bool,
    read_only: bool,
    skip: bool,
    skip_span: Option<proc_macro2::Span>,
    decorated_with: Vec<syn::Type>,
}

/// Derives `assert_props::Described` for a struct with named fields.
///
/// Each field becomes a property whose declared type is the field type as
/// written and whose accessors share the field's visibility. Fields are
/// configured with `#[property(...)]`:
///
/// - `virtual`: the accessors are virtual
/// - `read_only`: the property has no setter
/// - `decorated_with(A, B, ..)`: applies the marker annotations `A`, `B`, ...
/// - `skip`: the field is not a property
///
/// ```rust
/// use assert_props::{Described, Properties, Visibility};
///
/// struct Required;
///
/// #[derive(Properties)]
/// pub struct Person {
///     #[property(virtual, decorated_with(Required))]
///     pub name: String,
///     #[property(read_only)]
///     pub(crate) id: u64,
///     #[property(skip)]
///     cache: Option<String>,
/// }
///
/// let props = Person::properties();
/// assert_eq!(props.len(), 2);
///
/// assert_eq!(props[0].to_string(), "String name");
/// assert!(props[0].is_virtual());
/// assert!(props[0].is_decorated_with::<Required>());
///
/// assert_eq!(props[1].visibility(), Some(Visibility::Crate));
/// assert!(!props[1].is_writable());
/// ```
///
/// Misuse is reported at compile time: unknown or duplicate arguments,
/// `skip` combined with other arguments, and derives on enums, unions or
/// tuple structs.
#[proc_macro_derive(Properties, attributes(property))]
pub fn derive_properties(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let derive = match parse::parse(input) {
        Ok(derive) => derive,
        Err(err) => return TokenStream::from(err.to_compile_error()),
    };

    TokenStream::from(expand::expand(&derive))
}
