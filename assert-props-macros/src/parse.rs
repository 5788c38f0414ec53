use crate::{DeriveProperties, FieldVisibility, PropertyArgs, PropertyField};
use proc_macro2::Span;
use syn::{
    Data, DeriveInput, Fields, Ident, Result, Token, Type,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

const PROPERTY_ATTR: &str = "property";

/// One argument of a `#[property(...)]` attribute.
enum PropertyArg {
    Virtual(Span),
    ReadOnly(Span),
    Skip(Span),
    DecoratedWith(Punctuated<Type, Token![,]>),
}

impl Parse for PropertyArg {
    /// Parses a single attribute argument.
    ///
    /// # Example Input
    /// ```text
    /// virtual
    /// read_only
    /// skip
    /// decorated_with(Required, validation::Email)
    /// ```
    ///
    /// `virtual` is a reserved word, so identifiers are read with `parse_any`.
    fn parse(input: ParseStream) -> Result<Self> {
        let ident = input.call(Ident::parse_any)?;
        let span = ident.span();

        match ident.to_string().as_str() {
            "virtual" => Ok(PropertyArg::Virtual(span)),
            "read_only" => Ok(PropertyArg::ReadOnly(span)),
            "skip" => Ok(PropertyArg::Skip(span)),
            "decorated_with" => {
                let content;
                syn::parenthesized!(content in input);
                let kinds = content.parse_terminated(Type::parse, Token![,])?;
                if kinds.is_empty() {
                    return Err(syn::Error::new(
                        span,
                        "`decorated_with` expects at least one annotation type",
                    ));
                }
                Ok(PropertyArg::DecoratedWith(kinds))
            }
            other => Err(syn::Error::new(
                span,
                format!(
                    "unknown property argument `{}`, expected `virtual`, `read_only`, `decorated_with` or `skip`",
                    other
                ),
            )),
        }
    }
}

impl PropertyArgs {
    fn apply(&mut self, arg: PropertyArg) -> Result<()> {
        fn set(flag: &mut bool, span: Span, name: &str) -> Result<()> {
            if *flag {
                return Err(syn::Error::new(
                    span,
                    format!("duplicate `{}` argument", name),
                ));
            }
            *flag = true;
            Ok(())
        }

        match arg {
            PropertyArg::Virtual(span) => set(&mut self.is_virtual, span, "virtual"),
            PropertyArg::ReadOnly(span) => set(&mut self.read_only, span, "read_only"),
            PropertyArg::Skip(span) => {
                set(&mut self.skip, span, "skip")?;
                self.skip_span = Some(span);
                Ok(())
            }
            PropertyArg::DecoratedWith(kinds) => {
                self.decorated_with.extend(kinds);
                Ok(())
            }
        }
    }

    fn check(&self) -> Result<()> {
        let combined = self.is_virtual || self.read_only || !self.decorated_with.is_empty();
        match self.skip_span {
            Some(span) if combined => Err(syn::Error::new(
                span,
                "`skip` cannot be combined with other property arguments",
            )),
            _ => Ok(()),
        }
    }
}

/// Reads the derive input into the model used by `expand`.
///
/// Errors from every field are combined so a single build reports all of
/// them.
pub(crate) fn parse(input: DeriveInput) -> Result<DeriveProperties> {
    let named = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(named) => named,
            _ => {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "#[derive(Properties)] requires a struct with named fields",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "#[derive(Properties)] is not supported on enums",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "#[derive(Properties)] is not supported on unions",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.named.len());
    let mut errors = Vec::new();

    for field in named.named {
        match parse_field(field) {
            Ok(field) => fields.push(field),
            Err(err) => errors.push(err),
        }
    }

    if let Some(err) = errors.into_iter().reduce(|mut combined, err| {
        combined.combine(err);
        combined
    }) {
        return Err(err);
    }

    Ok(DeriveProperties {
        ident: input.ident,
        generics: input.generics,
        fields,
    })
}

fn parse_field(field: syn::Field) -> Result<PropertyField> {
    let mut args = PropertyArgs::default();

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident(PROPERTY_ATTR)) {
        let parsed =
            attr.parse_args_with(Punctuated::<PropertyArg, Token![,]>::parse_terminated)?;
        for arg in parsed {
            args.apply(arg)?;
        }
    }
    args.check()?;

    let visibility = match field.vis {
        syn::Visibility::Public(_) => FieldVisibility::Public,
        syn::Visibility::Restricted(_) => FieldVisibility::Crate,
        syn::Visibility::Inherited => FieldVisibility::Private,
    };

    let Some(ident) = field.ident else {
        return Err(syn::Error::new(
            Span::call_site(),
            "#[derive(Properties)] requires named fields",
        ));
    };

    Ok(PropertyField {
        name: ident.unraw().to_string(),
        ty: field.ty,
        visibility,
        args,
    })
}
