use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident,
    PathArguments, PathSegment, Type, Variant,
};

const INTERNAL: &str = "Internal";
const MISSING_CONTEXT: &str =
    "composer_error requires `context: Option<Cow<'static, str>>` for variants with a source";

pub fn expand(input: DeriveInput) -> TokenStream {
    match ErrorModel::parse(&input) {
        Ok(model) => model.render(&input),
        Err(err) => err.to_compile_error(),
    }
}

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg: Vec<&'a Attribute>,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            let message = "composer_error requires named fields for source/context handling";
            return Err(match &variant.fields {
                Fields::Unit => syn::Error::new_spanned(&variant.ident, message),
                fields => syn::Error::new_spanned(fields, message),
            });
        };

        Ok(Self {
            ident: &variant.ident,
            source: source_field(fields).and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty))),
            has_context: context_field(fields)?.is_some(),
            cfg: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
        })
    }

    fn is_internal(&self) -> bool {
        self.ident == INTERNAL
    }
}

struct ErrorModel<'a> {
    name: &'a Ident,
    ext: Ident,
    variants: Vec<ErrorVariant<'a>>,
    missing_derives: Vec<TokenStream>,
}

impl<'a> ErrorModel<'a> {
    fn parse(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "composer_error can only be applied to enums",
            ));
        };

        let variants =
            data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

        if let Some(v) = variants.iter().find(|v| v.source.is_some() && !v.has_context) {
            return Err(syn::Error::new_spanned(v.ident, MISSING_CONTEXT));
        }

        let derived = derived_traits(&input.attrs);
        let mut missing_derives = Vec::new();
        if !derived.contains("Debug") {
            missing_derives.push(quote! { Debug });
        }
        if !derived.contains("Error") {
            missing_derives.push(quote! { ::thiserror::Error });
        }

        Ok(Self {
            name: &input.ident,
            ext: format_ident!("{}Ext", input.ident),
            variants,
            missing_derives,
        })
    }

    fn render(&self, input: &DeriveInput) -> TokenStream {
        let derives = if self.missing_derives.is_empty() {
            quote! {}
        } else {
            let traits = &self.missing_derives;
            quote! { #[derive(#(#traits),*)] }
        };

        let context_trait = self.context_trait();
        let source_impls = self.variants.iter().filter_map(|v| self.source_impls(v));
        let internal_impls = self.internal_impls();

        quote! {
            #[allow(non_shorthand_field_patterns)]
            #derives
            #input

            #context_trait
            #(#source_impls)*
            #internal_impls

            #[allow(dead_code)]
            fn format_context(
                context: &Option<::std::borrow::Cow<'static, str>>,
            ) -> ::std::borrow::Cow<'static, str> {
                context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                    ::std::borrow::Cow::Owned(format!(" ({c})"))
                })
            }
        }
    }

    fn context_trait(&self) -> TokenStream {
        let name = self.name;
        let ext = &self.ext;
        let arms = self.variants.iter().filter(|v| v.has_context).map(|v| {
            let cfg = &v.cfg;
            let ident = v.ident;
            quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
        });

        quote! {
            pub trait #ext<T> {
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> Result<T, #name>;
            }

            #[automatically_derived]
            impl<T> #ext<T> for Result<T, #name> {
                #[inline]
                fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                    self.map_err(|mut err| {
                        match &mut err {
                            #(#arms)*
                            _ => {}
                        }
                        err
                    })
                }
            }
        }
    }

    fn source_impls(&self, v: &ErrorVariant<'_>) -> Option<TokenStream> {
        if v.is_internal() {
            return None;
        }
        let (field, ty) = v.source?;
        let name = self.name;
        let ext = &self.ext;
        let ident = v.ident;
        let cfg = &v.cfg;

        Some(quote! {
            #(#cfg)*
            #[automatically_derived]
            impl From<#ty> for #name {
                #[inline]
                fn from(#field: #ty) -> Self {
                    Self::#ident { #field, context: None }
                }
            }

            #(#cfg)*
            impl<T> #ext<T> for ::std::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name> {
                    self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
                }
            }
        })
    }

    fn internal_impls(&self) -> TokenStream {
        let Some(internal) = self.variants.iter().find(|v| v.is_internal()) else {
            return quote! {};
        };
        let name = self.name;
        let cfg = &internal.cfg;

        quote! {
            #(#cfg)*
            impl From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            #(#cfg)*
            impl From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    }
}

fn context_field(fields: &FieldsNamed) -> syn::Result<Option<&Field>> {
    let Some(field) = fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == "context"))
    else {
        return Ok(None);
    };

    if is_optional_static_cow_str(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn source_field(fields: &FieldsNamed) -> Option<&Field> {
    fields.named.iter().find(|field| {
        field.ident.as_ref().is_some_and(|ident| ident == "source")
            || field.attrs.iter().any(|a| a.path().is_ident("source") || a.path().is_ident("from"))
    })
}

fn derived_traits(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                traits.insert(last.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

/// Matches `Option<Cow<'static, str>>`, with or without path qualification.
fn is_optional_static_cow_str(ty: &Type) -> bool {
    let Some(option) = last_segment(ty).filter(|seg| seg.ident == "Option") else {
        return false;
    };
    let Some(cow) = generic_args(option)
        .and_then(|mut args| match args.next() {
            Some(GenericArgument::Type(inner)) => last_segment(inner),
            _ => None,
        })
        .filter(|seg| seg.ident == "Cow")
    else {
        return false;
    };
    let Some(mut args) = generic_args(cow) else {
        return false;
    };

    let static_lifetime =
        matches!(args.next(), Some(GenericArgument::Lifetime(lt)) if lt.ident == "static");
    let str_type = matches!(
        args.next(),
        Some(GenericArgument::Type(inner))
            if last_segment(inner).is_some_and(|seg| seg.ident == "str")
    );

    static_lifetime && str_type
}

fn last_segment(ty: &Type) -> Option<&PathSegment> {
    match ty {
        Type::Path(path) => path.path.segments.last(),
        _ => None,
    }
}

fn generic_args(segment: &PathSegment) -> Option<impl Iterator<Item = &GenericArgument>> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(args.args.iter()),
        _ => None,
    }
}
