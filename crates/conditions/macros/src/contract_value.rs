use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Fields, parse_macro_input};

use crate::support::diag;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Rendering {
    Natural,
    Display,
    Debug,
}

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let rendering = parse_rendering(&input.attrs)?;

    let (is_enum, body) = match &input.data {
        Data::Enum(data) => (true, render_enum(data, rendering)),
        Data::Struct(_) => (false, render_struct(rendering)),
        Data::Union(_) => {
            return Err(syn::Error::new(
                name.span(),
                "ContractValue derive can only be used on structs and enums",
            ));
        }
    };

    let enum_const = is_enum.then(|| quote!(const IS_ENUM: bool = true;));

    Ok(quote! {
        impl #impl_generics ::nebula_conditions::ContractValue for #name #ty_generics #where_clause {
            #enum_const

            fn render(&self) -> ::std::string::String {
                #body
            }
        }
    })
}

fn parse_rendering(attrs: &[Attribute]) -> syn::Result<Rendering> {
    let mut rendering = Rendering::Natural;

    for attr in attrs.iter().filter(|a| a.path().is_ident("contract")) {
        attr.parse_nested_meta(|meta| {
            let requested = if meta.path.is_ident("display") {
                Rendering::Display
            } else if meta.path.is_ident("debug") {
                Rendering::Debug
            } else {
                return Err(meta.error("expected `display` or `debug`"));
            };
            if rendering != Rendering::Natural && rendering != requested {
                return Err(diag::error_spanned(
                    &meta.path,
                    "`display` and `debug` are mutually exclusive",
                ));
            }
            rendering = requested;
            Ok(())
        })?;
    }

    Ok(rendering)
}

fn render_with(rendering: Rendering) -> Option<TokenStream2> {
    match rendering {
        Rendering::Natural => None,
        Rendering::Display => Some(quote!(::std::string::ToString::to_string(self))),
        Rendering::Debug => Some(quote!(::std::format!("{:?}", self))),
    }
}

fn render_struct(rendering: Rendering) -> TokenStream2 {
    render_with(rendering).unwrap_or_else(|| {
        quote!(::std::borrow::ToOwned::to_owned(::std::any::type_name::<Self>()))
    })
}

fn render_enum(data: &DataEnum, rendering: Rendering) -> TokenStream2 {
    if let Some(body) = render_with(rendering) {
        return body;
    }

    let arms = data.variants.iter().map(|variant| {
        let ident = &variant.ident;
        let label = ident.to_string();
        let pattern = match &variant.fields {
            Fields::Named(_) => quote!(Self::#ident { .. }),
            Fields::Unnamed(_) => quote!(Self::#ident(..)),
            Fields::Unit => quote!(Self::#ident),
        };
        quote!(#pattern => #label)
    });

    if data.variants.is_empty() {
        // An uninhabited enum never has a value to render.
        return quote!(match *self {});
    }

    quote! {
        let label: &'static str = match self {
            #(#arms,)*
        };
        ::std::borrow::ToOwned::to_owned(label)
    }
}
