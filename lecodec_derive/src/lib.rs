//! `#[derive(Plain)]` for structs whose fields are all `Plain`.
//!
//! Fields are written and read in declaration order with no padding between them. The
//! derived type also implements `Opaque`, so it must be `Debug + Send + Sync`.

#![recursion_limit = "128"]

extern crate proc_macro;

mod de;
mod ser;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::*;

fn field_types(sd: &DataStruct) -> Vec<Type> { sd.fields.iter().map(|f| f.ty.clone()).collect() }

fn struct_impl(ast: &DeriveInput, sd: &DataStruct) -> TokenStream2 {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let tys = field_types(sd);
    let ser = ser::plain_ser(sd);
    let de = de::plain_de(name, sd);

    quote! {
        impl #impl_generics ::lecodec::plain::Plain for #name #ty_generics #where_clause {
            const WIDTH: usize = 0 #(+ <#tys as ::lecodec::plain::Plain>::WIDTH)*;

            fn ser_plain<S: ::lecodec::encoding::ser::Serializer>(&self, s: &mut S) {
                #ser
            }

            fn de_plain(
                d: &mut ::lecodec::encoding::de::LeBytes,
            ) -> ::std::result::Result<Self, ::lecodec::Error> {
                #de
            }
        }

        impl #impl_generics ::lecodec::plain::Opaque for #name #ty_generics #where_clause {
            fn ser_le(
                &self,
                out: &mut ::std::vec::Vec<u8>,
            ) -> ::std::result::Result<(), ::lecodec::Error> {
                ::lecodec::plain::Plain::ser_plain(self, out);
                Ok(())
            }
        }
    }
}

#[proc_macro_derive(Plain)]
pub fn plain_derive(input: TokenStream) -> TokenStream {
    // Construct a representation of Rust code as a syntax tree
    // that we can manipulate
    let ast = parse_macro_input!(input as DeriveInput);

    // Build the trait implementation
    impl_plain_macro(&ast).into()
}

fn impl_plain_macro(ast: &DeriveInput) -> TokenStream2 {
    match &ast.data {
        Data::Struct(sd) => struct_impl(ast, sd),
        Data::Enum(_) => Error::new_spanned(
            &ast.ident,
            "`Plain` cannot be derived for enums, their layout is not fixed",
        )
        .to_compile_error(),
        Data::Union(_) => {
            Error::new_spanned(&ast.ident, "`Plain` cannot be derived for unions")
                .to_compile_error()
        }
    }
}
