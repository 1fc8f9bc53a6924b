use proc_macro2::TokenStream;
use quote::quote;
use syn::*;

pub fn plain_de(name: &Ident, data: &DataStruct) -> TokenStream {
    match &data.fields {
        // C-style structs, fields are read in declaration order
        Fields::Named(fields) => {
            let (idents, tys): (Vec<Ident>, Vec<Type>) = fields
                .named
                .iter()
                .map(|field| (field.ident.clone().unwrap(), field.ty.clone()))
                .unzip();

            quote! {
                Ok(#name {
                    #(#idents: <#tys as ::lecodec::plain::Plain>::de_plain(d)?,)*
                })
            }
        }
        // Tuple structs
        Fields::Unnamed(fields) => {
            let tys = fields.unnamed.iter().map(|field| &field.ty);

            quote! {
                Ok(#name(#(<#tys as ::lecodec::plain::Plain>::de_plain(d)?,)*))
            }
        }
        // Unit-like structs
        Fields::Unit => {
            quote! {
                let _ = d;
                Ok(#name)
            }
        }
    }
}
