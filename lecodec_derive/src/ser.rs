use proc_macro2::TokenStream;
use quote::quote;
use syn::*;

pub fn plain_ser(data: &DataStruct) -> TokenStream {
    let accessors: Vec<TokenStream> = match &data.fields {
        // C-style structs
        Fields::Named(fields) => fields
            .named
            .iter()
            .map(|field| {
                let ident = field.ident.clone().unwrap();
                quote! { self.#ident }
            })
            .collect(),
        // Tuple structs
        Fields::Unnamed(fields) => (0..fields.unnamed.len())
            .map(Index::from)
            .map(|index| quote! { self.#index })
            .collect(),
        // Unit-like structs
        Fields::Unit => Vec::new(),
    };

    if accessors.is_empty() {
        return quote! { let _ = s; };
    }

    quote! {
        #(::lecodec::plain::Plain::ser_plain(&#accessors, s);)*
    }
}
