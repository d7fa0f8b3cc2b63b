use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let model_ident = &self.model.ident;
        let describe_body = self.expand_describe_body();
        let load_fields = self.expand_load_fields();
        let bind_params = self.expand_bind_params();

        quote! {
            impl #rowmap::Model for #model_ident {
                fn describe() -> #rowmap::TypeInfo {
                    #describe_body
                }

                fn load(mut row: #rowmap::Row) -> #rowmap::Result<Self> {
                    Ok(Self {
                        #load_fields
                    })
                }

                fn to_params(&self) -> #rowmap::Params {
                    let mut params = #rowmap::Params::new();
                    #bind_params
                    params
                }
            }
        }
    }

    fn expand_describe_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let type_name = self.model.ident.to_string();

        let table = self
            .model
            .table
            .as_ref()
            .map(|table| quote!(.table(#table)));

        let columns = self.model.fields.iter().map(|field| {
            let column = self.expand_column_info(field);
            quote!(.column(#column))
        });

        quote! {
            #rowmap::TypeInfo::builder(#type_name)
                #table
                #( #columns )*
                .build()
        }
    }

    fn expand_column_info(&self, field: &Field) -> TokenStream {
        let rowmap = &self.rowmap;
        let name = &field.name;
        let attrs = &field.attrs;

        let column = attrs.column.as_ref().map(|column| {
            let column = &column.name;
            quote!(.column(#column))
        });
        let key = attrs.key.as_ref().map(|_| quote!(.key()));
        let auto = attrs.auto.then(|| quote!(.auto()));
        let computed = attrs.computed.then(|| quote!(.computed()));
        let skip = attrs.skip.then(|| quote!(.ignored()));

        quote! {
            #rowmap::ColumnInfo::new(#name) #column #key #auto #computed #skip
        }
    }

    fn expand_load_fields(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let type_name = self.model.ident.to_string();

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;

                if field.attrs.skip {
                    return quote!(#ident: ::core::default::Default::default(),);
                }

                let ty = &field.ty;
                let name = &field.name;
                let column = field.column_name();

                quote! {
                    #ident: #rowmap::load_field::<#ty>(&mut row, #type_name, #name, #column)?,
                }
            })
            .collect()
    }

    fn expand_bind_params(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        self.model
            .mapped_fields()
            .map(|field| {
                let ident = &field.ident;
                let name = &field.name;

                quote! {
                    params.insert(#name, #rowmap::Primitive::to_value(&self.#ident));
                }
            })
            .collect()
    }
}
