/// `#[column("name")]`: the table column a field reads from and writes to.
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        if !matches!(attr.meta, syn::Meta::List(_)) {
            return Err(syn::Error::new_spanned(attr, "expected `column(\"name\")`"));
        }

        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let name: syn::LitStr = input.parse()?;

        if name.value().trim().is_empty() {
            return Err(syn::Error::new(name.span(), "column name must not be empty"));
        }

        // Allow a trailing comma
        if !input.is_empty() {
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(Column { name })
    }
}
