use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field name as seen by SQL: the identifier without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// True if the database generates the value (`#[auto]`)
    pub(crate) auto: bool,

    /// True if the column is read but never written (`#[computed]`)
    pub(crate) computed: bool,

    /// True if the field is not mapped at all (`#[skip]`)
    pub(crate) skip: bool,

    /// Optional database column name
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                flag(&mut attrs.auto, attr, "duplicate #[auto] attribute", &mut errs);
            } else if attr.path().is_ident("computed") {
                flag(
                    &mut attrs.computed,
                    attr,
                    "duplicate #[computed] attribute",
                    &mut errs,
                );
            } else if attr.path().is_ident("skip") {
                flag(&mut attrs.skip, attr, "duplicate #[skip] attribute", &mut errs);
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        let mapped = attrs.key.is_some() || attrs.auto || attrs.computed || attrs.column.is_some();
        if attrs.skip && mapped {
            errs.push(syn::Error::new_spanned(
                ident,
                "#[skip] cannot be combined with other column attributes",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name).to_string();

        Ok(Field {
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
            attrs,
        })
    }

    /// Column the field maps to.
    pub(crate) fn column_name(&self) -> String {
        match &self.attrs.column {
            Some(column) => column.name.value(),
            None => self.name.clone(),
        }
    }
}

/// Marker attributes take no arguments and may appear once.
fn flag(slot: &mut bool, attr: &syn::Attribute, duplicate: &str, errs: &mut ErrorSet) {
    if !matches!(attr.meta, syn::Meta::Path(_)) {
        errs.push(syn::Error::new_spanned(attr, "attribute takes no arguments"));
    } else if *slot {
        errs.push(syn::Error::new_spanned(attr, duplicate));
    } else {
        *slot = true;
    }
}
