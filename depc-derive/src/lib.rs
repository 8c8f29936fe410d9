use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, LitStr, Meta, Token, Type};

/// Derive `CsvSchema` for a CSV record struct.
///
/// Each named field becomes one column description:
/// - column name, honouring `#[serde(rename = "...")]`
/// - required, unless the field is an `Option<T>` or carries `#[serde(default)]`
/// - description, taken from the field's doc comments
///
/// The generated impl targets `crate::input::CsvSchema`, so the derive is only
/// usable from inside the `depc` crate.
#[proc_macro_derive(CsvSchema, attributes(serde))]
pub fn derive_csv_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct Column {
    name: String,
    required: bool,
    description: String,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "CsvSchema requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "CsvSchema can only be derived for structs",
            ))
        }
    };

    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let serde = SerdeField::from_attrs(&field.attrs)?;
        columns.push(Column {
            name: serde.rename.unwrap_or_else(|| ident.to_string()),
            required: !serde.default && !is_option_type(&field.ty),
            description: doc_comment(&field.attrs),
        });
    }

    let entries = columns.iter().map(|c| {
        let Column {
            name,
            required,
            description,
        } = c;
        quote! {
            crate::input::CsvField {
                name: #name,
                required: #required,
                description: #description,
            }
        }
    });

    Ok(quote! {
        impl crate::input::CsvSchema for #name {
            fn csv_fields() -> &'static [crate::input::CsvField] {
                static FIELDS: &[crate::input::CsvField] = &[
                    #(#entries),*
                ];
                FIELDS
            }
        }
    })
}

/// The subset of `#[serde(...)]` field attributes that affect the CSV columns.
#[derive(Default)]
struct SerdeField {
    rename: Option<String>,
    default: bool,
}

impl SerdeField {
    fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut out = SerdeField::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename = Some(lit.value());
                } else if meta.path.is_ident("default") {
                    out.default = true;
                    if meta.input.peek(Token![=]) {
                        let _: syn::Expr = meta.value()?.parse()?;
                    }
                } else if meta.input.peek(Token![=]) {
                    let _: syn::Expr = meta.value()?.parse()?;
                } else if meta.input.peek(syn::token::Paren) {
                    meta.parse_nested_meta(|_| Ok(()))?;
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

fn doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}
