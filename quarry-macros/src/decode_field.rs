use syn::{Field, Ident, LitStr, Type, parse::ParseBuffer};

pub(crate) struct FieldMetadata {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) name: String,
    pub(crate) ignore: bool,
}

pub(crate) fn decode_field(field: &Field) -> syn::Result<FieldMetadata> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "Field is expected to have a name"));
    };
    let mut name = ident.to_string();
    if let Some(stripped) = name.strip_prefix("r#") {
        name = stripped.to_owned();
    }
    let mut metadata = FieldMetadata {
        ident,
        ty: field.ty.clone(),
        name,
        ignore: false,
    };
    for attr in &field.attrs {
        if !attr.path().is_ident("quarry") {
            continue;
        }
        attr.parse_nested_meta(|arg| {
            if arg.path.is_ident("name") {
                let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                    return Err(arg.error(
                        "Error while parsing `name`, use it like: `#[quarry(name = \"my_column\")]`",
                    ));
                };
                metadata.name = v.value();
            } else if arg.path.is_ident("ignore") {
                if arg.input.peek(syn::Token![=]) {
                    return Err(arg.error(
                        "Error while parsing `ignore`, use it like: `#[quarry(ignore)]`",
                    ));
                }
                metadata.ignore = true;
            } else {
                return Err(arg.error("Unknown attribute, expected `name` or `ignore`"));
            }
            Ok(())
        })?;
    }
    Ok(metadata)
}
