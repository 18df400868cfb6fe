use heck::ToTitleCase;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse::Parser,
    parse_macro_input,
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, Ident, ItemFn, Lit, Meta, ReturnType,
};

const DEFAULT_GROUP: &str = "ungrouped";

/// Registers a zero-argument function returning `CaseResult` as an example case.
///
/// Alongside the function itself this emits `<fn>_case()`, which builds the
/// `ExampleCase` describing it. Accepted arguments are `name`, `group` and
/// `description`; the description otherwise comes from the doc comment.
#[proc_macro_attribute]
pub fn example_case(attr: TokenStream, item: TokenStream) -> TokenStream {
    let parser = Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = match parser.parse(attr) {
        Ok(metas) => metas,
        Err(error) => return error.to_compile_error().into(),
    };
    let function = parse_macro_input!(item as ItemFn);

    match expand_example_case(metas.into_iter().collect(), &function) {
        Ok(expansion) => (
            quote! {
                #function
                #expansion
            }
        )
        .into(),
        Err(error) => error.to_compile_error().into(),
    }
}

struct CaseMeta {
    name: String,
    group: String,
    description: String,
}

fn parse_case_meta(
    args: Vec<Meta>,
    attrs: &[Attribute],
    fallback: &Ident,
) -> Result<CaseMeta, Error> {
    let mut name: Option<String> = None;
    let mut group: Option<String> = None;
    let mut description: Option<String> = None;

    for meta in args {
        match meta {
            Meta::NameValue(kv) if kv.path.is_ident("name") => {
                name = Some(expect_string_literal(&kv.value)?);
            }
            Meta::NameValue(kv) if kv.path.is_ident("group") => {
                group = Some(expect_string_literal(&kv.value)?);
            }
            Meta::NameValue(kv) if kv.path.is_ident("description") => {
                description = Some(expect_string_literal(&kv.value)?);
            }
            other => return Err(Error::new_spanned(other, "unsupported attribute argument")),
        }
    }

    Ok(CaseMeta {
        name: name.unwrap_or_else(|| default_case_name(&fallback.to_string())),
        group: group.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        description: description.unwrap_or_else(|| doc_description(attrs)),
    })
}

fn expect_string_literal(expr: &Expr) -> Result<String, Error> {
    if let Expr::Lit(expr_lit) = expr {
        if let Lit::Str(lit_str) = &expr_lit.lit {
            return Ok(lit_str.value());
        }
    }

    Err(Error::new(expr.span(), "expected string literal"))
}

/// `set_difference` becomes "set difference".
fn default_case_name(ident: &str) -> String {
    ident.to_title_case().to_lowercase()
}

fn doc_description(attrs: &[Attribute]) -> String {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(kv) => expect_string_literal(&kv.value).ok(),
            _ => None,
        })
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join(" ")
}

fn validate_signature(function: &ItemFn) -> Result<(), Error> {
    let sig = &function.sig;

    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::new_spanned(asyncness, "example cases run synchronously"));
    }
    if !sig.inputs.is_empty() {
        return Err(Error::new_spanned(&sig.inputs, "example cases take no arguments"));
    }
    if !sig.generics.params.is_empty() {
        return Err(Error::new_spanned(&sig.generics, "example cases cannot be generic"));
    }
    if let ReturnType::Default = sig.output {
        return Err(Error::new(sig.span(), "example cases must return CaseResult"));
    }

    Ok(())
}

fn expand_example_case(args: Vec<Meta>, function: &ItemFn) -> Result<TokenStream2, Error> {
    validate_signature(function)?;

    let original_ident = &function.sig.ident;
    let CaseMeta {
        name,
        group,
        description,
    } = parse_case_meta(args, &function.attrs, original_ident)?;

    let visibility = &function.vis;
    let export_ident = format_ident!("{}_case", original_ident);

    Ok(quote! {
        #[doc = concat!("Example case wrapping [`", stringify!(#original_ident), "`].")]
        #visibility fn #export_ident() -> ::syntaxtour::ExampleCase {
            ::syntaxtour::ExampleCase::new(#name, #group, #description, #original_ident)
        }
    })
}
