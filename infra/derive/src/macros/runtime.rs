use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

/// Expands `#[slim_runtime::main(profile)]` into a blocking `fn main`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if let Err(err) = validate_signature(&input) {
        return err.into_compile_error();
    }

    let profile = match profile_constructor(args) {
        Ok(tokens) => tokens,
        Err(err) => return err.into_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let runtime = ::slim_runtime::build_runtime_with_config(&#profile)?;
            runtime.block_on(async move #block)
        }
    }
}

fn validate_signature(input: &ItemFn) -> syn::Result<()> {
    if input.sig.asyncness.is_none() {
        return Err(Error::new_spanned(
            &input.sig.ident,
            "#[slim_runtime::main] can only be used on async functions",
        ));
    }
    if !input.sig.inputs.is_empty() {
        return Err(Error::new_spanned(
            &input.sig.inputs,
            "#[slim_runtime::main] functions cannot take arguments",
        ));
    }
    if !returns_result(&input.sig.output) {
        return Err(Error::new_spanned(
            &input.sig.output,
            "#[slim_runtime::main] requires a Result return type",
        ));
    }
    Ok(())
}

fn profile_constructor(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::slim_runtime::RuntimeConfig::default() });
    }

    let profile: Ident = syn::parse2(args)?;
    let constructor = match profile.to_string().as_str() {
        "high_performance" => quote! { high_performance() },
        "memory_efficient" => quote! { memory_efficient() },
        "default" => quote! { default() },
        _ => {
            return Err(Error::new_spanned(
                profile,
                "unknown runtime profile, expected one of: high_performance, memory_efficient, default",
            ));
        },
    };
    Ok(quote! { ::slim_runtime::RuntimeConfig::#constructor })
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = ty.as_ref() else {
        return false;
    };
    path.path.segments.last().is_some_and(|segment| segment.ident == "Result")
}
