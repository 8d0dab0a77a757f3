#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the Slimline workspace.
//!
//! * [`macro@slim_error`] turns a plain enum into a context-aware error type.
//! * [`macro@main`] bootstraps an `async fn main` on a `slim-runtime` profile.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own
//! macros in doctests; the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro that runs an `async fn main` on a pre-configured Tokio runtime.
///
/// # Arguments
///
/// * `high_performance` - server profile (larger stacks, longer keep-alive).
/// * `memory_efficient` - half the workers, smaller stacks.
/// * `default` or nothing - auto-detected worker count.
///
/// The function must be `async` and return a `Result`.
///
/// # Examples
///
/// ```rust,ignore
/// #[slim_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for defining error enums with attachable context.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext` trait with `.context(..)`, implemented for `Result<T, Name>` and
///   for `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant is present.
/// * A private `format_context` helper for use in `#[error(..)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant wrapping a source error must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[slim_derive::slim_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<Vec<u8>, StoreError> {
///     std::fs::read("data.bin").context("Reading data file")
/// }
/// ```
#[proc_macro_attribute]
pub fn slim_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
