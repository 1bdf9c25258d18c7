#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros used across the Encontra workspace. Right now this is a
//! single attribute, [`macro@encontra_error`], which wires every crate's error
//! enum into the same context-carrying shape.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a crate error type with context support.
///
/// # Injected items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a `source` field.
/// * `From<Source>` for those wrapping variants, so `?` works on upstream errors.
/// * `From<&'static str>` / `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for use inside `#[error(..)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[encontra_derive::encontra_error]
/// pub enum StoreError {
///     #[error("Store unreachable{}: {message}", format_context(.context))]
///     Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Malformed document{}: {source}", format_context(.context))]
///     Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<Venue, StoreError> {
///     serde_json::from_str(raw).context("Decoding venue document")
/// }
/// ```
#[proc_macro_attribute]
pub fn encontra_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
