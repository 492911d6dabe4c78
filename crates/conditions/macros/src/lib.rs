//! # Nebula Conditions Macros
//!
//! `#[derive(ContractValue)]` for `nebula-conditions`.
//!
//! Use it through the main crate, which re-exports it behind the `derive`
//! feature:
//!
//! ```ignore
//! use nebula_conditions::prelude::*;
//!
//! #[derive(Debug, PartialEq, ContractValue)]
//! enum Priority { Low, High }
//!
//! #[derive(ContractValue)]
//! #[contract(display)]
//! struct Version(u32);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod contract_value;
mod support;

/// Derive macro for the `ContractValue` trait.
///
/// # Rendering
///
/// - enums render the variant identifier and are reported as enumeration
///   values whatever check fails
/// - structs render their type name unless told otherwise, so the value is
///   never appended to a message as the actual value
///
/// # Container attributes (`#[contract(...)]`)
///
/// - `display` - render with `Display`
/// - `debug` - render with `Debug`
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, ContractValue)]
/// #[contract(debug)]
/// struct Point { x: i32, y: i32 }
/// ```
#[proc_macro_derive(ContractValue, attributes(contract))]
pub fn derive_contract_value(input: TokenStream) -> TokenStream {
    contract_value::derive(input)
}
