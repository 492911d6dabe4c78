//! # nebula-conditions
//!
//! Fluent pre- and postcondition checks with stable, parameterized messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_conditions::prelude::*;
//!
//! fn schedule(name: &str, retries: u32, tags: &[&str]) -> Result<(), ConditionError> {
//!     requires(name, "name").is_not_empty()?.is_shorter_or_equal(64)?;
//!     requires(retries, "retries").is_in_range(0, 10)?;
//!     requires(tags, "tags").is_not_empty()?.does_not_contain(&"")?;
//!     Ok(())
//! }
//!
//! let err = schedule("nightly", 12, &["etl"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
//! assert_eq!(
//!     err.to_string(),
//!     "retries should be between 0 and 10. The actual value is 12."
//! );
//! ```
//!
//! ## Preconditions and Postconditions
//!
//! [`requires`] checks incoming arguments; failures are argument errors
//! ([`ErrorKind::Argument`], [`ErrorKind::ArgumentNull`],
//! [`ErrorKind::ArgumentOutOfRange`], [`ErrorKind::InvalidEnumArgument`]).
//! [`ensures`] checks results and invariants; every failure is an
//! [`ErrorKind::PostconditionViolation`] and the message reads
//! `Postcondition '...' failed.`
//!
//! ## Messages
//!
//! Messages come from a [`MessageTable`](engine::MessageTable). Replace single
//! phrases with [`OverlayMessages`](engine::OverlayMessages) or a JSON
//! [`ConditionsConfig`](config::ConditionsConfig). Every assertion also has a
//! `*_with` form taking a one-off description where `{0}` is the argument name.
//!
//! ## Your Own Types
//!
//! Values appear in messages through [`ContractValue`]. Derive it (feature
//! `derive`) or use [`contract_value!`]. Enums are reported as
//! [`ErrorKind::InvalidEnumArgument`] whatever check failed.

// Lets the derive's `::nebula_conditions::` paths resolve inside this crate.
extern crate self as nebula_conditions;

#[macro_use]
mod macros;

pub mod assertions;
pub mod config;
pub mod engine;
pub mod foundation;
pub mod prelude;

pub use foundation::{
    ConditionError, Contract, ContractValue, ErrorKind, Role, Sequence, Text, Validator, ensures,
    ensures_value, ensures_with, requires, requires_value,
};

#[cfg(feature = "derive")]
pub use nebula_conditions_macros::ContractValue;
