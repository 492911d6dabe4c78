//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_conditions::prelude::*;` import that brings
//! in the entry functions, the error types, and every assertion trait.
//!
//! [`Contract`](crate::Contract) is left out: it adds `requires`/`ensures`
//! to every type, which would hide the methods of the same name on
//! [`Conditions`](crate::config::Conditions).
//!
//! # Examples
//!
//! ```rust
//! use nebula_conditions::prelude::*;
//!
//! let id = requires(Some(42_u64), "id")
//!     .is_not_null()?
//!     .is_greater_than(Some(0))?
//!     .into_value();
//! assert_eq!(id, Some(42));
//! # Ok::<(), ConditionError>(())
//! ```

// ============================================================================
// FOUNDATION: Validator, entry functions, errors, value capabilities
// ============================================================================

pub use crate::foundation::{
    ConditionError, ContractValue, Enumerated, ErrorKind, Role, Sequence, Text, Validator,
    ensures, ensures_value, ensures_with, requires, requires_value,
};

// ============================================================================
// ASSERTIONS: All assertion traits
// ============================================================================

pub use crate::assertions::{
    BooleanConditions, CollectionConditions, ComparisonConditions, EqualityConditions,
    NullConditions, PredicateConditions, RuntimeType, StringConditions, Truth, TypeConditions,
};

// ============================================================================
// ENGINE: Categories and message tables
// ============================================================================

pub use crate::engine::{MessageKey, MessageTable, OverlayMessages, ViolationCategory};

// ============================================================================
// DERIVE-GATED: #[derive(ContractValue)]
// ============================================================================

#[cfg(feature = "derive")]
pub use nebula_conditions_macros::ContractValue;
