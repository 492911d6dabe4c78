//! Core types of the conditions library
//!
//! - **Validator**: [`Validator`], [`Role`] and the entry functions
//!   ([`requires`], [`ensures`], ...)
//! - **Errors**: [`ConditionError`], [`ErrorKind`]
//! - **Value capabilities**: [`ContractValue`] (rendering, null-ness, enum-ness),
//!   [`Sequence`] (counting and searching), [`Text`] (string access)
//!
//! # Examples
//!
//! ```rust
//! use nebula_conditions::foundation::{ErrorKind, requires};
//! use nebula_conditions::prelude::*;
//!
//! let err = requires(7, "port").is_in_range(1, 5).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
//! assert_eq!(
//!     err.to_string(),
//!     "port should be between 1 and 5. The actual value is 7."
//! );
//! ```

// Module declarations
pub mod error;
pub mod sequence;
pub mod text;
pub mod validator;
pub mod value;

// Re-export everything at the foundation level for convenience
pub use error::{ConditionError, ErrorKind};
pub use sequence::{Elements, Enumerated, Sequence};
pub use text::Text;
pub use validator::{
    Contract, DEFAULT_ARGUMENT_NAME, Role, Validator, ensures, ensures_value, ensures_with,
    requires, requires_value,
};
pub use value::{
    ContractValue, NULL_TOKEN, SEQUENCE_DELIMITER, is_informative, render, render_sequence,
};
