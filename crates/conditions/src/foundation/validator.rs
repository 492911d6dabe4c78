//! The fluent validator
//!
//! A [`Validator`] wraps one value and its argument name for the length of an
//! assertion chain. Every assertion consumes it and hands it back on success,
//! so chains read top to bottom with `?`:
//!
//! ```rust
//! use nebula_conditions::prelude::*;
//!
//! fn set_age(age: i32) -> Result<i32, ConditionError> {
//!     let age = requires(age, "age")
//!         .is_greater_or_equal(0)?
//!         .is_less_than(150)?
//!         .into_value();
//!     Ok(age)
//! }
//!
//! assert!(set_age(30).is_ok());
//! assert!(set_age(-1).is_err());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::{DefaultMessages, MessageTable};

/// Argument name used when none is given.
pub const DEFAULT_ARGUMENT_NAME: &str = "value";

// ============================================================================
// ROLE
// ============================================================================

/// What a validator is checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Incoming argument (precondition).
    Requires,
    /// Outgoing value or invariant (postcondition).
    Ensures,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requires => f.write_str("requires"),
            Self::Ensures => f.write_str("ensures"),
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A value under contract, plus everything needed to report a violation.
///
/// Value, name, role and options are fixed before the first assertion; the
/// builder methods all consume the validator.
pub struct Validator<T> {
    value: T,
    name: Cow<'static, str>,
    role: Role,
    postcondition_message: Option<Cow<'static, str>>,
    suppressed: bool,
    messages: Option<Arc<dyn MessageTable>>,
}

impl<T> Validator<T> {
    /// Creates a validator for `value`.
    pub fn new(value: T, name: impl Into<Cow<'static, str>>, role: Role) -> Self {
        Self {
            value,
            name: name.into(),
            role,
            postcondition_message: None,
            suppressed: false,
            messages: None,
        }
    }

    /// Makes every failing assertion a no-op.
    ///
    /// Meant for tests that only need to know a chain was reached. Set it before
    /// the first assertion.
    #[must_use = "builder methods must be chained or built"]
    pub fn suppress_errors_for_test(mut self) -> Self {
        self.suppressed = true;
        self
    }

    /// Uses `messages` instead of the builtin English table.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_messages(mut self, messages: Arc<dyn MessageTable>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Appends `message` to every postcondition failure message.
    ///
    /// Ignored for preconditions.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_postcondition_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.postcondition_message = Some(message.into());
        self
    }

    /// The value under test.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Ends the chain and returns the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Name used for the value in messages.
    pub fn argument_name(&self) -> &str {
        &self.name
    }

    /// Precondition or postcondition.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Fixed suffix for postcondition messages, if any.
    pub fn postcondition_message(&self) -> Option<&str> {
        match self.role {
            Role::Ensures => self.postcondition_message.as_deref(),
            Role::Requires => None,
        }
    }

    /// Returns `true` if failures are suppressed.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// The message table in use.
    pub fn messages(&self) -> &dyn MessageTable {
        match &self.messages {
            Some(table) => table.as_ref(),
            None => &DefaultMessages,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("value", &self.value)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("postcondition_message", &self.postcondition_message)
            .field("suppressed", &self.suppressed)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Starts a precondition chain for the argument `name`.
pub fn requires<T>(value: T, name: impl Into<Cow<'static, str>>) -> Validator<T> {
    Validator::new(value, name, Role::Requires)
}

/// Starts a precondition chain named [`DEFAULT_ARGUMENT_NAME`].
pub fn requires_value<T>(value: T) -> Validator<T> {
    Validator::new(value, DEFAULT_ARGUMENT_NAME, Role::Requires)
}

/// Starts a postcondition chain for `name`.
pub fn ensures<T>(value: T, name: impl Into<Cow<'static, str>>) -> Validator<T> {
    Validator::new(value, name, Role::Ensures)
}

/// Starts a postcondition chain named [`DEFAULT_ARGUMENT_NAME`].
pub fn ensures_value<T>(value: T) -> Validator<T> {
    Validator::new(value, DEFAULT_ARGUMENT_NAME, Role::Ensures)
}

/// Starts a postcondition chain whose failures end with `message`.
pub fn ensures_with<T>(
    value: T,
    name: impl Into<Cow<'static, str>>,
    message: impl Into<Cow<'static, str>>,
) -> Validator<T> {
    Validator::new(value, name, Role::Ensures).with_postcondition_message(message)
}

/// Method-call form of [`requires`] and [`ensures`].
///
/// Implemented for every type, so it is not part of the prelude. With it in
/// scope, `conditions.requires(value, name)` on a
/// [`Conditions`](crate::config::Conditions) resolves here instead of to the
/// factory method.
///
/// ```rust
/// use nebula_conditions::Contract;
/// use nebula_conditions::prelude::*;
///
/// let port = 8080_u16.requires("port").is_greater_than(1023)?.into_value();
/// # Ok::<(), ConditionError>(())
/// ```
pub trait Contract: Sized {
    /// Starts a precondition chain for this value.
    fn requires(self, name: impl Into<Cow<'static, str>>) -> Validator<Self> {
        requires(self, name)
    }

    /// Starts a postcondition chain for this value.
    fn ensures(self, name: impl Into<Cow<'static, str>>) -> Validator<Self> {
        ensures(self, name)
    }
}

impl<T> Contract for T {}
