//! Errors produced by failing conditions
//!
//! A failing assertion yields exactly one [`ConditionError`]. Its
//! [`ErrorKind`] is picked from the validator's [`Role`] and the
//! [`ViolationCategory`] of the failure:
//!
//! | Role | Category | Kind |
//! |---|---|---|
//! | `Requires` | `OutOfRange` | [`ErrorKind::ArgumentOutOfRange`] |
//! | `Requires` | `InvalidEnumValue` | [`ErrorKind::InvalidEnumArgument`] |
//! | `Requires` | `Default`, value is null | [`ErrorKind::ArgumentNull`] |
//! | `Requires` | `Default` | [`ErrorKind::Argument`] |
//! | `Ensures` | any | [`ErrorKind::PostconditionViolation`] |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::ViolationCategory;
use crate::foundation::Role;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The kind of contract that was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// A precondition failed on an argument.
    Argument,
    /// A precondition failed because the argument was null.
    ArgumentNull,
    /// A precondition failed because the argument was outside the allowed range.
    ArgumentOutOfRange,
    /// A precondition failed on an enum-typed argument.
    InvalidEnumArgument,
    /// A postcondition failed.
    PostconditionViolation,
}

impl ErrorKind {
    /// Selects the kind for a failure.
    ///
    /// `value_is_null` only matters for preconditions in the default category.
    pub const fn select(role: Role, category: ViolationCategory, value_is_null: bool) -> Self {
        match (role, category) {
            (Role::Ensures, _) => Self::PostconditionViolation,
            (Role::Requires, ViolationCategory::OutOfRange) => Self::ArgumentOutOfRange,
            (Role::Requires, ViolationCategory::InvalidEnumValue) => Self::InvalidEnumArgument,
            (Role::Requires, ViolationCategory::Default) if value_is_null => Self::ArgumentNull,
            (Role::Requires, ViolationCategory::Default) => Self::Argument,
        }
    }

    /// Returns `true` for every precondition kind.
    ///
    /// Null, out-of-range and enum failures are argument errors too.
    pub const fn is_argument_error(self) -> bool {
        !matches!(self, Self::PostconditionViolation)
    }

    /// Stable identifier, e.g. `"argument_out_of_range"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Argument => "argument",
            Self::ArgumentNull => "argument_null",
            Self::ArgumentOutOfRange => "argument_out_of_range",
            Self::InvalidEnumArgument => "invalid_enum_argument",
            Self::PostconditionViolation => "postcondition_violation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONDITION ERROR
// ============================================================================

/// A broken pre- or postcondition.
///
/// `Display` prints the full message: the condition sentence followed by any
/// additional context.
///
/// # Examples
///
/// ```rust
/// use nebula_conditions::prelude::*;
///
/// let err = requires(None::<String>, "name").is_not_null().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ArgumentNull);
/// assert_eq!(err.to_string(), "name should not be null.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConditionError {
    kind: ErrorKind,
    category: ViolationCategory,
    role: Role,
    argument: String,
    condition: String,
    message: String,
}

impl ConditionError {
    pub(crate) fn new(
        kind: ErrorKind,
        category: ViolationCategory,
        role: Role,
        argument: impl Into<String>,
        condition: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            category,
            role,
            argument: argument.into(),
            condition: condition.into(),
            message: message.into(),
        }
    }

    /// The kind of contract that was broken.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Why the assertion failed, after enum promotion.
    pub fn category(&self) -> ViolationCategory {
        self.category
    }

    /// Whether a precondition or a postcondition failed.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Name of the validated argument.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// The condition sentence alone, without terminator or context.
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// The full message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Shorthand for `self.kind().is_argument_error()`.
    pub fn is_argument_error(&self) -> bool {
        self.kind.is_argument_error()
    }

    /// Returns `true` if a postcondition failed.
    pub fn is_postcondition(&self) -> bool {
        self.kind == ErrorKind::PostconditionViolation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Role::Requires, ViolationCategory::OutOfRange, false, ErrorKind::ArgumentOutOfRange)]
    #[case(Role::Requires, ViolationCategory::OutOfRange, true, ErrorKind::ArgumentOutOfRange)]
    #[case(Role::Requires, ViolationCategory::InvalidEnumValue, false, ErrorKind::InvalidEnumArgument)]
    #[case(Role::Requires, ViolationCategory::Default, false, ErrorKind::Argument)]
    #[case(Role::Requires, ViolationCategory::Default, true, ErrorKind::ArgumentNull)]
    #[case(Role::Ensures, ViolationCategory::Default, true, ErrorKind::PostconditionViolation)]
    #[case(Role::Ensures, ViolationCategory::OutOfRange, false, ErrorKind::PostconditionViolation)]
    #[case(Role::Ensures, ViolationCategory::InvalidEnumValue, false, ErrorKind::PostconditionViolation)]
    fn test_select_kind(
        #[case] role: Role,
        #[case] category: ViolationCategory,
        #[case] value_is_null: bool,
        #[case] expected: ErrorKind,
    ) {
        assert_eq!(ErrorKind::select(role, category, value_is_null), expected);
    }

    #[test]
    fn test_argument_error_family() {
        assert!(ErrorKind::Argument.is_argument_error());
        assert!(ErrorKind::ArgumentNull.is_argument_error());
        assert!(ErrorKind::ArgumentOutOfRange.is_argument_error());
        assert!(ErrorKind::InvalidEnumArgument.is_argument_error());
        assert!(!ErrorKind::PostconditionViolation.is_argument_error());
    }

    #[test]
    fn test_display_is_message() {
        let err = ConditionError::new(
            ErrorKind::Argument,
            ViolationCategory::Default,
            Role::Requires,
            "x",
            "x should be valid",
            "x should be valid.",
        );
        assert_eq!(err.to_string(), "x should be valid.");
        assert_eq!(err.condition(), "x should be valid");
        assert_eq!(err.argument(), "x");
    }
}
