//! Null checks
//!
//! Only `Option` values (and wrappers around them) can be null; every other
//! value passes [`is_not_null`](NullConditions::is_not_null).

use crate::engine::violations;
use crate::foundation::ContractValue;

conditions! {
    /// Checks on whether the value is a null reference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nebula_conditions::prelude::*;
    ///
    /// let name = requires(Some("ada"), "name").is_not_null()?.into_value();
    /// assert_eq!(name, Some("ada"));
    ///
    /// let err = requires(None::<u32>, "id").is_not_null().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ArgumentNull);
    /// # Ok::<(), ConditionError>(())
    /// ```
    pub trait NullConditions;
    impl<T> for Validator<T> where { T: ContractValue }
    {
        /// Fails unless the value is null.
        fn is_null / is_null_with(v; description) {
            if v.value().is_null() {
                Ok(())
            } else {
                violations::value_should_be_null(&v, description)
            }
        }

        /// Fails if the value is null.
        fn is_not_null / is_not_null_with(v; description) {
            if v.value().is_null() {
                violations::value_should_not_be_null(&v, description)
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, ensures, requires};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_not_null() {
        assert!(requires(Some(1), "x").is_not_null().is_ok());
        assert!(requires(1, "x").is_not_null().is_ok());

        let err = requires(None::<i32>, "x").is_not_null().unwrap_err();
        assert_eq!(err.message(), "x should not be null.");
        assert_eq!(err.kind(), ErrorKind::ArgumentNull);
    }

    #[test]
    fn test_is_null() {
        assert!(requires(None::<i32>, "x").is_null().is_ok());

        let err = requires(Some(3), "x").is_null().unwrap_err();
        assert_eq!(err.message(), "x should be null.");
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn test_postcondition_null() {
        let err = ensures(None::<String>, "result").is_not_null().unwrap_err();
        assert_eq!(err.message(), "Postcondition 'result should not be null' failed.");
        assert_eq!(err.kind(), ErrorKind::PostconditionViolation);
    }

    #[test]
    fn test_description() {
        let err = requires(None::<i32>, "value")
            .is_not_null_with("custom {0}")
            .unwrap_err();
        assert_eq!(err.condition(), "custom value");
        assert_eq!(err.message(), "custom value.");
    }
}
