//! Arbitrary predicate checks
//!
//! For conditions the other traits do not cover. [`evaluate`] takes a plain
//! boolean, [`satisfies`] runs a closure against the value and names it in the
//! message.
//!
//! [`evaluate`]: PredicateConditions::evaluate
//! [`satisfies`]: PredicateConditions::satisfies

use crate::engine::violations;
use crate::foundation::ContractValue;

conditions! {
    /// Checks against caller-supplied predicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nebula_conditions::prelude::*;
    ///
    /// let err = requires(4_i32, "n")
    ///     .satisfies("n is odd", |n| n % 2 == 1)
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "'n is odd' should hold for n. The actual value is 4.");
    /// ```
    pub trait PredicateConditions<T>;
    impl<T> for Validator<T> where { T: ContractValue }
    {
        /// Fails unless `condition` is `true`.
        fn evaluate / evaluate_with(v, condition: bool; description) {
            if condition {
                Ok(())
            } else {
                violations::expression_evaluated_false(&v, description)
            }
        }

        /// Fails unless `predicate` holds for the value.
        ///
        /// `label` describes the predicate in the failure message.
        fn satisfies / satisfies_with(
            v,
            label: &str,
            predicate: impl FnOnce(&T) -> bool;
            description
        ) {
            if predicate(v.value()) {
                Ok(())
            } else {
                violations::predicate_should_hold(&v, label, description)
            }
        }
    }
}
