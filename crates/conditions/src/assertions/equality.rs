//! Equality checks

use crate::engine::violations;
use crate::foundation::ContractValue;

conditions! {
    /// Checks against a single expected value.
    pub trait EqualityConditions<T>;
    impl<T> for Validator<T> where { T: ContractValue + PartialEq }
    {
        /// Fails unless the value equals `expected`.
        fn is_equal_to / is_equal_to_with(v, expected: T; description) {
            if *v.value() == expected {
                Ok(())
            } else {
                violations::value_should_be_equal_to(&v, &expected, description)
            }
        }

        /// Fails if the value equals `unexpected`.
        fn is_not_equal_to / is_not_equal_to_with(v, unexpected: T; description) {
            if *v.value() == unexpected {
                violations::value_should_not_be_equal_to(&v, &unexpected, description)
            } else {
                Ok(())
            }
        }
    }
}
