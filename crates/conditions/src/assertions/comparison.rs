//! Range and ordering checks
//!
//! Bounds are inclusive for [`is_in_range`](ComparisonConditions::is_in_range).
//! Failures are reported as out-of-range, except the negated range check.
//! For `Option` values a null orders before every non-null value.

use crate::engine::violations;
use crate::foundation::ContractValue;

conditions! {
    /// Ordering checks against one or two bounds of the value's own type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nebula_conditions::prelude::*;
    ///
    /// let err = requires(5, "x").is_less_than(3).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
    /// assert_eq!(err.to_string(), "x should be less than 3. The actual value is 5.");
    /// ```
    pub trait ComparisonConditions<T>;
    impl<T> for Validator<T> where { T: ContractValue + PartialOrd }
    {
        /// Fails unless `min <= value <= max`.
        fn is_in_range / is_in_range_with(v, min: T, max: T; description) {
            let value = v.value();
            if *value >= min && *value <= max {
                Ok(())
            } else {
                violations::value_should_be_between(&v, &min, &max, description)
            }
        }

        /// Fails if `min <= value <= max`.
        fn is_not_in_range / is_not_in_range_with(v, min: T, max: T; description) {
            let value = v.value();
            if *value >= min && *value <= max {
                violations::value_should_not_be_between(&v, &min, &max, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless `value > bound`.
        fn is_greater_than / is_greater_than_with(v, bound: T; description) {
            if *v.value() > bound {
                Ok(())
            } else {
                violations::value_should_be_greater_than(&v, &bound, description)
            }
        }

        /// Fails if `value > bound`.
        fn is_not_greater_than / is_not_greater_than_with(v, bound: T; description) {
            if *v.value() > bound {
                violations::value_should_not_be_greater_than(&v, &bound, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless `value >= bound`.
        fn is_greater_or_equal / is_greater_or_equal_with(v, bound: T; description) {
            if *v.value() >= bound {
                Ok(())
            } else {
                violations::value_should_be_greater_or_equal(&v, &bound, description)
            }
        }

        /// Fails if `value >= bound`.
        fn is_not_greater_or_equal / is_not_greater_or_equal_with(v, bound: T; description) {
            if *v.value() >= bound {
                violations::value_should_not_be_greater_or_equal(&v, &bound, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless `value < bound`.
        fn is_less_than / is_less_than_with(v, bound: T; description) {
            if *v.value() < bound {
                Ok(())
            } else {
                violations::value_should_be_less_than(&v, &bound, description)
            }
        }

        /// Fails if `value < bound`.
        fn is_not_less_than / is_not_less_than_with(v, bound: T; description) {
            if *v.value() < bound {
                violations::value_should_not_be_less_than(&v, &bound, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless `value <= bound`.
        fn is_less_or_equal / is_less_or_equal_with(v, bound: T; description) {
            if *v.value() <= bound {
                Ok(())
            } else {
                violations::value_should_be_less_or_equal(&v, &bound, description)
            }
        }

        /// Fails if `value <= bound`.
        fn is_not_less_or_equal / is_not_less_or_equal_with(v, bound: T; description) {
            if *v.value() <= bound {
                violations::value_should_not_be_less_or_equal(&v, &bound, description)
            } else {
                Ok(())
            }
        }
    }
}
