//! String checks
//!
//! Lengths are counted in Unicode scalar values (`chars`), and a null string
//! has length zero. Content checks fail on a null string; their negations
//! pass on it.

use crate::engine::violations;
use crate::foundation::{ContractValue, Text};

fn char_len<S: Text>(value: &S) -> usize {
    value.text().map_or(0, |text| text.chars().count())
}

conditions! {
    /// Checks on the shape and content of text values.
    ///
    /// Implemented for `str`, `String`, `Cow<str>`, their smart pointers and
    /// `Option`s of those.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nebula_conditions::prelude::*;
    ///
    /// let err = requires("ab", "code").has_length(3).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "code should be 3 characters long. The actual value is 2 characters long."
    /// );
    /// ```
    pub trait StringConditions;
    impl<S> for Validator<S> where { S: ContractValue + Text }
    {
        /// Fails unless the string is null or empty.
        fn is_null_or_empty / is_null_or_empty_with(v; description) {
            if v.value().text().is_none_or(str::is_empty) {
                Ok(())
            } else {
                violations::string_should_be_null_or_empty(&v, description)
            }
        }

        /// Fails unless the string is empty. A null string fails.
        fn is_empty / is_empty_with(v; description) {
            if v.value().text().is_some_and(str::is_empty) {
                Ok(())
            } else {
                violations::string_should_be_empty(&v, description)
            }
        }

        /// Fails if the string is empty. A null string passes.
        fn is_not_empty / is_not_empty_with(v; description) {
            if v.value().text().is_some_and(str::is_empty) {
                violations::string_should_not_be_empty(&v, description)
            } else {
                Ok(())
            }
        }

        /// Fails if the string is null or empty.
        fn is_not_null_or_empty / is_not_null_or_empty_with(v; description) {
            if v.value().text().is_none_or(str::is_empty) {
                violations::string_should_not_be_null_or_empty(&v, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the string is exactly `length` characters long.
        fn has_length / has_length_with(v, length: usize; description) {
            if char_len(v.value()) == length {
                Ok(())
            } else {
                violations::string_should_have_length(&v, length, description)
            }
        }

        /// Fails if the string is exactly `length` characters long.
        fn does_not_have_length / does_not_have_length_with(v, length: usize; description) {
            if char_len(v.value()) == length {
                violations::string_should_not_have_length(&v, length, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the string is longer than `min_length` characters.
        fn is_longer_than / is_longer_than_with(v, min_length: usize; description) {
            if char_len(v.value()) > min_length {
                Ok(())
            } else {
                violations::string_should_be_longer_than(&v, min_length, description)
            }
        }

        /// Fails unless the string has at least `min_length` characters.
        fn is_longer_or_equal / is_longer_or_equal_with(v, min_length: usize; description) {
            if char_len(v.value()) >= min_length {
                Ok(())
            } else {
                violations::string_should_be_longer_or_equal(&v, min_length, description)
            }
        }

        /// Fails unless the string is shorter than `max_length` characters.
        fn is_shorter_than / is_shorter_than_with(v, max_length: usize; description) {
            if char_len(v.value()) < max_length {
                Ok(())
            } else {
                violations::string_should_be_shorter_than(&v, max_length, description)
            }
        }

        /// Fails unless the string has at most `max_length` characters.
        fn is_shorter_or_equal / is_shorter_or_equal_with(v, max_length: usize; description) {
            if char_len(v.value()) <= max_length {
                Ok(())
            } else {
                violations::string_should_be_shorter_or_equal(&v, max_length, description)
            }
        }

        /// Fails unless the string contains `fragment`.
        fn contains / contains_with(v, fragment: &str; description) {
            if v.value().text().is_some_and(|text| text.contains(fragment)) {
                Ok(())
            } else {
                violations::string_should_contain(&v, fragment, description)
            }
        }

        /// Fails if the string contains `fragment`.
        fn does_not_contain / does_not_contain_with(v, fragment: &str; description) {
            if v.value().text().is_some_and(|text| text.contains(fragment)) {
                violations::string_should_not_contain(&v, fragment, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the string starts with `prefix`.
        fn starts_with / starts_with_with(v, prefix: &str; description) {
            if v.value().text().is_some_and(|text| text.starts_with(prefix)) {
                Ok(())
            } else {
                violations::string_should_start_with(&v, prefix, description)
            }
        }

        /// Fails if the string starts with `prefix`.
        fn does_not_start_with / does_not_start_with_with(v, prefix: &str; description) {
            if v.value().text().is_some_and(|text| text.starts_with(prefix)) {
                violations::string_should_not_start_with(&v, prefix, description)
            } else {
                Ok(())
            }
        }

        /// Fails unless the string ends with `suffix`.
        fn ends_with / ends_with_with(v, suffix: &str; description) {
            if v.value().text().is_some_and(|text| text.ends_with(suffix)) {
                Ok(())
            } else {
                violations::string_should_end_with(&v, suffix, description)
            }
        }

        /// Fails if the string ends with `suffix`.
        fn does_not_end_with / does_not_end_with_with(v, suffix: &str; description) {
            if v.value().text().is_some_and(|text| text.ends_with(suffix)) {
                violations::string_should_not_end_with(&v, suffix, description)
            } else {
                Ok(())
            }
        }
    }
}
