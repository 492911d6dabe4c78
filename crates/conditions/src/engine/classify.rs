//! Violation classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::ContractValue;

/// Why an assertion failed, independent of the validator's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    /// Generic contract violation.
    #[default]
    Default,
    /// The value is outside the allowed range.
    OutOfRange,
    /// The value is not a valid member of its enumeration.
    InvalidEnumValue,
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::OutOfRange => "out_of_range",
            Self::InvalidEnumValue => "invalid_enum_value",
        })
    }
}

/// Decides the category actually reported for a failure on a `T`.
///
/// Enum-typed values always report [`ViolationCategory::InvalidEnumValue`];
/// everything else reports `requested` unchanged.
#[inline]
pub fn classify<T: ContractValue + ?Sized>(requested: ViolationCategory) -> ViolationCategory {
    if T::IS_ENUM {
        ViolationCategory::InvalidEnumValue
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Weekday {
        Monday,
    }

    impl ContractValue for Weekday {
        const IS_ENUM: bool = true;

        fn render(&self) -> String {
            match self {
                Self::Monday => "Monday".to_owned(),
            }
        }
    }

    fn any_category() -> impl Strategy<Value = ViolationCategory> {
        prop_oneof![
            Just(ViolationCategory::Default),
            Just(ViolationCategory::OutOfRange),
            Just(ViolationCategory::InvalidEnumValue),
        ]
    }

    proptest! {
        #[test]
        fn non_enum_keeps_requested(category in any_category()) {
            prop_assert_eq!(classify::<i64>(category), category);
            prop_assert_eq!(classify::<str>(category), category);
            prop_assert_eq!(classify::<Option<Weekday>>(category), category);
        }

        #[test]
        fn enum_is_always_invalid_enum(category in any_category()) {
            prop_assert_eq!(classify::<Weekday>(category), ViolationCategory::InvalidEnumValue);
            prop_assert_eq!(classify::<&Weekday>(category), ViolationCategory::InvalidEnumValue);
        }
    }

    #[test]
    fn test_weekday_renders_variant() {
        assert_eq!(Weekday::Monday.render(), "Monday");
    }
}
