//! Failure entry points
//!
//! One function per assertion family. Each is called only after its
//! assertion's predicate failed. A suppressed validator returns at once;
//! otherwise the entry point picks the message key and the violation
//! category, builds the condition sentence and any additional context, and
//! hands everything to [`fail`]. Cardinality entry points take the element
//! count the assertion already computed, so a collection is walked once.
//!
//! Additional context:
//!
//! - ordering, range, equality and predicate failures show the actual value
//!   (inequality does not);
//! - string length failures show the actual length (`should_not_have_length`
//!   does not);
//! - collection cardinality failures show the element count
//!   (`should_not_have_count` does not);
//! - everything else has none.

use crate::engine::classify::ViolationCategory;
use crate::engine::context::{count_sentence, length_context, value_context};
use crate::engine::materialize::{fail, suppressed};
use crate::engine::messages::MessageKey;
use crate::engine::resolve::resolve;
use crate::foundation::{ConditionError, ContractValue, Sequence, Text, Validator, render_sequence};

type Outcome = Result<(), ConditionError>;

// Suppressed failures stop here, before anything is rendered or counted.
macro_rules! return_if_suppressed {
    ($validator:expr) => {
        if suppressed($validator) {
            return Ok(());
        }
    };
}

fn condition<T>(
    validator: &Validator<T>,
    key: MessageKey,
    description: Option<&str>,
    args: &[&str],
) -> String {
    resolve(
        validator.messages(),
        key,
        description,
        validator.argument_name(),
        args,
    )
}

fn actual_value<T: ContractValue>(validator: &Validator<T>) -> Option<String> {
    value_context(validator.messages(), validator.argument_name(), validator.value())
}

fn actual_length<S: Text>(validator: &Validator<S>) -> Option<String> {
    Some(length_context(
        validator.messages(),
        validator.argument_name(),
        validator.value().text(),
    ))
}

fn actual_count<C>(validator: &Validator<C>, count: Option<usize>) -> Option<String> {
    Some(count_sentence(validator.messages(), validator.argument_name(), count))
}

// Plain failure: condition sentence only, default category.
fn plain<T: ContractValue>(
    validator: &Validator<T>,
    key: MessageKey,
    description: Option<&str>,
    args: &[&str],
) -> Outcome {
    let condition = condition(validator, key, description, args);
    fail(validator, condition, None, ViolationCategory::Default)
}

// Failure on a bound that is shown together with the actual value.
fn against_value<T: ContractValue>(
    validator: &Validator<T>,
    key: MessageKey,
    description: Option<&str>,
    args: &[&str],
    category: ViolationCategory,
) -> Outcome {
    let condition = condition(validator, key, description, args);
    fail(validator, condition, actual_value(validator), category)
}

// Countable bound with singular/plural keys, plus optional context.
fn counted<T: ContractValue>(
    validator: &Validator<T>,
    bound: usize,
    (singular, plural): (MessageKey, MessageKey),
    description: Option<&str>,
    additional: Option<String>,
) -> Outcome {
    let key = MessageKey::for_count(bound, singular, plural);
    let bound = bound.to_string();
    let condition = condition(validator, key, description, &[bound.as_str()]);
    fail(validator, condition, additional, ViolationCategory::Default)
}

// ============================================================================
// VALUES
// ============================================================================

pub(crate) fn value_should_not_be_null<T: ContractValue>(
    validator: &Validator<T>,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    plain(validator, MessageKey::ValueShouldNotBeNull, description, &[])
}

pub(crate) fn value_should_be_null<T: ContractValue>(
    validator: &Validator<T>,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    plain(validator, MessageKey::ValueShouldBeNull, description, &[])
}

pub(crate) fn value_should_be_between<T: ContractValue>(
    validator: &Validator<T>,
    min: &T,
    max: &T,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    against_value(
        validator,
        MessageKey::ValueShouldBeBetween,
        description,
        &[min.render().as_str(), max.render().as_str()],
        ViolationCategory::OutOfRange,
    )
}

pub(crate) fn value_should_not_be_between<T: ContractValue>(
    validator: &Validator<T>,
    min: &T,
    max: &T,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    against_value(
        validator,
        MessageKey::ValueShouldNotBeBetween,
        description,
        &[min.render().as_str(), max.render().as_str()],
        ViolationCategory::Default,
    )
}

pub(crate) fn value_should_be_equal_to<T: ContractValue>(
    validator: &Validator<T>,
    expected: &T,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    against_value(
        validator,
        MessageKey::ValueShouldBeEqualTo,
        description,
        &[expected.render().as_str()],
        ViolationCategory::Default,
    )
}

pub(crate) fn value_should_not_be_equal_to<T: ContractValue>(
    validator: &Validator<T>,
    unexpected: &T,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    plain(
        validator,
        MessageKey::ValueShouldNotBeEqualTo,
        description,
        &[unexpected.render().as_str()],
    )
}

macro_rules! ordering_entry_points {
    ($($name:ident => $key:ident),* $(,)?) => {
        $(
            pub(crate) fn $name<T: ContractValue>(
                validator: &Validator<T>,
                bound: &T,
                description: Option<&str>,
            ) -> Outcome {
                return_if_suppressed!(validator);
                against_value(
                    validator,
                    MessageKey::$key,
                    description,
                    &[bound.render().as_str()],
                    ViolationCategory::OutOfRange,
                )
            }
        )*
    };
}

ordering_entry_points!(
    value_should_be_greater_than => ValueShouldBeGreaterThan,
    value_should_not_be_greater_than => ValueShouldNotBeGreaterThan,
    value_should_be_greater_or_equal => ValueShouldBeGreaterOrEqual,
    value_should_not_be_greater_or_equal => ValueShouldNotBeGreaterOrEqual,
    value_should_be_less_than => ValueShouldBeLessThan,
    value_should_not_be_less_than => ValueShouldNotBeLessThan,
    value_should_be_less_or_equal => ValueShouldBeLessOrEqual,
    value_should_not_be_less_or_equal => ValueShouldNotBeLessOrEqual,
);

pub(crate) fn expression_evaluated_false<T: ContractValue>(
    validator: &Validator<T>,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    against_value(
        validator,
        MessageKey::ValueShouldBeValid,
        description,
        &[],
        ViolationCategory::Default,
    )
}

pub(crate) fn predicate_should_hold<T: ContractValue>(
    validator: &Validator<T>,
    predicate: &str,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    against_value(
        validator,
        MessageKey::PredicateShouldHold,
        description,
        &[predicate],
        ViolationCategory::Default,
    )
}

pub(crate) fn value_should_be_true<T: ContractValue>(
    validator: &Validator<T>,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    plain(validator, MessageKey::ValueShouldBeTrue, description, &[])
}

pub(crate) fn value_should_be_false<T: ContractValue>(
    validator: &Validator<T>,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    plain(validator, MessageKey::ValueShouldBeFalse, description, &[])
}

pub(crate) fn value_should_be_of_type<T: ContractValue>(
    validator: &Validator<T>,
    type_name: &str,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    plain(validator, MessageKey::ValueShouldBeOfType, description, &[type_name])
}

pub(crate) fn value_should_not_be_of_type<T: ContractValue>(
    validator: &Validator<T>,
    type_name: &str,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    plain(validator, MessageKey::ValueShouldNotBeOfType, description, &[type_name])
}

// ============================================================================
// STRINGS
// ============================================================================

macro_rules! string_shape_entry_points {
    ($($name:ident => $key:ident),* $(,)?) => {
        $(
            pub(crate) fn $name<S: ContractValue + Text>(
                validator: &Validator<S>,
                description: Option<&str>,
            ) -> Outcome {
                return_if_suppressed!(validator);
                plain(validator, MessageKey::$key, description, &[])
            }
        )*
    };
}

string_shape_entry_points!(
    string_should_be_null_or_empty => StringShouldBeNullOrEmpty,
    string_should_be_empty => StringShouldBeEmpty,
    string_should_not_be_empty => StringShouldNotBeEmpty,
    string_should_not_be_null_or_empty => StringShouldNotBeNullOrEmpty,
);

macro_rules! string_length_entry_points {
    ($($name:ident => ($singular:ident, $plural:ident)),* $(,)?) => {
        $(
            pub(crate) fn $name<S: ContractValue + Text>(
                validator: &Validator<S>,
                length: usize,
                description: Option<&str>,
            ) -> Outcome {
                return_if_suppressed!(validator);
                counted(
                    validator,
                    length,
                    (MessageKey::$singular, MessageKey::$plural),
                    description,
                    actual_length(validator),
                )
            }
        )*
    };
}

string_length_entry_points!(
    string_should_have_length => (StringShouldHaveLengthSingular, StringShouldHaveLengthPlural),
    string_should_be_longer_than => (StringShouldBeLongerThanSingular, StringShouldBeLongerThanPlural),
    string_should_be_longer_or_equal =>
        (StringShouldBeLongerOrEqualSingular, StringShouldBeLongerOrEqualPlural),
    string_should_be_shorter_than =>
        (StringShouldBeShorterThanSingular, StringShouldBeShorterThanPlural),
    string_should_be_shorter_or_equal =>
        (StringShouldBeShorterOrEqualSingular, StringShouldBeShorterOrEqualPlural),
);

pub(crate) fn string_should_not_have_length<S: ContractValue + Text>(
    validator: &Validator<S>,
    length: usize,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    counted(
        validator,
        length,
        (
            MessageKey::StringShouldNotHaveLengthSingular,
            MessageKey::StringShouldNotHaveLengthPlural,
        ),
        description,
        None,
    )
}

macro_rules! string_content_entry_points {
    ($($name:ident => $key:ident),* $(,)?) => {
        $(
            pub(crate) fn $name<S: ContractValue + Text>(
                validator: &Validator<S>,
                fragment: &str,
                description: Option<&str>,
            ) -> Outcome {
                return_if_suppressed!(validator);
                plain(validator, MessageKey::$key, description, &[fragment])
            }
        )*
    };
}

string_content_entry_points!(
    string_should_contain => StringShouldContain,
    string_should_not_contain => StringShouldNotContain,
    string_should_start_with => StringShouldStartWith,
    string_should_not_start_with => StringShouldNotStartWith,
    string_should_end_with => StringShouldEndWith,
    string_should_not_end_with => StringShouldNotEndWith,
);

// ============================================================================
// COLLECTIONS
// ============================================================================

pub(crate) fn collection_should_be_empty<C: ContractValue + Sequence>(
    validator: &Validator<C>,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    plain(validator, MessageKey::CollectionShouldBeEmpty, description, &[])
}

pub(crate) fn collection_should_not_be_empty<C: ContractValue + Sequence>(
    validator: &Validator<C>,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    plain(validator, MessageKey::CollectionShouldNotBeEmpty, description, &[])
}

pub(crate) fn collection_should_contain<C, E>(
    validator: &Validator<C>,
    element: &E,
    description: Option<&str>,
) -> Outcome
where
    C: ContractValue + Sequence,
    E: ContractValue + ?Sized,
{
    return_if_suppressed!(validator);
    plain(
        validator,
        MessageKey::CollectionShouldContain,
        description,
        &[element.render().as_str()],
    )
}

pub(crate) fn collection_should_not_contain<C, E>(
    validator: &Validator<C>,
    element: &E,
    description: Option<&str>,
) -> Outcome
where
    C: ContractValue + Sequence,
    E: ContractValue + ?Sized,
{
    return_if_suppressed!(validator);
    plain(
        validator,
        MessageKey::CollectionShouldNotContain,
        description,
        &[element.render().as_str()],
    )
}

macro_rules! membership_entry_points {
    ($($name:ident => $key:ident),* $(,)?) => {
        $(
            pub(crate) fn $name<C, E>(
                validator: &Validator<C>,
                elements: &[E],
                description: Option<&str>,
            ) -> Outcome
            where
                C: ContractValue + Sequence,
                E: ContractValue,
            {
                return_if_suppressed!(validator);
                plain(validator, MessageKey::$key, description, &[render_sequence(elements).as_str()])
            }
        )*
    };
}

membership_entry_points!(
    collection_should_contain_any_of => CollectionShouldContainAnyOf,
    collection_should_not_contain_any_of => CollectionShouldNotContainAnyOf,
    collection_should_contain_all_of => CollectionShouldContainAllOf,
    collection_should_not_contain_all_of => CollectionShouldNotContainAllOf,
);

macro_rules! cardinality_entry_points {
    ($($name:ident => ($singular:ident, $plural:ident)),* $(,)?) => {
        $(
            pub(crate) fn $name<C: ContractValue + Sequence>(
                validator: &Validator<C>,
                count: usize,
                actual: Option<usize>,
                description: Option<&str>,
            ) -> Outcome {
                return_if_suppressed!(validator);
                counted(
                    validator,
                    count,
                    (MessageKey::$singular, MessageKey::$plural),
                    description,
                    actual_count(validator, actual),
                )
            }
        )*
    };
}

cardinality_entry_points!(
    collection_should_have_count =>
        (CollectionShouldHaveCountSingular, CollectionShouldHaveCountPlural),
    collection_should_have_less_than =>
        (CollectionShouldHaveLessThanSingular, CollectionShouldHaveLessThanPlural),
    collection_should_not_have_less_than =>
        (CollectionShouldNotHaveLessThanSingular, CollectionShouldNotHaveLessThanPlural),
    collection_should_have_more_than =>
        (CollectionShouldHaveMoreThanSingular, CollectionShouldHaveMoreThanPlural),
    collection_should_not_have_more_than =>
        (CollectionShouldNotHaveMoreThanSingular, CollectionShouldNotHaveMoreThanPlural),
    collection_should_have_at_most => (CollectionShouldHaveAtMost, CollectionShouldHaveAtMost),
    collection_should_not_have_at_most =>
        (CollectionShouldNotHaveAtMost, CollectionShouldNotHaveAtMost),
    collection_should_have_at_least => (CollectionShouldHaveAtLeast, CollectionShouldHaveAtLeast),
    collection_should_not_have_at_least =>
        (CollectionShouldNotHaveAtLeast, CollectionShouldNotHaveAtLeast),
);

pub(crate) fn collection_should_not_have_count<C: ContractValue + Sequence>(
    validator: &Validator<C>,
    count: usize,
    description: Option<&str>,
) -> Outcome {
    return_if_suppressed!(validator);
    counted(
        validator,
        count,
        (
            MessageKey::CollectionShouldNotHaveCountSingular,
            MessageKey::CollectionShouldNotHaveCountPlural,
        ),
        description,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, ensures, requires};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_between_message_and_kind() {
        let v = requires(11, "x");
        let err = value_should_be_between(&v, &1, &10, None).unwrap_err();
        assert_eq!(err.message(), "x should be between 1 and 10. The actual value is 11.");
        assert_eq!(err.kind(), ErrorKind::ArgumentOutOfRange);
    }

    #[test]
    fn test_not_equal_has_no_context() {
        let v = requires(3, "x");
        let err = value_should_not_be_equal_to(&v, &3, None).unwrap_err();
        assert_eq!(err.message(), "x should not be equal to 3.");
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn test_string_length_pluralization() {
        let v = requires("ab", "s");
        let err = string_should_have_length(&v, 1, None).unwrap_err();
        assert_eq!(
            err.message(),
            "s should be 1 character long. The actual value is 2 characters long."
        );

        let v = requires("a", "s");
        let err = string_should_have_length(&v, 3, None).unwrap_err();
        assert_eq!(
            err.message(),
            "s should be 3 characters long. The actual value is 1 character long."
        );
    }

    #[test]
    fn test_string_not_have_length_has_no_context() {
        let v = requires("ab", "s");
        let err = string_should_not_have_length(&v, 2, None).unwrap_err();
        assert_eq!(err.message(), "s should not be 2 characters long.");
    }

    #[test]
    fn test_collection_count_context() {
        let v = requires(vec![1, 2, 3], "items");
        let err = collection_should_have_less_than(&v, 1, Some(3), None).unwrap_err();
        assert_eq!(
            err.message(),
            "items should contain less than 1 element. items currently contains 3 elements."
        );
    }

    #[test]
    fn test_collection_null_context() {
        let v = requires(None::<Vec<i32>>, "items");
        let err = collection_should_have_count(&v, 2, None, None).unwrap_err();
        assert_eq!(
            err.message(),
            "items should contain 2 elements. items is currently a null reference."
        );
        assert_eq!(err.kind(), ErrorKind::ArgumentNull);
    }

    #[test]
    fn test_membership_renders_sequence() {
        let v = ensures(vec![1], "items");
        let err = collection_should_contain_all_of(&v, &[1, 2], None).unwrap_err();
        assert_eq!(
            err.message(),
            "Postcondition 'items should contain all of the following elements: {1, 2}' failed."
        );
    }

    #[test]
    fn test_suppressed_skips_rendering() {
        #[derive(Debug)]
        struct Loud(Rc<Cell<usize>>);

        impl ContractValue for Loud {
            fn render(&self) -> String {
                self.0.set(self.0.get() + 1);
                "loud".to_owned()
            }
        }

        let renders = Rc::new(Cell::new(0));
        let v = requires(Loud(Rc::clone(&renders)), "x").suppress_errors_for_test();
        assert!(value_should_be_equal_to(&v, &Loud(Rc::clone(&renders)), None).is_ok());
        assert!(predicate_should_hold(&v, "is quiet", Some("{0} custom")).is_ok());
        assert_eq!(renders.get(), 0);

        let v = requires(Loud(Rc::clone(&renders)), "x");
        assert!(value_should_be_equal_to(&v, &Loud(Rc::clone(&renders)), None).is_err());
        assert!(renders.get() > 0);
    }

    #[test]
    fn test_predicate_shows_value() {
        let v = requires(4, "n");
        let err = predicate_should_hold(&v, "n is odd", None).unwrap_err();
        assert_eq!(err.message(), "'n is odd' should hold for n. The actual value is 4.");
    }
}
