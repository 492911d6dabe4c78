//! Message keys and message tables
//!
//! Every phrase a condition can produce is identified by a [`MessageKey`]. A
//! [`MessageTable`] maps keys to templates; [`DefaultMessages`] is the builtin
//! English table and [`OverlayMessages`] replaces individual phrases.
//!
//! In every template `{0}` is the argument name. Countable phrases come in
//! singular/plural pairs; callers choose the key with [`MessageKey::for_count`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ============================================================================
// MESSAGE KEY
// ============================================================================

/// Identifier of one message phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum MessageKey {
    // Null-ness
    ValueShouldNotBeNull,
    ValueShouldBeNull,

    // Range and equality
    ValueShouldBeBetween,
    ValueShouldNotBeBetween,
    ValueShouldBeEqualTo,
    ValueShouldNotBeEqualTo,
    ValueShouldBeGreaterThan,
    ValueShouldNotBeGreaterThan,
    ValueShouldBeGreaterOrEqual,
    ValueShouldNotBeGreaterOrEqual,
    ValueShouldBeLessThan,
    ValueShouldNotBeLessThan,
    ValueShouldBeLessOrEqual,
    ValueShouldNotBeLessOrEqual,

    // Predicates, booleans, types
    ValueShouldBeValid,
    PredicateShouldHold,
    ValueShouldBeTrue,
    ValueShouldBeFalse,
    ValueShouldBeOfType,
    ValueShouldNotBeOfType,

    // String shape
    StringShouldBeNullOrEmpty,
    StringShouldBeEmpty,
    StringShouldNotBeEmpty,
    StringShouldNotBeNullOrEmpty,
    StringShouldHaveLengthSingular,
    StringShouldHaveLengthPlural,
    StringShouldNotHaveLengthSingular,
    StringShouldNotHaveLengthPlural,
    StringShouldBeLongerThanSingular,
    StringShouldBeLongerThanPlural,
    StringShouldBeLongerOrEqualSingular,
    StringShouldBeLongerOrEqualPlural,
    StringShouldBeShorterThanSingular,
    StringShouldBeShorterThanPlural,
    StringShouldBeShorterOrEqualSingular,
    StringShouldBeShorterOrEqualPlural,
    StringShouldContain,
    StringShouldNotContain,
    StringShouldStartWith,
    StringShouldNotStartWith,
    StringShouldEndWith,
    StringShouldNotEndWith,

    // Collection membership
    CollectionShouldBeEmpty,
    CollectionShouldNotBeEmpty,
    CollectionShouldContain,
    CollectionShouldNotContain,
    CollectionShouldContainAnyOf,
    CollectionShouldNotContainAnyOf,
    CollectionShouldContainAllOf,
    CollectionShouldNotContainAllOf,

    // Collection cardinality
    CollectionShouldHaveCountSingular,
    CollectionShouldHaveCountPlural,
    CollectionShouldNotHaveCountSingular,
    CollectionShouldNotHaveCountPlural,
    CollectionShouldHaveLessThanSingular,
    CollectionShouldHaveLessThanPlural,
    CollectionShouldNotHaveLessThanSingular,
    CollectionShouldNotHaveLessThanPlural,
    CollectionShouldHaveMoreThanSingular,
    CollectionShouldHaveMoreThanPlural,
    CollectionShouldNotHaveMoreThanSingular,
    CollectionShouldNotHaveMoreThanPlural,
    CollectionShouldHaveAtMost,
    CollectionShouldNotHaveAtMost,
    CollectionShouldHaveAtLeast,
    CollectionShouldNotHaveAtLeast,

    // Additional context
    ActualValueIs,
    ActualLengthSingular,
    ActualLengthPlural,
    CollectionIsNull,
    CollectionCountSingular,
    CollectionCountPlural,

    // Postcondition wrapper
    PostconditionFailed,
}

impl MessageKey {
    /// Picks `singular` when `count == 1`, `plural` otherwise (including 0).
    #[inline]
    pub const fn for_count(count: usize, singular: Self, plural: Self) -> Self {
        if count == 1 { singular } else { plural }
    }

    /// Builtin English template for this key.
    pub const fn default_template(self) -> &'static str {
        match self {
            Self::ValueShouldNotBeNull => "{0} should not be null",
            Self::ValueShouldBeNull => "{0} should be null",

            Self::ValueShouldBeBetween => "{0} should be between {1} and {2}",
            Self::ValueShouldNotBeBetween => "{0} should not be between {1} and {2}",
            Self::ValueShouldBeEqualTo => "{0} should be equal to {1}",
            Self::ValueShouldNotBeEqualTo => "{0} should not be equal to {1}",
            Self::ValueShouldBeGreaterThan => "{0} should be greater than {1}",
            Self::ValueShouldNotBeGreaterThan => "{0} should not be greater than {1}",
            Self::ValueShouldBeGreaterOrEqual => "{0} should be greater than or equal to {1}",
            Self::ValueShouldNotBeGreaterOrEqual => {
                "{0} should not be greater than or equal to {1}"
            }
            Self::ValueShouldBeLessThan => "{0} should be less than {1}",
            Self::ValueShouldNotBeLessThan => "{0} should not be less than {1}",
            Self::ValueShouldBeLessOrEqual => "{0} should be less than or equal to {1}",
            Self::ValueShouldNotBeLessOrEqual => "{0} should not be less than or equal to {1}",

            Self::ValueShouldBeValid => "{0} should be valid",
            Self::PredicateShouldHold => "'{1}' should hold for {0}",
            Self::ValueShouldBeTrue => "{0} should be true",
            Self::ValueShouldBeFalse => "{0} should be false",
            Self::ValueShouldBeOfType => "{0} should be of type {1}",
            Self::ValueShouldNotBeOfType => "{0} should not be of type {1}",

            Self::StringShouldBeNullOrEmpty => "{0} should be null or an empty string",
            Self::StringShouldBeEmpty => "{0} should be an empty string",
            Self::StringShouldNotBeEmpty => "{0} should not be an empty string",
            Self::StringShouldNotBeNullOrEmpty => "{0} should not be null or an empty string",
            Self::StringShouldHaveLengthSingular => "{0} should be 1 character long",
            Self::StringShouldHaveLengthPlural => "{0} should be {1} characters long",
            Self::StringShouldNotHaveLengthSingular => "{0} should not be 1 character long",
            Self::StringShouldNotHaveLengthPlural => "{0} should not be {1} characters long",
            Self::StringShouldBeLongerThanSingular => "{0} should be longer than 1 character",
            Self::StringShouldBeLongerThanPlural => "{0} should be longer than {1} characters",
            Self::StringShouldBeLongerOrEqualSingular => {
                "{0} should be longer than or equal to 1 character"
            }
            Self::StringShouldBeLongerOrEqualPlural => {
                "{0} should be longer than or equal to {1} characters"
            }
            Self::StringShouldBeShorterThanSingular => "{0} should be shorter than 1 character",
            Self::StringShouldBeShorterThanPlural => "{0} should be shorter than {1} characters",
            Self::StringShouldBeShorterOrEqualSingular => {
                "{0} should be shorter than or equal to 1 character"
            }
            Self::StringShouldBeShorterOrEqualPlural => {
                "{0} should be shorter than or equal to {1} characters"
            }
            Self::StringShouldContain => "{0} should contain '{1}'",
            Self::StringShouldNotContain => "{0} should not contain '{1}'",
            Self::StringShouldStartWith => "{0} should start with '{1}'",
            Self::StringShouldNotStartWith => "{0} should not start with '{1}'",
            Self::StringShouldEndWith => "{0} should end with '{1}'",
            Self::StringShouldNotEndWith => "{0} should not end with '{1}'",

            Self::CollectionShouldBeEmpty => "{0} should be empty",
            Self::CollectionShouldNotBeEmpty => "{0} should not be empty",
            Self::CollectionShouldContain => "{0} should contain {1}",
            Self::CollectionShouldNotContain => "{0} should not contain {1}",
            Self::CollectionShouldContainAnyOf => {
                "{0} should contain at least one of the following elements: {1}"
            }
            Self::CollectionShouldNotContainAnyOf => {
                "{0} should not contain any of the following elements: {1}"
            }
            Self::CollectionShouldContainAllOf => {
                "{0} should contain all of the following elements: {1}"
            }
            Self::CollectionShouldNotContainAllOf => {
                "{0} should not contain all of the following elements: {1}"
            }

            Self::CollectionShouldHaveCountSingular => "{0} should contain 1 element",
            Self::CollectionShouldHaveCountPlural => "{0} should contain {1} elements",
            Self::CollectionShouldNotHaveCountSingular => "{0} should not contain 1 element",
            Self::CollectionShouldNotHaveCountPlural => "{0} should not contain {1} elements",
            Self::CollectionShouldHaveLessThanSingular => "{0} should contain less than 1 element",
            Self::CollectionShouldHaveLessThanPlural => {
                "{0} should contain less than {1} elements"
            }
            Self::CollectionShouldNotHaveLessThanSingular => {
                "{0} should not contain less than 1 element"
            }
            Self::CollectionShouldNotHaveLessThanPlural => {
                "{0} should not contain less than {1} elements"
            }
            Self::CollectionShouldHaveMoreThanSingular => "{0} should contain more than 1 element",
            Self::CollectionShouldHaveMoreThanPlural => {
                "{0} should contain more than {1} elements"
            }
            Self::CollectionShouldNotHaveMoreThanSingular => {
                "{0} should not contain more than 1 element"
            }
            Self::CollectionShouldNotHaveMoreThanPlural => {
                "{0} should not contain more than {1} elements"
            }
            Self::CollectionShouldHaveAtMost => "{0} should contain {1} or less elements",
            Self::CollectionShouldNotHaveAtMost => "{0} should not contain {1} or less elements",
            Self::CollectionShouldHaveAtLeast => "{0} should contain {1} or more elements",
            Self::CollectionShouldNotHaveAtLeast => "{0} should not contain {1} or more elements",

            Self::ActualValueIs => "The actual value is {1}.",
            Self::ActualLengthSingular => "The actual value is 1 character long.",
            Self::ActualLengthPlural => "The actual value is {1} characters long.",
            Self::CollectionIsNull => "{0} is currently a null reference.",
            Self::CollectionCountSingular => "{0} currently contains 1 element.",
            Self::CollectionCountPlural => "{0} currently contains {1} elements.",

            Self::PostconditionFailed => "Postcondition '{0}' failed.",
        }
    }
}

// ============================================================================
// MESSAGE TABLES
// ============================================================================

/// Source of message templates.
///
/// Implementations must return a template for every key. Templates use the
/// placeholder syntax of [`format_template`](crate::engine::format_template).
pub trait MessageTable: Send + Sync {
    /// Template for `key`.
    fn template(&self, key: MessageKey) -> Cow<'_, str>;
}

/// The builtin English messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultMessages;

impl MessageTable for DefaultMessages {
    fn template(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Borrowed(key.default_template())
    }
}

/// Replaces selected phrases of another table.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use nebula_conditions::engine::{MessageKey, MessageTable, OverlayMessages};
///
/// let table = OverlayMessages::over_defaults(HashMap::from([(
///     MessageKey::ValueShouldNotBeNull,
///     "{0} is required".to_owned(),
/// )]));
/// assert_eq!(table.template(MessageKey::ValueShouldNotBeNull), "{0} is required");
/// assert_eq!(table.template(MessageKey::ValueShouldBeNull), "{0} should be null");
/// ```
#[derive(Clone)]
pub struct OverlayMessages {
    base: Arc<dyn MessageTable>,
    overrides: HashMap<MessageKey, String>,
}

impl OverlayMessages {
    /// Layers `overrides` over `base`.
    pub fn new(base: Arc<dyn MessageTable>, overrides: HashMap<MessageKey, String>) -> Self {
        Self { base, overrides }
    }

    /// Layers `overrides` over [`DefaultMessages`].
    pub fn over_defaults(overrides: HashMap<MessageKey, String>) -> Self {
        Self::new(Arc::new(DefaultMessages), overrides)
    }

    /// Parses overrides from a JSON object keyed by snake_case message key.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let overrides: HashMap<MessageKey, String> = serde_json::from_str(json)?;
        Ok(Self::over_defaults(overrides))
    }

    /// Number of replaced phrases.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Returns `true` if nothing is replaced.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl MessageTable for OverlayMessages {
    fn template(&self, key: MessageKey) -> Cow<'_, str> {
        match self.overrides.get(&key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => self.base.template(key),
        }
    }
}

impl std::fmt::Debug for OverlayMessages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayMessages")
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_for_count_picks_singular_only_for_one() {
        let pick = |n| {
            MessageKey::for_count(
                n,
                MessageKey::ActualLengthSingular,
                MessageKey::ActualLengthPlural,
            )
        };
        assert_eq!(pick(0), MessageKey::ActualLengthPlural);
        assert_eq!(pick(1), MessageKey::ActualLengthSingular);
        assert_eq!(pick(2), MessageKey::ActualLengthPlural);
    }

    #[test]
    fn test_default_templates_name_the_argument_first() {
        for key in [
            MessageKey::ValueShouldNotBeNull,
            MessageKey::ValueShouldBeBetween,
            MessageKey::StringShouldHaveLengthPlural,
            MessageKey::CollectionShouldHaveAtLeast,
            MessageKey::CollectionCountPlural,
        ] {
            assert!(key.default_template().starts_with("{0}"), "{key:?}");
        }
    }

    #[test]
    fn test_overlay_from_json() {
        let table = OverlayMessages::from_json(
            r#"{ "value_should_not_be_null": "{0} darf nicht null sein" }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.template(MessageKey::ValueShouldNotBeNull),
            "{0} darf nicht null sein"
        );
        assert_eq!(
            table.template(MessageKey::PostconditionFailed),
            "Postcondition '{0}' failed."
        );
    }

    #[test]
    fn test_overlay_rejects_unknown_keys() {
        assert!(OverlayMessages::from_json(r#"{ "no_such_key": "x" }"#).is_err());
    }
}
