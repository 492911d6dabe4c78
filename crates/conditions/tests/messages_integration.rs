//! Message tables, overrides, and JSON configuration.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use nebula_conditions::config::{Conditions, ConditionsConfig, ConfigError};
use nebula_conditions::engine::DefaultMessages;
use nebula_conditions::prelude::*;
use pretty_assertions::assert_eq;

/// A table that only knows a few German phrases.
struct German;

impl MessageTable for German {
    fn template(&self, key: MessageKey) -> Cow<'_, str> {
        match key {
            MessageKey::ValueShouldNotBeNull => Cow::Borrowed("{0} darf nicht null sein"),
            MessageKey::CollectionCountSingular => Cow::Borrowed("{0} enthält 1 Element."),
            MessageKey::CollectionCountPlural => Cow::Borrowed("{0} enthält {1} Elemente."),
            MessageKey::PostconditionFailed => Cow::Borrowed("Nachbedingung '{0}' verletzt."),
            other => DefaultMessages.template(other),
        }
    }
}

#[test]
fn custom_table_on_a_single_validator() {
    let err = requires(None::<u8>, "port")
        .with_messages(Arc::new(German))
        .is_not_null()
        .unwrap_err();

    assert_eq!(err.message(), "port darf nicht null sein.");
}

#[test]
fn custom_table_shapes_context_and_wrapper() {
    let err = ensures(vec![1], "rows")
        .with_messages(Arc::new(German))
        .is_empty()
        .unwrap_err();

    assert_eq!(
        err.message(),
        "Nachbedingung 'rows should be empty' verletzt."
    );

    let err = requires(vec![1], "rows")
        .with_messages(Arc::new(German))
        .has_length(3)
        .unwrap_err();
    assert_eq!(err.message(), "rows should contain 3 elements. rows enthält 1 Element.");
}

#[test]
fn overlay_replaces_only_named_keys() {
    let table = OverlayMessages::over_defaults(HashMap::from([(
        MessageKey::StringShouldStartWith,
        "{0} must begin with \"{1}\"".to_owned(),
    )]));
    let conditions = Conditions::with_table(Arc::new(table));

    let err = conditions.requires("http://x", "url").starts_with("https").unwrap_err();
    assert_eq!(err.message(), "url must begin with \"https\".");

    let err = conditions.requires("http://x", "url").ends_with("/").unwrap_err();
    assert_eq!(err.message(), "url should end with '/'.");
}

#[test]
fn overlay_from_json() {
    let table = OverlayMessages::from_json(r#"{ "value_should_be_true": "{0} must be enabled" }"#).unwrap();
    assert_eq!(table.len(), 1);

    let err = requires(false, "tls")
        .with_messages(Arc::new(table))
        .is_true()
        .unwrap_err();
    assert_eq!(err.message(), "tls must be enabled.");
}

#[test]
fn malformed_override_degrades_to_literal() {
    let table = OverlayMessages::over_defaults(HashMap::from([(
        MessageKey::ValueShouldBeFalse,
        "{0 should be off".to_owned(),
    )]));

    let err = requires(true, "debug")
        .with_messages(Arc::new(table))
        .is_false()
        .unwrap_err();
    assert_eq!(err.condition(), "{0 should be off");
}

#[test]
fn config_round_trip_and_factory() {
    let config = ConditionsConfig {
        default_argument_name: "input".to_owned(),
        messages: HashMap::from([(
            MessageKey::CollectionShouldNotBeEmpty,
            "{0} needs at least one entry".to_owned(),
        )]),
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ConditionsConfig::from_json_str(&json).unwrap(), config);

    let conditions = Conditions::new(config).unwrap();
    assert_eq!(conditions.default_argument_name(), "input");

    let err = conditions
        .requires_value(Vec::<String>::new())
        .is_not_empty()
        .unwrap_err();
    assert_eq!(err.message(), "input needs at least one entry.");
}

#[test]
fn config_rejects_bad_input() {
    assert!(matches!(
        Conditions::from_json_str("not json"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        Conditions::from_json_str(r#"{ "default_argument_name": "" }"#),
        Err(ConfigError::EmptyArgumentName)
    ));
    assert!(matches!(
        Conditions::from_json_str(r#"{ "messages": { "value_should_be_null": "{0} {" } }"#),
        Err(ConfigError::InvalidTemplate { .. })
    ));
}

#[test]
fn conditions_are_shareable_across_threads() {
    let conditions = Conditions::from_json_str(
        r#"{ "messages": { "value_should_be_less_than": "{0} too big (max {1})" } }"#,
    )
    .unwrap();

    let handles: Vec<_> = (0..4_u32)
        .map(|i| {
            let conditions = conditions.clone();
            std::thread::spawn(move || {
                conditions
                    .requires(10 + i, "n")
                    .is_less_than(5)
                    .unwrap_err()
                    .condition()
                    .to_owned()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "n too big (max 5)");
    }
}
