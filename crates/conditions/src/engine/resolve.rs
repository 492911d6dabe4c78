//! Condition sentence resolution

use crate::engine::format::FormatOutcome;
use crate::engine::messages::{MessageKey, MessageTable};

/// Produces the condition sentence for a failure.
///
/// A caller `description` always wins: it is formatted with the argument name
/// as `{0}` and used verbatim when malformed. Without one, the template for
/// `key` is formatted with the argument name followed by `args`.
pub fn resolve(
    table: &dyn MessageTable,
    key: MessageKey,
    description: Option<&str>,
    argument_name: &str,
    args: &[&str],
) -> String {
    if let Some(description) = description {
        return FormatOutcome::of(description, &[argument_name]).into_string();
    }

    let template = table.template(key);
    let mut positional = Vec::with_capacity(args.len() + 1);
    positional.push(argument_name);
    positional.extend_from_slice(args);

    FormatOutcome::of(&template, &positional).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::messages::{DefaultMessages, OverlayMessages};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_template_gets_name_and_args() {
        let text = resolve(
            &DefaultMessages,
            MessageKey::ValueShouldBeBetween,
            None,
            "x",
            &["1", "10"],
        );
        assert_eq!(text, "x should be between 1 and 10");
    }

    #[test]
    fn test_description_wins() {
        let text = resolve(
            &DefaultMessages,
            MessageKey::ValueShouldNotBeNull,
            Some("custom {0}"),
            "value",
            &[],
        );
        assert_eq!(text, "custom value");
    }

    #[test]
    fn test_description_ignores_bound_args() {
        let text = resolve(
            &DefaultMessages,
            MessageKey::ValueShouldBeLessThan,
            Some("{0} must stay small"),
            "n",
            &["3"],
        );
        assert_eq!(text, "n must stay small");
    }

    #[test]
    fn test_malformed_description_is_literal() {
        let text = resolve(
            &DefaultMessages,
            MessageKey::ValueShouldNotBeNull,
            Some("broken {1"),
            "value",
            &[],
        );
        assert_eq!(text, "broken {1");
    }

    #[test]
    fn test_overlay_template() {
        let table = OverlayMessages::over_defaults(HashMap::from([(
            MessageKey::ValueShouldBeTrue,
            "{0} muss wahr sein".to_owned(),
        )]));
        let text = resolve(&table, MessageKey::ValueShouldBeTrue, None, "flag", &[]);
        assert_eq!(text, "flag muss wahr sein");
    }
}
