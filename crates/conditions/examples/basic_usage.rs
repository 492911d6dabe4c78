//! Basic usage example for nebula-conditions
//!
//! Run with `cargo run --example basic_usage` to see failure messages and the
//! `debug` events emitted for each failed check.

use nebula_conditions::config::Conditions;
use nebula_conditions::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, ContractValue)]
enum Transport {
    Http,
    Grpc,
}

fn register(name: &str, port: u16, transport: Transport, tags: &[&str]) -> Result<(), ConditionError> {
    requires(name, "name")
        .is_not_empty()?
        .is_shorter_or_equal(32)?
        .does_not_contain(" ")?;
    requires(port, "port").is_in_range(1024, 49151)?;
    requires(transport, "transport").is_equal_to(Transport::Http)?;
    requires(tags, "tags").is_not_empty()?.does_not_contain(&"")?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let calls = [
        ("billing", 8080, Transport::Http, &["payments"][..]),
        ("", 8080, Transport::Http, &["payments"][..]),
        ("billing", 80, Transport::Http, &["payments"][..]),
        ("billing", 8080, Transport::Grpc, &["payments"][..]),
        ("billing", 8080, Transport::Http, &[][..]),
    ];

    for (name, port, transport, tags) in calls {
        match register(name, port, transport, tags) {
            Ok(()) => println!("✓ registered {name:?} on {port}"),
            Err(e) => println!("✗ {} ({}): {e}", e.kind(), e.argument()),
        }
    }

    // Postconditions
    let published = ensures_with(0_usize, "published", "Check the outbox worker.")
        .is_greater_than(0)
        .map(Validator::into_value);
    if let Err(e) = published {
        println!("✗ {e}");
    }

    // Localized phrases from JSON
    let conditions = match Conditions::from_json_str(
        r#"{ "messages": { "string_should_not_be_empty": "{0} darf nicht leer sein" } }"#,
    ) {
        Ok(conditions) => conditions,
        Err(e) => {
            println!("✗ bad config: {e}");
            return;
        }
    };
    if let Err(e) = conditions.requires("", "name").is_not_empty() {
        println!("✗ {e}");
    }
}
