//! Configuration
//!
//! [`ConditionsConfig`] holds the default argument name and per-key message
//! overrides. [`Conditions`] turns a validated config into a factory for
//! validators that share the configured message table.
//!
//! ```rust
//! use nebula_conditions::config::Conditions;
//! use nebula_conditions::prelude::*;
//!
//! let conditions = Conditions::from_json_str(
//!     r#"{
//!         "default_argument_name": "input",
//!         "messages": { "value_should_not_be_null": "{0} is required" }
//!     }"#,
//! )?;
//!
//! let err = conditions.requires_value(None::<u8>).is_not_null().unwrap_err();
//! assert_eq!(err.to_string(), "input is required.");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::{FormatError, MessageKey, MessageTable, OverlayMessages, format_template};
use crate::foundation::{DEFAULT_ARGUMENT_NAME, Role, Validator};

// Placeholder values used to check that an override template is well formed.
const PROBE_ARGS: [&str; 3] = ["{0}", "{1}", "{2}"];

// ============================================================================
// ERRORS
// ============================================================================

/// Why a configuration was rejected.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid conditions config: {0}")]
    Json(#[from] serde_json::Error),

    /// `default_argument_name` is empty or whitespace.
    #[error("default argument name must not be blank")]
    EmptyArgumentName,

    /// A message override is not a valid template.
    #[error("invalid template for message '{key:?}': {source}")]
    InvalidTemplate {
        /// The overridden key.
        key: MessageKey,
        /// What is wrong with the template.
        source: FormatError,
    },
}

// ============================================================================
// CONFIG
// ============================================================================

/// Settings shared by every validator a [`Conditions`] creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConditionsConfig {
    /// Name used by `requires_value` and `ensures_value`.
    pub default_argument_name: String,

    /// Message templates replacing the builtin English ones.
    pub messages: HashMap<MessageKey, String>,
}

impl Default for ConditionsConfig {
    fn default() -> Self {
        Self {
            default_argument_name: DEFAULT_ARGUMENT_NAME.to_owned(),
            messages: HashMap::new(),
        }
    }
}

impl ConditionsConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            default_argument_name = %config.default_argument_name,
            overrides = config.messages.len(),
            "conditions config loaded"
        );
        Ok(config)
    }

    /// Checks the argument name and every override template.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_argument_name.trim().is_empty() {
            return Err(ConfigError::EmptyArgumentName);
        }
        for (&key, template) in &self.messages {
            format_template(template, &PROBE_ARGS)
                .map_err(|source| ConfigError::InvalidTemplate { key, source })?;
        }
        Ok(())
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// Creates validators that share a configured message table.
#[derive(Clone)]
pub struct Conditions {
    default_argument_name: Cow<'static, str>,
    messages: Arc<dyn MessageTable>,
}

impl Conditions {
    /// Validates `config` and builds a factory from it.
    pub fn new(config: ConditionsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            default_argument_name: Cow::Owned(config.default_argument_name),
            messages: Arc::new(OverlayMessages::over_defaults(config.messages)),
        })
    }

    /// Parses a JSON config and builds a factory from it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Self::new(ConditionsConfig::from_json_str(json)?)
    }

    /// Uses `messages` as the message table.
    pub fn with_table(messages: Arc<dyn MessageTable>) -> Self {
        Self {
            default_argument_name: Cow::Borrowed(DEFAULT_ARGUMENT_NAME),
            messages,
        }
    }

    /// The shared message table.
    pub fn messages(&self) -> &Arc<dyn MessageTable> {
        &self.messages
    }

    /// Name used by [`requires_value`](Self::requires_value) and
    /// [`ensures_value`](Self::ensures_value).
    pub fn default_argument_name(&self) -> &str {
        &self.default_argument_name
    }

    fn validator<T>(&self, value: T, name: Cow<'static, str>, role: Role) -> Validator<T> {
        Validator::new(value, name, role).with_messages(Arc::clone(&self.messages))
    }

    /// Starts a precondition chain for the argument `name`.
    pub fn requires<T>(&self, value: T, name: impl Into<Cow<'static, str>>) -> Validator<T> {
        self.validator(value, name.into(), Role::Requires)
    }

    /// Starts a precondition chain under the default argument name.
    pub fn requires_value<T>(&self, value: T) -> Validator<T> {
        self.validator(value, self.default_argument_name.clone(), Role::Requires)
    }

    /// Starts a postcondition chain for `name`.
    pub fn ensures<T>(&self, value: T, name: impl Into<Cow<'static, str>>) -> Validator<T> {
        self.validator(value, name.into(), Role::Ensures)
    }

    /// Starts a postcondition chain under the default argument name.
    pub fn ensures_value<T>(&self, value: T) -> Validator<T> {
        self.validator(value, self.default_argument_name.clone(), Role::Ensures)
    }

    /// Starts a postcondition chain whose failures end with `message`.
    pub fn ensures_with<T>(
        &self,
        value: T,
        name: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Validator<T> {
        self.ensures(value, name).with_postcondition_message(message)
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self::with_table(Arc::new(crate::engine::DefaultMessages))
    }
}

impl fmt::Debug for Conditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conditions")
            .field("default_argument_name", &self.default_argument_name)
            .finish_non_exhaustive()
    }
}
