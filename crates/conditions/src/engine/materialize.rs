//! Turning a resolved failure into an error
//!
//! This is the only place a [`ConditionError`] is built and the only place
//! the suppression flag is read.

use crate::engine::classify::{ViolationCategory, classify};
use crate::engine::messages::MessageKey;
use crate::engine::resolve::resolve;
use crate::foundation::{ConditionError, ContractValue, ErrorKind, Role, Validator};

/// Whether failures on `validator` are suppressed. Logs the skipped failure.
pub(crate) fn suppressed<T>(validator: &Validator<T>) -> bool {
    if validator.is_suppressed() {
        tracing::trace!(argument = validator.argument_name(), "condition failure suppressed");
        return true;
    }
    false
}

/// Reports a failed assertion on `validator`.
///
/// Returns `Ok(())` when the validator suppresses errors. Otherwise builds the
/// error for the validator's role, with `requested` promoted to
/// [`ViolationCategory::InvalidEnumValue`] for enum-typed values.
pub fn fail<T: ContractValue>(
    validator: &Validator<T>,
    condition: String,
    additional: Option<String>,
    requested: ViolationCategory,
) -> Result<(), ConditionError> {
    if suppressed(validator) {
        return Ok(());
    }

    let argument = validator.argument_name();

    let category = classify::<T>(requested);
    let role = validator.role();
    let kind = ErrorKind::select(role, category, validator.value().is_null());

    let message = match role {
        Role::Requires => match &additional {
            Some(additional) => format!("{condition}. {additional}"),
            None => format!("{condition}."),
        },
        Role::Ensures => {
            let mut message = resolve(
                validator.messages(),
                MessageKey::PostconditionFailed,
                None,
                &condition,
                &[],
            );
            if let Some(additional) = &additional {
                message.push(' ');
                message.push_str(additional);
            }
            if let Some(suffix) = validator.postcondition_message() {
                message.push(' ');
                message.push_str(suffix);
            }
            message
        }
    };

    tracing::debug!(argument, %kind, %category, "condition failed");

    Err(ConditionError::new(kind, category, role, argument, condition, message))
}
