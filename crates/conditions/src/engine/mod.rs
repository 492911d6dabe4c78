//! The message-construction and violation-classification engine
//!
//! When an assertion's predicate fails, the matching entry point in
//! `violations`:
//!
//! 1. classifies the failure ([`classify`]),
//! 2. resolves the condition sentence from a [`MessageTable`] or the caller's
//!    description ([`resolve`]),
//! 3. builds the optional second sentence ([`value_context`],
//!    [`length_context`], [`count_context`]),
//! 4. and materializes the error, unless the validator suppresses it.
//!
//! Only the table types and the pure helpers are public; the entry points are
//! reached through the assertion traits.

pub mod classify;
pub mod context;
pub mod format;
pub mod materialize;
pub mod messages;
pub mod resolve;
pub(crate) mod violations;

pub use classify::{ViolationCategory, classify};
pub use context::{
    CountStrategy, count_context, count_elements, count_sentence, length_context, value_context,
};
pub use format::{FormatError, FormatOutcome, format_template};
pub use materialize::fail;
pub use messages::{DefaultMessages, MessageKey, MessageTable, OverlayMessages};
pub use resolve::resolve;
