//! Additional-context sentences
//!
//! Some failures append a second sentence describing the actual value:
//! its rendering, its length in characters, or its element count.

use crate::engine::messages::{MessageKey, MessageTable};
use crate::engine::resolve::resolve;
use crate::foundation::{ContractValue, Sequence, is_informative};

/// How [`count_elements`] obtained a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountStrategy {
    /// The collection reported its length directly.
    DirectCount,
    /// The elements were enumerated once.
    EnumerateAndCount,
}

/// Counts the elements of `collection`, or returns `None` for a null one.
///
/// Uses [`Sequence::direct_len`] when available and a single enumeration
/// otherwise. The element iterator lives only inside this call.
pub fn count_elements<C: Sequence + ?Sized>(collection: &C) -> Option<(usize, CountStrategy)> {
    if let Some(len) = collection.direct_len() {
        return Some((len, CountStrategy::DirectCount));
    }
    let elements = collection.elements()?;
    Some((elements.count(), CountStrategy::EnumerateAndCount))
}

/// "The actual value is {value}.", or `None` when the value says nothing.
pub fn value_context<T: ContractValue + ?Sized>(
    table: &dyn MessageTable,
    argument_name: &str,
    value: &T,
) -> Option<String> {
    if !is_informative(value) {
        return None;
    }
    let rendered = value.render();
    Some(resolve(
        table,
        MessageKey::ActualValueIs,
        None,
        argument_name,
        &[rendered.as_str()],
    ))
}

/// "The actual value is {n} characters long."
///
/// A null string counts as zero characters.
pub fn length_context(table: &dyn MessageTable, argument_name: &str, value: Option<&str>) -> String {
    let length = value.map_or(0, |text| text.chars().count());
    let key = MessageKey::for_count(
        length,
        MessageKey::ActualLengthSingular,
        MessageKey::ActualLengthPlural,
    );
    resolve(table, key, None, argument_name, &[length.to_string().as_str()])
}

/// "{name} currently contains {n} elements.", or the null-reference sentence.
///
/// Counts `collection` with [`count_elements`]; use [`count_sentence`] when
/// the count is already known.
pub fn count_context<C: Sequence + ?Sized>(
    table: &dyn MessageTable,
    argument_name: &str,
    collection: &C,
) -> String {
    let count = count_elements(collection).map(|(count, _)| count);
    count_sentence(table, argument_name, count)
}

/// The count sentence for an already counted collection; `None` is null.
pub fn count_sentence(table: &dyn MessageTable, argument_name: &str, count: Option<usize>) -> String {
    match count {
        None => resolve(table, MessageKey::CollectionIsNull, None, argument_name, &[]),
        Some(count) => {
            let key = MessageKey::for_count(
                count,
                MessageKey::CollectionCountSingular,
                MessageKey::CollectionCountPlural,
            );
            resolve(table, key, None, argument_name, &[count.to_string().as_str()])
        }
    }
}
