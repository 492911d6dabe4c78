//! Value rendering for condition messages
//!
//! Every value that flows through a [`Validator`](crate::Validator) is rendered
//! into message text through [`ContractValue`]. The trait also carries the two
//! facts the engine needs about the *declared* type: whether it is an
//! enumeration, and whether a given value is a null reference (`None`).
//!
//! # Rendering rules
//!
//! - `None` renders as [`NULL_TOKEN`].
//! - Sequences render as `{a, b, c}`.
//! - Primitives and strings render with `Display`.
//! - Types without a meaningful text form render as their full type name, which
//!   [`is_informative`] treats as "nothing worth showing".

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Text used for a null reference.
pub const NULL_TOKEN: &str = "null";

/// Delimiter placed between rendered sequence elements.
pub const SEQUENCE_DELIMITER: &str = ", ";

// ============================================================================
// CONTRACT VALUE
// ============================================================================

/// A value that can be named in a condition message.
///
/// Implemented for primitives, strings, `Option`, smart pointers and the std
/// collections. Use `#[derive(ContractValue)]` (feature `derive`) or the
/// [`contract_value!`](crate::contract_value) macro for your own types.
///
/// # Examples
///
/// ```rust
/// use nebula_conditions::ContractValue;
///
/// assert_eq!(42_i32.render(), "42");
/// assert_eq!(None::<i32>.render(), "null");
/// assert_eq!(vec![1, 2, 3].render(), "{1, 2, 3}");
/// ```
pub trait ContractValue {
    /// Whether the declared type is an enumeration.
    ///
    /// Every violation on an enum-typed value is reported as an invalid enum
    /// value, whatever the failing assertion asked for.
    const IS_ENUM: bool = false;

    /// Renders the value for display.
    fn render(&self) -> String;

    /// Returns `true` if this value is a null reference.
    fn is_null(&self) -> bool {
        false
    }

    /// Full name of the type the value's text form is compared against.
    ///
    /// Wrappers (`&T`, `Box<T>`, `Some(T)`) report the name of what they wrap.
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Renders `value` for a condition message.
pub fn render<T: ContractValue + ?Sized>(value: &T) -> String {
    value.render()
}

/// Renders a sequence of values as `{a, b, c}`.
pub fn render_sequence<'a, T, I>(items: I) -> String
where
    T: ContractValue + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::from("{");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(SEQUENCE_DELIMITER);
        }
        out.push_str(&item.render());
    }
    out.push('}');
    out
}

/// Returns `false` when showing `value` would tell the reader nothing.
///
/// That is the case for null references, and for values whose only text form
/// is their type's full name (types without a custom rendering).
pub fn is_informative<T: ContractValue + ?Sized>(value: &T) -> bool {
    !value.is_null() && value.render() != value.type_name()
}

// ============================================================================
// PRIMITIVES
// ============================================================================

macro_rules! display_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ContractValue for $ty {
                #[inline]
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_values!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl ContractValue for Cow<'_, str> {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl ContractValue for () {
    fn render(&self) -> String {
        "()".to_owned()
    }
}

// ============================================================================
// WRAPPERS
// ============================================================================

impl<T: ContractValue + ?Sized> ContractValue for &T {
    const IS_ENUM: bool = T::IS_ENUM;

    fn render(&self) -> String {
        (**self).render()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

macro_rules! pointer_values {
    ($($ptr:ident),*) => {
        $(
            impl<T: ContractValue + ?Sized> ContractValue for $ptr<T> {
                const IS_ENUM: bool = T::IS_ENUM;

                fn render(&self) -> String {
                    (**self).render()
                }

                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }
            }
        )*
    };
}

pointer_values!(Box, Rc, Arc);

// `Option<E>` is its own declared type, so it never counts as an enum.
impl<T: ContractValue> ContractValue for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => NULL_TOKEN.to_owned(),
        }
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn type_name(&self) -> &'static str {
        match self {
            Some(value) => value.type_name(),
            None => type_name::<Self>(),
        }
    }
}

// Type-erased values have no text form beyond their (erased) type.
impl ContractValue for dyn Any {
    fn render(&self) -> String {
        type_name::<Self>().to_owned()
    }
}

impl ContractValue for dyn Any + Send {
    fn render(&self) -> String {
        type_name::<Self>().to_owned()
    }
}

impl ContractValue for dyn Any + Send + Sync {
    fn render(&self) -> String {
        type_name::<Self>().to_owned()
    }
}

// ============================================================================
// SEQUENCES
// ============================================================================

impl<T: ContractValue> ContractValue for [T] {
    fn render(&self) -> String {
        render_sequence(self)
    }
}

impl<T: ContractValue, const N: usize> ContractValue for [T; N] {
    fn render(&self) -> String {
        render_sequence(self)
    }
}

macro_rules! sequence_values {
    ($($coll:ident<T $(, $extra:ident)*>),* $(,)?) => {
        $(
            impl<T: ContractValue $(, $extra)*> ContractValue for $coll<T $(, $extra)*> {
                fn render(&self) -> String {
                    render_sequence(self)
                }
            }
        )*
    };
}

sequence_values!(Vec<T>, VecDeque<T>, LinkedList<T>, BTreeSet<T>, HashSet<T, S>);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Opaque;

    impl ContractValue for Opaque {
        fn render(&self) -> String {
            type_name::<Self>().to_owned()
        }
    }

    #[test]
    fn test_render_primitives() {
        assert_eq!(render(&5), "5");
        assert_eq!(render(&1.5f64), "1.5");
        assert_eq!(render("abc"), "abc");
        assert_eq!(render(&'x'), "x");
        assert_eq!(render(&true), "true");
    }

    #[test]
    fn test_render_null() {
        assert_eq!(render(&None::<String>), "null");
        assert_eq!(render(&Some(3)), "3");
    }

    #[test]
    fn test_render_sequences() {
        assert_eq!(render(&vec![1, 2, 3]), "{1, 2, 3}");
        assert_eq!(render(&Vec::<i32>::new()), "{}");
        assert_eq!(render(&[Some(1), None]), "{1, null}");
        assert_eq!(render(&VecDeque::from(vec!["a", "b"])), "{a, b}");
    }

    #[test]
    fn test_is_informative() {
        assert!(is_informative(&5));
        assert!(is_informative(&"text"));
        assert!(!is_informative(&None::<i32>));
        assert!(!is_informative(&Opaque));
        assert!(!is_informative(&&Opaque));
        assert!(!is_informative(&Some(Opaque)));
        assert!(!is_informative(&Box::new(Opaque)));
    }

    #[test]
    fn test_wrappers_forward_enum_flag() {
        struct Flag;
        impl ContractValue for Flag {
            const IS_ENUM: bool = true;
            fn render(&self) -> String {
                "Flag".to_owned()
            }
        }

        assert!(<&Flag as ContractValue>::IS_ENUM);
        assert!(<Box<Flag> as ContractValue>::IS_ENUM);
        assert!(!<Option<Flag> as ContractValue>::IS_ENUM);
    }
}
