//! Runtime type checks
//!
//! Rust types are static, so these checks only make sense for type-erased
//! values: `dyn Any` behind a reference or smart pointer, optionally wrapped in
//! `Option`. A null value is of no type.

use std::any::{Any, type_name};
use std::rc::Rc;
use std::sync::Arc;

use crate::engine::violations;
use crate::foundation::{ConditionError, ContractValue, Validator};

/// A value whose concrete type can be queried at runtime.
pub trait RuntimeType {
    /// Returns `true` if the concrete type is `U`.
    fn is_type<U: Any>(&self) -> bool;
}

impl RuntimeType for dyn Any {
    fn is_type<U: Any>(&self) -> bool {
        self.is::<U>()
    }
}

impl RuntimeType for dyn Any + Send {
    fn is_type<U: Any>(&self) -> bool {
        self.is::<U>()
    }
}

impl RuntimeType for dyn Any + Send + Sync {
    fn is_type<U: Any>(&self) -> bool {
        self.is::<U>()
    }
}

macro_rules! forward_runtime_type {
    ($($ptr:ident),*) => {
        $(
            impl<T: RuntimeType + ?Sized> RuntimeType for $ptr<T> {
                fn is_type<U: Any>(&self) -> bool {
                    (**self).is_type::<U>()
                }
            }
        )*
    };
}

forward_runtime_type!(Box, Rc, Arc);

impl<T: RuntimeType + ?Sized> RuntimeType for &T {
    fn is_type<U: Any>(&self) -> bool {
        (**self).is_type::<U>()
    }
}

impl<T: RuntimeType> RuntimeType for Option<T> {
    fn is_type<U: Any>(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_type::<U>())
    }
}

/// `type_name::<U>()` without module paths, e.g. `Option<String>`.
pub fn short_type_name<U: ?Sized>() -> String {
    let full = type_name::<U>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();

    let flush = |segment: &mut String, out: &mut String| {
        let last = segment.rsplit("::").next().unwrap_or_default();
        out.push_str(last);
        segment.clear();
    };

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            flush(&mut segment, &mut out);
            out.push(c);
        }
    }
    flush(&mut segment, &mut out);
    out
}

/// Checks on the concrete type of a type-erased value.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use nebula_conditions::prelude::*;
///
/// let shape: Box<dyn Any> = Box::new(3.5_f64);
/// assert!(requires(shape, "shape").is_of_type::<f64>().is_ok());
///
/// let shape: Box<dyn Any> = Box::new("circle");
/// let err = requires(shape, "shape").is_of_type::<f64>().unwrap_err();
/// assert_eq!(err.to_string(), "shape should be of type f64.");
/// ```
pub trait TypeConditions: Sized {
    /// Fails unless the concrete type is `U`.
    fn is_of_type<U: Any>(self) -> Result<Self, ConditionError>;

    /// [`is_of_type`](Self::is_of_type) with a caller description.
    fn is_of_type_with<U: Any>(self, description: &str) -> Result<Self, ConditionError>;

    /// Fails if the concrete type is `U`.
    fn is_not_of_type<U: Any>(self) -> Result<Self, ConditionError>;

    /// [`is_not_of_type`](Self::is_not_of_type) with a caller description.
    fn is_not_of_type_with<U: Any>(self, description: &str) -> Result<Self, ConditionError>;
}

impl<T: ContractValue + RuntimeType> TypeConditions for Validator<T> {
    fn is_of_type<U: Any>(self) -> Result<Self, ConditionError> {
        of_type::<T, U>(self, None)
    }

    fn is_of_type_with<U: Any>(self, description: &str) -> Result<Self, ConditionError> {
        of_type::<T, U>(self, Some(description))
    }

    fn is_not_of_type<U: Any>(self) -> Result<Self, ConditionError> {
        not_of_type::<T, U>(self, None)
    }

    fn is_not_of_type_with<U: Any>(self, description: &str) -> Result<Self, ConditionError> {
        not_of_type::<T, U>(self, Some(description))
    }
}

fn of_type<T: ContractValue + RuntimeType, U: Any>(
    validator: Validator<T>,
    description: Option<&str>,
) -> Result<Validator<T>, ConditionError> {
    if !validator.value().is_type::<U>() {
        violations::value_should_be_of_type(&validator, &short_type_name::<U>(), description)?;
    }
    Ok(validator)
}

fn not_of_type<T: ContractValue + RuntimeType, U: Any>(
    validator: Validator<T>,
    description: Option<&str>,
) -> Result<Validator<T>, ConditionError> {
    if validator.value().is_type::<U>() {
        violations::value_should_not_be_of_type(&validator, &short_type_name::<U>(), description)?;
    }
    Ok(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, requires};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<Option<String>>(), "Option<String>");
        assert_eq!(short_type_name::<u8>(), "u8");
        assert_eq!(short_type_name::<Vec<(i32, String)>>(), "Vec<(i32, String)>");
    }

    #[test]
    fn test_is_of_type() {
        let value: Box<dyn Any> = Box::new(5_u32);
        assert!(requires(value, "v").is_of_type::<u32>().is_ok());

        let value: Box<dyn Any> = Box::new(5_u32);
        let err = requires(value, "v").is_of_type::<String>().unwrap_err();
        assert_eq!(err.message(), "v should be of type String.");
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn test_is_not_of_type() {
        let value: Arc<dyn Any + Send + Sync> = Arc::new("text");
        let err = requires(value, "v").is_not_of_type::<&str>().unwrap_err();
        assert_eq!(err.message(), "v should not be of type &str.");
    }

    #[test]
    fn test_null_is_of_no_type() {
        let err = requires(None::<Box<dyn Any>>, "v")
            .is_of_type::<u32>()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentNull);
        assert!(requires(None::<Box<dyn Any>>, "v").is_not_of_type::<u32>().is_ok());
    }
}
