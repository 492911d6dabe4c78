//! Boolean checks

use crate::engine::violations;
use crate::foundation::ContractValue;

/// A value that is true, false, or null.
pub trait Truth {
    /// The flag, or `None` for a null reference.
    fn truth(&self) -> Option<bool>;
}

impl Truth for bool {
    fn truth(&self) -> Option<bool> {
        Some(*self)
    }
}

impl Truth for Option<bool> {
    fn truth(&self) -> Option<bool> {
        *self
    }
}

impl<T: Truth + ?Sized> Truth for &T {
    fn truth(&self) -> Option<bool> {
        (**self).truth()
    }
}

conditions! {
    /// Checks on `bool` and `Option<bool>` values. A null value is neither
    /// true nor false.
    pub trait BooleanConditions;
    impl<T> for Validator<T> where { T: ContractValue + Truth }
    {
        /// Fails unless the value is `true`.
        fn is_true / is_true_with(v; description) {
            if v.value().truth() == Some(true) {
                Ok(())
            } else {
                violations::value_should_be_true(&v, description)
            }
        }

        /// Fails unless the value is `false`.
        fn is_false / is_false_with(v; description) {
            if v.value().truth() == Some(false) {
                Ok(())
            } else {
                violations::value_should_be_false(&v, description)
            }
        }
    }
}
