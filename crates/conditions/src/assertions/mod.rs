//! Assertion traits
//!
//! Each trait adds one family of fluent checks to [`Validator`](crate::Validator).
//! Every check consumes the validator and returns it on success; every check
//! has a `*_with` twin that takes a caller description in which `{0}` stands
//! for the argument name.
//!
//! | Trait | Applies to |
//! |---|---|
//! | [`NullConditions`] | any [`ContractValue`](crate::ContractValue) |
//! | [`EqualityConditions`] | `PartialEq` values |
//! | [`ComparisonConditions`] | `PartialOrd` values |
//! | [`BooleanConditions`] | `bool`, `Option<bool>` |
//! | [`PredicateConditions`] | any value |
//! | [`TypeConditions`] | `dyn Any` values |
//! | [`StringConditions`] | [`Text`](crate::Text) values |
//! | [`CollectionConditions`] | [`Sequence`](crate::Sequence) values |

// ============================================================================
// CONDITIONS MACRO
// ============================================================================

// Declares an assertion trait and its blanket impl on `Validator<$t>`.
//
// Each check is written once as a body evaluating to
// `Result<(), ConditionError>`; the macro emits the plain method (no
// description) and the `_with` method (caller description) around it.
macro_rules! conditions {
    (
        $(#[$meta:meta])*
        pub trait $name:ident $(<$tp:ident>)?;
        impl<$($gen:ident),+> for Validator<$t:ident> where { $($bounds:tt)* }
        {
            $(
                $(#[$fmeta:meta])*
                fn $method:ident / $with:ident ($self_:ident $(, $arg:ident: $aty:ty)*; $desc:ident)
                $body:block
            )*
        }
    ) => {
        $(#[$meta])*
        pub trait $name $(<$tp>)?: Sized {
            $(
                $(#[$fmeta])*
                fn $method(self $(, $arg: $aty)*) -> Result<Self, $crate::ConditionError>;

                #[doc = concat!(
                    "[`", stringify!($method), "`](Self::", stringify!($method),
                    ") with a caller description; `{0}` is the argument name."
                )]
                fn $with(self $(, $arg: $aty)*, description: &str)
                    -> Result<Self, $crate::ConditionError>;
            )*
        }

        impl<$($gen),+> $name $(<$tp>)? for $crate::Validator<$t>
        where
            $($bounds)*
        {
            $(
                #[inline]
                fn $method(self $(, $arg: $aty)*) -> Result<Self, $crate::ConditionError> {
                    let $self_ = self;
                    let $desc: Option<&str> = None;
                    ($body)?;
                    Ok($self_)
                }

                #[inline]
                fn $with(self $(, $arg: $aty)*, description: &str)
                    -> Result<Self, $crate::ConditionError>
                {
                    let $self_ = self;
                    let $desc: Option<&str> = Some(description);
                    ($body)?;
                    Ok($self_)
                }
            )*
        }
    };
}

pub mod boolean;
pub mod collection;
pub mod comparison;
pub mod equality;
pub mod nullable;
pub mod predicate;
pub mod string;
pub mod types;

pub use boolean::{BooleanConditions, Truth};
pub use collection::CollectionConditions;
pub use comparison::ComparisonConditions;
pub use equality::EqualityConditions;
pub use nullable::NullConditions;
pub use predicate::PredicateConditions;
pub use string::StringConditions;
pub use types::{RuntimeType, TypeConditions};
