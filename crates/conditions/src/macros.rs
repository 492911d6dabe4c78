//! Macros for implementing [`ContractValue`](crate::ContractValue) without
//! boilerplate.
//!
//! # Available Macros
//!
//! - [`contract_value!`]: implement `ContractValue` for existing types
//!
//! Prefer `#[derive(ContractValue)]` (feature `derive`) for your own types;
//! the macro also works for foreign types and without the derive feature.

// ============================================================================
// CONTRACT VALUE MACRO
// ============================================================================

/// Implements [`ContractValue`](crate::ContractValue) for one or more types.
///
/// # Variants
///
/// **Display**: render with `Display`:
/// ```rust
/// use nebula_conditions::{ContractValue, contract_value};
///
/// struct Meters(f64);
/// impl std::fmt::Display for Meters {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{} m", self.0)
///     }
/// }
///
/// contract_value!(display: Meters);
/// assert_eq!(Meters(2.5).render(), "2.5 m");
/// ```
///
/// **Debug**: render with `Debug`:
/// ```rust
/// use nebula_conditions::{ContractValue, contract_value};
///
/// #[derive(Debug)]
/// struct Point { x: i32, y: i32 }
///
/// contract_value!(debug: Point);
/// assert_eq!(Point { x: 1, y: 2 }.render(), "Point { x: 1, y: 2 }");
/// ```
///
/// **Opaque**: no text form; the type name is rendered and the value is never
/// shown as additional context:
/// ```rust
/// use nebula_conditions::{ContractValue, contract_value, foundation::is_informative};
///
/// struct Handle;
///
/// contract_value!(opaque: Handle);
/// assert!(!is_informative(&Handle));
/// ```
///
/// **Enum**: `Debug` rendering, reported as an enumeration:
/// ```rust
/// use nebula_conditions::{ContractValue, contract_value};
///
/// #[derive(Debug)]
/// enum Mode { Fast, Safe }
///
/// contract_value!(enum: Mode);
/// assert!(<Mode as ContractValue>::IS_ENUM);
/// assert_eq!(Mode::Safe.render(), "Safe");
/// ```
#[macro_export]
macro_rules! contract_value {
    // ── Display rendering ────────────────────────────────────────────────
    (display: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ContractValue for $ty {
                fn render(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };

    // ── Debug rendering ──────────────────────────────────────────────────
    (debug: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ContractValue for $ty {
                fn render(&self) -> ::std::string::String {
                    ::std::format!("{:?}", self)
                }
            }
        )+
    };

    // ── Type name only ───────────────────────────────────────────────────
    (opaque: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ContractValue for $ty {
                fn render(&self) -> ::std::string::String {
                    ::std::borrow::ToOwned::to_owned(::std::any::type_name::<Self>())
                }
            }
        )+
    };

    // ── Enumerations ─────────────────────────────────────────────────────
    (enum: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ContractValue for $ty {
                const IS_ENUM: bool = true;

                fn render(&self) -> ::std::string::String {
                    ::std::format!("{:?}", self)
                }
            }
        )+
    };
}
