//! Tests for the ContractValue derive macro - successful cases.

use std::fmt;

use nebula_conditions::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, ContractValue)]
enum Priority {
    Low,
    High,
}

#[derive(ContractValue)]
enum Shape {
    Circle { radius: f64 },
    Square(f64),
}

#[derive(PartialEq, ContractValue)]
#[contract(display)]
struct Version(u32);

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Debug, ContractValue)]
#[contract(debug)]
struct Wrapper<T: fmt::Debug> {
    inner: T,
}

#[derive(ContractValue)]
struct Session;

fn main() {
    assert!(<Priority as ContractValue>::IS_ENUM);
    assert_eq!(Priority::High.render(), "High");
    assert_eq!(Shape::Circle { radius: 1.0 }.render(), "Circle");
    assert_eq!(Shape::Square(2.0).render(), "Square");

    assert!(!<Version as ContractValue>::IS_ENUM);
    assert_eq!(Version(3).render(), "v3");
    assert_eq!(Wrapper { inner: 7_u8 }.render(), "Wrapper { inner: 7 }");
    assert!(Session.render().ends_with("Session"));

    let err = requires(Priority::Low, "priority")
        .is_equal_to(Priority::High)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEnumArgument);
}
