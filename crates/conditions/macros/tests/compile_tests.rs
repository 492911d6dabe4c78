//! Compile-time tests for nebula-conditions-macros.

#[test]
fn test_contract_value_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/contract_value_pass.rs");
}

#[test]
fn test_contract_value_derive_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/contract_value_fail.rs");
}
