//! Tests for the ContractValue derive macro - rejected attributes.

use nebula_conditions::ContractValue;

#[derive(ContractValue)]
#[contract(json)]
struct Unknown(u8);

#[derive(Debug, ContractValue)]
#[contract(display, debug)]
struct Both(u8);

fn main() {}
