//! Shared helpers for the derive.

pub mod diag;
