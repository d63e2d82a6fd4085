//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Binding extraction tests
//! - Shell splitting and quoting tests
//! - Type tests (Binding, ModifierBinding, friendly names)

#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod types_tests;
