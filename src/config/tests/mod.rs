//! Config module tests
//!
//! - Line reading and error mapping
//! - `$mod` resolution from the main config
//! - Path defaults and tilde expansion

#[cfg(test)]
mod reader_tests;
