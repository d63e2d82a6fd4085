//! UI builder modules
//!
//! Contains modular builders for constructing the main application UI.

pub mod layout;

pub use layout::build_main_layout;
