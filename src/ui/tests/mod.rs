//! UI module tests
//!
//! Only display-independent logic is tested here; widgets need a
//! running GTK display.
