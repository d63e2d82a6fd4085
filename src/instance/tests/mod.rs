//! Instance lock tests
//!
//! - Exclusive acquisition
//! - Marker contents
//! - Cleanup on drop, including an already-removed marker
//! - Cleanup from the panic hook, scoped to the owning guard
