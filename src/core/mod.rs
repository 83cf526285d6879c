//! Core logic
//!
//! Pure functions with no I/O. Everything here is safe to call from any
//! thread.

pub mod greeter;
pub mod stats;

pub use greeter::greet;
pub use stats::average;
