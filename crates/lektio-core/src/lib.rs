//! lektio-core
//!
//! Pure domain types and input validation.
//! No network or PDF dependency — this is the shared vocabulary of the
//! lektio system.

pub mod error;
pub mod models;
