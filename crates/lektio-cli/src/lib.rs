//! lektio-cli library root.
//!
//! Re-exports the config module so integration tests can exercise it
//! directly without going through the binary.

pub mod config;
