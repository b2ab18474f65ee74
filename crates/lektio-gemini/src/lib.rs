//! lektio-gemini
//!
//! Gemini `generateContent` invocation and lesson-plan prompt construction.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::{DEFAULT_MODEL, GeminiClient};
pub use config::GenerationConfig;
pub use error::GeminiError;
