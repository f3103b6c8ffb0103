//! Model gateway for Compass.
//!
//! The gateway implements the `compass_core::TextModel` trait over the
//! hosted Gemini REST API. One outbound call per invocation, no retries;
//! every failure is mapped into the `ModelError` taxonomy and handled by
//! the caller's fallback path.

pub mod gemini;

pub use gemini::GeminiClient;
