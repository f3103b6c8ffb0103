//! Prompt assembly for Compass.
//!
//! Pure text construction: role instructions, serialized user context, a
//! JSON-only output directive, and a literal example of the expected shape.
//! No validation happens here — malformed context is serialized
//! best-effort — and nothing here performs I/O.

pub mod builder;
pub mod roles;
mod shapes;
pub mod sites;

pub use builder::PromptBuilder;
