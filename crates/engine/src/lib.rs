//! Orchestration engine for Compass.
//!
//! Control flow per request:
//! prompt → gateway → normalize → (success: typed result) | (failure:
//! deterministic fallback) → caller. The conversation context is read
//! before and written after each round trip.
//!
//! No error ever reaches the caller of a structured operation: the
//! terminal state of every request is a shape-complete result.

pub mod normalize;
pub mod service;

pub use service::CareerAdvisor;
