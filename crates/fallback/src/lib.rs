//! Deterministic fallback data for every AI-backed call site.
//!
//! When the model is unreachable or its output fails to normalize, these
//! builders synthesize a structurally valid result without any network
//! access. Superficial fields are personalized from the caller's input
//! (skill and field names); deeper content is generic and templated.
//!
//! Everything here is a pure function: no randomness, no clocks, no I/O —
//! identical inputs always return identical output.

pub mod analysis;
pub mod questions;
pub mod roadmap;
pub mod scenario;

pub use analysis::fallback_analysis;
pub use questions::fallback_questions;
pub use roadmap::fallback_roadmap;
pub use scenario::{fallback_scenario, fallback_scenario_analysis};
