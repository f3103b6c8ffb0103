//! # Compass Core
//!
//! Domain types, traits, and error definitions for the Compass
//! career-guidance engine. This crate has **zero framework dependencies** —
//! it defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The model backend is defined as a trait here; the Gemini implementation
//! lives in `compass-gateway`. This enables:
//! - Testing the engine with mock/stub models
//! - Swapping the hosted model via configuration
//! - Clean dependency graph (all crates depend inward on core)

pub mod analysis;
pub mod context;
pub mod error;
pub mod model;

// Re-export key types at crate root for ergonomics
pub use analysis::{
    AdaptiveQuestion, AssessmentPhase, CareerAnalysis, CareerRecommendation, LearningStep,
    MarketInsight, PersonalityTrait, Priority, QuestionSet, QuestionType, ScenarioAnalysis,
    ScenarioOption, SkillGap, StartupRoadmap, UserContext, WorkplaceScenario,
};
pub use context::{ConversationContext, ContextLine, Speaker};
pub use error::{Error, ModelError, NormalizeError, Result};
pub use model::{GenerationConfig, TextModel};
