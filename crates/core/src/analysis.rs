//! Typed analysis results — the shapes the rendering layer consumes.
//!
//! Each call site has its own result record deserialized from the model's
//! embedded JSON, or synthesized by the fallback layer with an identical
//! shape. Shape parity between the two paths is the core contract of this
//! layer, and it is enforced by both paths producing these same types.
//!
//! All wire-facing fields use camelCase to match the JSON the model is
//! instructed to emit.

use serde::{Deserialize, Serialize};

/// Which stage of the assessment the questions target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentPhase {
    Initial,
    DeepDive,
    Validation,
}

impl AssessmentPhase {
    /// Human-readable label used in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::DeepDive => "deep-dive",
            Self::Validation => "validation",
        }
    }

    /// What the questions of this phase should explore.
    pub fn focus(&self) -> &'static str {
        match self {
            Self::Initial => "broad skill assessment",
            Self::DeepDive => "detailed competencies",
            Self::Validation => "validation of insights",
        }
    }
}

impl std::fmt::Display for AssessmentPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The presentation style of an adaptive question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Scale,
    Scenario,
    Ranking,
}

/// A single adaptive assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveQuestion {
    pub id: String,

    pub question: String,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    /// Choices for multiple-choice / scenario / ranking questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Narrative setup for scenario questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,

    /// Answers that should trigger a deeper follow-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_triggers: Option<Vec<String>>,

    /// Which skills this question probes.
    pub skills_assessed: Vec<String>,

    /// Difficulty on a 1–5 scale.
    pub difficulty_level: u8,
}

/// The top-level wire shape for the question-generation call site.
///
/// A reply whose `questions` key is missing or not a sequence fails
/// deserialization here, which the engine treats as a normalization
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<AdaptiveQuestion>,
}

/// Priority of closing a skill gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A recommended career with fit metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub field: String,
    /// Fit score in [0, 100].
    pub match_score: u8,
    pub description: String,
    pub salary_range: String,
    pub growth_prospects: String,
    pub required_skills: Vec<String>,
    pub time_to_transition: String,
}

/// A gap between current and required skill level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub current_level: u8,
    pub required_level: u8,
    pub priority: Priority,
    pub development_time: String,
}

/// One concrete step of a learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStep {
    pub skill: String,
    pub action: String,
    pub resources: Vec<String>,
    pub timeline: String,
    pub measurable_outcome: String,
}

/// A scored personality trait with career implications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTrait {
    /// "trait" is a Rust keyword, so the field carries the wire name
    /// explicitly.
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub score: u8,
    pub description: String,
    pub career_implications: Vec<String>,
}

impl PersonalityTrait {
    pub fn new(trait_name: impl Into<String>, score: u8, description: impl Into<String>) -> Self {
        Self {
            trait_name: trait_name.into(),
            score,
            description: description.into(),
            career_implications: Vec::new(),
        }
    }
}

/// Market intelligence for one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsight {
    pub industry: String,
    pub demand_level: String,
    pub average_salary: String,
    pub growth_rate: String,
    pub key_trends: Vec<String>,
    pub emerging_roles: Vec<String>,
}

/// The comprehensive career-fit analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysis {
    pub skill_patterns: Vec<String>,
    pub career_recommendations: Vec<CareerRecommendation>,
    pub skill_gaps: Vec<SkillGap>,
    pub learning_path: Vec<LearningStep>,
    pub personality_profile: Vec<PersonalityTrait>,
    pub market_insights: Vec<MarketInsight>,
}

/// One response option inside a workplace scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOption {
    pub id: String,
    pub text: String,
    pub skills: Vec<String>,
    pub personality: Vec<String>,
}

/// A simulated workplace scenario with response options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkplaceScenario {
    pub scenario: String,
    pub context: String,
    pub challenge: String,
    pub options: Vec<ScenarioOption>,
    pub follow_up_questions: Vec<String>,
}

/// Personality insights derived from scenario responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAnalysis {
    pub personality_profile: Vec<PersonalityTrait>,
    pub work_style_preferences: Vec<String>,
    pub leadership_style: String,
    pub problem_solving_approach: String,
    pub career_recommendations: Vec<CareerRecommendation>,
    pub development_areas: Vec<String>,
}

// --- Startup roadmap ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIdea {
    pub concept: String,
    pub target_market: String,
    pub unique_value_proposition: String,
    pub problem_statement: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPlan {
    pub executive_summary: String,
    pub market_analysis: String,
    pub competitive_advantage: String,
    pub revenue_model: String,
    pub go_to_market_strategy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingStage {
    pub stage: String,
    pub amount: String,
    pub purpose: String,
    pub timeline: String,
    pub investor_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingStrategy {
    pub total_required: String,
    pub funding_stages: Vec<FundingStage>,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreTeamRole {
    pub role: String,
    pub skills: Vec<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringPhase {
    pub phase: String,
    pub positions: Vec<String>,
    pub timeline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBuilding {
    pub core_team: Vec<CoreTeamRole>,
    pub hiring_plan: Vec<HiringPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub milestone: String,
    pub timeline: String,
    pub key_deliverables: Vec<String>,
    pub success_metrics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResources {
    pub tools: Vec<String>,
    pub platforms: Vec<String>,
    pub mentorship: Vec<String>,
    pub communities: Vec<String>,
}

/// A complete venture-launch roadmap for the startup career path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupRoadmap {
    pub business_idea: BusinessIdea,
    pub business_plan: BusinessPlan,
    pub funding_strategy: FundingStrategy,
    pub team_building: TeamBuilding,
    pub milestones: Vec<Milestone>,
    pub resources: RoadmapResources,
}

/// What we know about the user, threaded into chat prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_interest: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_set_requires_sequence() {
        // `questions` present but scalar — must fail, never partially parse
        let result = serde_json::from_str::<QuestionSet>(r#"{"questions": "none"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn question_deserializes_camel_case() {
        let json = r#"{
            "id": "q_1",
            "question": "What motivates you most?",
            "type": "multiple-choice",
            "options": ["Problems", "People"],
            "skillsAssessed": ["motivation"],
            "difficultyLevel": 3
        }"#;
        let q: AdaptiveQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.question_type, QuestionType::MultipleChoice);
        assert_eq!(q.skills_assessed, vec!["motivation"]);
        assert_eq!(q.difficulty_level, 3);
        assert!(q.scenario.is_none());
    }

    #[test]
    fn question_missing_required_field_fails() {
        // no skillsAssessed
        let json = r#"{"id":"q","question":"?","type":"scale","difficultyLevel":2}"#;
        assert!(serde_json::from_str::<AdaptiveQuestion>(json).is_err());
    }

    #[test]
    fn priority_wire_format_is_lowercase() {
        let gap = SkillGap {
            skill: "Advanced Analytics".into(),
            current_level: 4,
            required_level: 7,
            priority: Priority::High,
            development_time: "4-6 months".into(),
        };
        let json = serde_json::to_string(&gap).unwrap();
        assert!(json.contains(r#""priority":"high""#));
        assert!(json.contains("developmentTime"));
    }

    #[test]
    fn phase_focus_strings() {
        assert_eq!(AssessmentPhase::Initial.focus(), "broad skill assessment");
        assert_eq!(AssessmentPhase::DeepDive.as_str(), "deep-dive");
    }

    #[test]
    fn career_analysis_roundtrip_keeps_all_sections() {
        let analysis = CareerAnalysis {
            skill_patterns: vec!["Strong analytical abilities".into()],
            career_recommendations: vec![],
            skill_gaps: vec![],
            learning_path: vec![],
            personality_profile: vec![PersonalityTrait::new("Analytical Thinking", 8, "desc")],
            market_insights: vec![],
        };
        let json = serde_json::to_string(&analysis).unwrap();
        let back: CareerAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
        assert!(json.contains("skillPatterns"));
        assert!(json.contains("marketInsights"));
    }
}
