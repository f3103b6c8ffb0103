//! The CareerAdvisor facade — every AI-backed operation the UI layer
//! consumes.
//!
//! Each structured operation runs one model round trip and degrades to the
//! deterministic fallback on any failure, so the caller always receives a
//! shape-complete result. Chat is the only call site with visible
//! degradation: its failure text is a human-readable diagnostic.
//!
//! The conversation context is owned by the caller's session and passed
//! `&mut` into each call; a completed exchange (live or fallback) is
//! appended before returning.

use compass_core::error::{ModelError, NormalizeError};
use compass_core::{
    AdaptiveQuestion, AssessmentPhase, CareerAnalysis, ConversationContext, QuestionSet,
    ScenarioAnalysis, StartupRoadmap, TextModel, UserContext, WorkplaceScenario,
};
use compass_fallback as fallback;
use compass_prompts::sites;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::normalize;

/// Why a structured round trip fell back. Internal only; callers never see
/// it.
#[derive(Debug)]
enum RoundTripError {
    Model(ModelError),
    Normalize(NormalizeError),
}

impl std::fmt::Display for RoundTripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model(e) => write!(f, "{e}"),
            Self::Normalize(e) => write!(f, "{e}"),
        }
    }
}

/// The engine facade. Cheap to clone; holds only the model handle.
#[derive(Clone)]
pub struct CareerAdvisor {
    model: Arc<dyn TextModel>,
}

impl CareerAdvisor {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// One structured round trip: send the prompt, then extract and parse
    /// the typed reply.
    async fn round_trip<T: serde::de::DeserializeOwned>(
        &self,
        site: &str,
        prompt: &str,
    ) -> Result<T, RoundTripError> {
        debug!(site, backend = self.model.name(), "Sending model request");
        let reply = self
            .model
            .generate(prompt)
            .await
            .map_err(RoundTripError::Model)?;
        normalize::parse_reply(&reply).map_err(RoundTripError::Normalize)
    }

    /// Generate adaptive assessment questions.
    ///
    /// A reply whose `questions` key is missing or not a sequence counts
    /// as a normalization failure and engages the fallback set.
    pub async fn generate_adaptive_questions(
        &self,
        skills: &[String],
        answered_count: usize,
        phase: AssessmentPhase,
        context: &mut ConversationContext,
    ) -> Vec<AdaptiveQuestion> {
        let prompt = sites::adaptive_questions(skills, answered_count, phase, context);
        let questions = match self.round_trip::<QuestionSet>("questions", &prompt).await {
            Ok(set) => {
                info!(count = set.questions.len(), %phase, "Generated questions from model");
                set.questions
            }
            Err(e) => {
                warn!(error = %e, %phase, "Question generation failed, using fallback");
                fallback::fallback_questions(skills, phase)
            }
        };
        self.record(
            context,
            format!("Generated {} questions for {phase} phase", questions.len()),
            &questions,
        );
        questions
    }

    /// Comprehensive career-fit analysis from assessment responses.
    pub async fn analyze_career_fit<R: Serialize, P: Serialize>(
        &self,
        skills: &[String],
        question_responses: &R,
        user_profile: &P,
        context: &mut ConversationContext,
    ) -> CareerAnalysis {
        let prompt = sites::career_analysis(skills, question_responses, user_profile, context);
        let analysis = match self.round_trip::<CareerAnalysis>("analysis", &prompt).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "Career analysis failed, using fallback");
                fallback::fallback_analysis(skills)
            }
        };
        self.record(context, "Requested career-fit analysis", &analysis);
        analysis
    }

    /// Generate a workplace scenario for the user's field of interest.
    pub async fn generate_workplace_scenario<B: Serialize>(
        &self,
        field_of_interest: &str,
        user_background: &B,
        previous_scenarios: &[String],
        context: &mut ConversationContext,
    ) -> WorkplaceScenario {
        let prompt = sites::workplace_scenario(
            field_of_interest,
            user_background,
            previous_scenarios,
            context,
        );
        let scenario = match self.round_trip::<WorkplaceScenario>("scenario", &prompt).await {
            Ok(scenario) => scenario,
            Err(e) => {
                warn!(error = %e, field = field_of_interest, "Scenario generation failed, using fallback");
                fallback::fallback_scenario(field_of_interest)
            }
        };
        self.record(
            context,
            format!("Requested workplace scenario for {field_of_interest}"),
            &scenario,
        );
        scenario
    }

    /// Analyze scenario responses for personality insights.
    pub async fn analyze_scenario_responses<R: Serialize>(
        &self,
        field_of_interest: &str,
        scenario_responses: &R,
        context: &mut ConversationContext,
    ) -> ScenarioAnalysis {
        let prompt = sites::scenario_analysis(field_of_interest, scenario_responses, context);
        let analysis = match self
            .round_trip::<ScenarioAnalysis>("scenario-analysis", &prompt)
            .await
        {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "Scenario analysis failed, using fallback");
                fallback::fallback_scenario_analysis(field_of_interest)
            }
        };
        self.record(context, "Requested scenario-response analysis", &analysis);
        analysis
    }

    /// Generate a personalized startup roadmap.
    pub async fn generate_startup_roadmap(
        &self,
        top_skills: &[String],
        niche: &str,
        context: &mut ConversationContext,
    ) -> StartupRoadmap {
        let prompt = sites::startup_roadmap(top_skills, niche, context);
        let roadmap = match self.round_trip::<StartupRoadmap>("roadmap", &prompt).await {
            Ok(roadmap) => roadmap,
            Err(e) => {
                warn!(error = %e, niche, "Roadmap generation failed, using fallback");
                fallback::fallback_roadmap(top_skills, niche)
            }
        };
        self.record(
            context,
            format!("Requested startup roadmap for {niche}"),
            &roadmap,
        );
        roadmap
    }

    /// Free-form chat reply. On failure the returned text is a diagnostic
    /// chosen by error class rather than templated content.
    pub async fn chat(
        &self,
        message: &str,
        user: &UserContext,
        context: &mut ConversationContext,
    ) -> String {
        let prompt = sites::chat(message, user, context);
        let reply = match self.model.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Chat reply failed, substituting diagnostic");
                chat_diagnostic(&e).to_string()
            }
        };
        context.append(message, reply.clone());
        reply
    }

    /// Append one completed exchange, with the AI side recorded as the
    /// serialized result.
    fn record<T: Serialize>(
        &self,
        context: &mut ConversationContext,
        user_text: impl Into<String>,
        result: &T,
    ) {
        let ai_text = serde_json::to_string(result).unwrap_or_else(|_| "{}".into());
        context.append(user_text, ai_text);
    }
}

/// Human-readable failure text for the chat call site.
fn chat_diagnostic(error: &ModelError) -> &'static str {
    match error {
        ModelError::MissingApiKey => {
            "I'm having trouble connecting to the AI service. Please check your API \
             configuration: set GEMINI_API_KEY and try again. For now, here's some general \
             advice: focus on building your core skills, network actively in your field, \
             and seek mentorship opportunities."
        }
        ModelError::AuthFailed(_) => {
            "Invalid API key. Please verify your GEMINI_API_KEY is correct and hasn't expired."
        }
        ModelError::QuotaExceeded => {
            "API quota exceeded. You've reached the rate limit. Please try again in a few \
             moments, or check your API quota."
        }
        ModelError::EmptyResponse => {
            "I'm having trouble generating a response right now. Could you please rephrase \
             your question?"
        }
        ModelError::Network(_) | ModelError::Api { .. } => {
            "I apologize, but I'm having technical difficulties right now. Please try again \
             in a moment."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// A mock model that always returns the same reply.
    struct CannedModel {
        reply: String,
        call_count: Mutex<usize>,
    }

    impl CannedModel {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.into(),
                call_count: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl TextModel for CannedModel {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
            *self.call_count.lock().unwrap() += 1;
            Ok(self.reply.clone())
        }
    }

    /// A mock model that always fails with a fixed error.
    struct FailingModel {
        error: ModelError,
    }

    impl FailingModel {
        fn new(error: ModelError) -> Self {
            Self { error }
        }

        fn unavailable() -> Self {
            Self::new(ModelError::Network("connection refused".into()))
        }
    }

    #[async_trait]
    impl TextModel for FailingModel {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
            Err(self.error.clone())
        }
    }

    fn advisor(model: impl TextModel + 'static) -> CareerAdvisor {
        CareerAdvisor::new(Arc::new(model))
    }

    #[tokio::test]
    async fn unavailable_model_yields_fallback_questions() {
        let advisor = advisor(FailingModel::unavailable());
        let mut ctx = ConversationContext::new();
        let questions = advisor
            .generate_adaptive_questions(
                &["Python".into()],
                0,
                AssessmentPhase::Initial,
                &mut ctx,
            )
            .await;

        assert_eq!(questions.len(), 3);
        for q in &questions {
            assert!(!q.question.is_empty());
            assert!((1..=5).contains(&q.difficulty_level));
        }
        assert!(questions[0].skills_assessed.contains(&"Python".to_string()));
        // The fallback exchange was recorded
        assert_eq!(ctx.len(), 2);
    }

    #[tokio::test]
    async fn model_reply_with_fenced_json_is_used() {
        let reply = "```json\n{\"questions\":[{\"id\":\"q_1\",\"question\":\"Why Rust?\",\"type\":\"scale\",\"skillsAssessed\":[\"curiosity\"],\"difficultyLevel\":1}]}\n```";
        let model = CannedModel::new(reply);
        let advisor = CareerAdvisor::new(Arc::new(model));
        let mut ctx = ConversationContext::new();
        let questions = advisor
            .generate_adaptive_questions(&[], 0, AssessmentPhase::Initial, &mut ctx)
            .await;

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Why Rust?");
    }

    #[tokio::test]
    async fn prose_reply_without_json_falls_back() {
        let advisor = advisor(CannedModel::new("I'd rather chat about the weather."));
        let mut ctx = ConversationContext::new();
        let questions = advisor
            .generate_adaptive_questions(&[], 0, AssessmentPhase::DeepDive, &mut ctx)
            .await;
        // Deep-dive fallback has 5 questions
        assert_eq!(questions.len(), 5);
    }

    #[tokio::test]
    async fn analysis_shape_parity_between_paths() {
        let skills = vec!["Design".to_string()];
        let responses = serde_json::json!([]);
        let profile = serde_json::json!({});

        let live_reply = serde_json::to_string(&fallback::fallback_analysis(&skills)).unwrap();
        let live = advisor(CannedModel::new(&live_reply));
        let dead = advisor(FailingModel::unavailable());

        let mut ctx_a = ConversationContext::new();
        let mut ctx_b = ConversationContext::new();
        let a = live
            .analyze_career_fit(&skills, &responses, &profile, &mut ctx_a)
            .await;
        let b = dead
            .analyze_career_fit(&skills, &responses, &profile, &mut ctx_b)
            .await;

        // Same type both ways; serialized key sets must match exactly
        let keys = |v: &CareerAnalysis| {
            let json = serde_json::to_value(v).unwrap();
            json.as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(&a), keys(&b));
        assert_eq!(b.career_recommendations.len(), 1);
        assert!(b.career_recommendations[0].match_score <= 100);
        assert!(!b.career_recommendations[0].required_skills.is_empty());
    }

    #[tokio::test]
    async fn scenario_fallback_engages_on_failure() {
        let advisor = advisor(FailingModel::new(ModelError::EmptyResponse));
        let mut ctx = ConversationContext::new();
        let scenario = advisor
            .generate_workplace_scenario("Healthcare", &serde_json::json!({}), &[], &mut ctx)
            .await;
        assert_eq!(scenario.options.len(), 4);
        assert!(scenario.scenario.contains("Healthcare"));
    }

    #[tokio::test]
    async fn roadmap_fallback_engages_on_failure() {
        let advisor = advisor(FailingModel::unavailable());
        let mut ctx = ConversationContext::new();
        let roadmap = advisor
            .generate_startup_roadmap(&["Design".into()], "retail", &mut ctx)
            .await;
        assert!(roadmap.business_idea.concept.contains("retail"));
    }

    #[tokio::test]
    async fn chat_success_appends_exchange() {
        let model = CannedModel::new("Focus on fundamentals first.");
        let advisor = CareerAdvisor::new(Arc::new(model));
        let mut ctx = ConversationContext::new();
        let reply = advisor
            .chat("Where do I start?", &UserContext::default(), &mut ctx)
            .await;
        assert_eq!(reply, "Focus on fundamentals first.");
        assert_eq!(ctx.len(), 2);
        assert!(ctx.render().contains("User: Where do I start?"));
    }

    #[tokio::test]
    async fn chat_quota_error_yields_quota_diagnostic() {
        let advisor = advisor(FailingModel::new(ModelError::QuotaExceeded));
        let mut ctx = ConversationContext::new();
        let reply = advisor
            .chat("hello", &UserContext::default(), &mut ctx)
            .await;
        assert!(reply.contains("quota"));
    }

    #[tokio::test]
    async fn chat_missing_key_mentions_configuration() {
        let advisor = advisor(FailingModel::new(ModelError::MissingApiKey));
        let mut ctx = ConversationContext::new();
        let reply = advisor
            .chat("hello", &UserContext::default(), &mut ctx)
            .await;
        assert!(reply.contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn chat_auth_error_mentions_key_validity() {
        let advisor = advisor(FailingModel::new(ModelError::AuthFailed("bad key".into())));
        let mut ctx = ConversationContext::new();
        let reply = advisor
            .chat("hello", &UserContext::default(), &mut ctx)
            .await;
        assert!(reply.contains("Invalid API key"));
    }

    #[tokio::test]
    async fn one_outbound_call_per_operation() {
        let model = Arc::new(CannedModel::new("no json here"));
        let advisor = CareerAdvisor::new(model.clone());
        let mut ctx = ConversationContext::new();
        advisor
            .generate_adaptive_questions(&[], 0, AssessmentPhase::Initial, &mut ctx)
            .await;
        // Normalization failed, but no retry was attempted
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn context_threads_into_next_prompt() {
        let model = CannedModel::new("Learn SQL next.");
        let advisor = CareerAdvisor::new(Arc::new(model));
        let mut ctx = ConversationContext::new();
        advisor
            .chat("What should I learn?", &UserContext::default(), &mut ctx)
            .await;

        let prompt = compass_prompts::sites::chat("And after that?", &UserContext::default(), &ctx);
        assert!(prompt.contains("AI: Learn SQL next."));
    }
}
