//! One prompt function per call site.
//!
//! Each function assembles, in order: role instructions, the JSON-only
//! directive (structured sites only), the caller's context fields, prior
//! conversation, the task description, and the literal example shape.

use crate::builder::PromptBuilder;
use crate::{roles, shapes};
use compass_core::{AssessmentPhase, ConversationContext, UserContext};
use serde::Serialize;

/// Skill used to personalize examples when the caller selected none.
const GENERIC_SKILL: &str = "problem-solving";

/// Prompt for generating adaptive assessment questions.
pub fn adaptive_questions(
    skills: &[String],
    answered_count: usize,
    phase: AssessmentPhase,
    context: &ConversationContext,
) -> String {
    let first_skill = skills.first().map(String::as_str).unwrap_or(GENERIC_SKILL);
    PromptBuilder::structured(roles::QUESTION_GENERATOR)
        .conversation(context)
        .context_list("Selected Skills", skills)
        .context_line("Previous Answers Count", &answered_count.to_string())
        .context_line("Assessment Phase", phase.as_str())
        .task(&format!(
            "Generate 3 adaptive questions that:\n\
             1. Build on previous responses\n\
             2. Explore {}\n\
             3. Use varied question types (scenarios, rankings, scales)\n\
             4. Adapt difficulty based on user engagement",
            phase.focus()
        ))
        .example_shape(&shapes::questions(first_skill))
        .build()
}

/// Prompt for the comprehensive career-fit analysis.
pub fn career_analysis<R: Serialize, P: Serialize>(
    skills: &[String],
    question_responses: &R,
    user_profile: &P,
    context: &ConversationContext,
) -> String {
    PromptBuilder::structured(roles::CAREER_COUNSELOR)
        .conversation(context)
        .context_list("Selected Skills", skills)
        .context_json("Assessment Responses", question_responses)
        .context_json("Additional Info", user_profile)
        .task("Perform comprehensive career analysis.")
        .example_shape(shapes::CAREER_ANALYSIS)
        .build()
}

/// Prompt for generating a workplace scenario in the user's field.
pub fn workplace_scenario<B: Serialize>(
    field_of_interest: &str,
    user_background: &B,
    previous_scenarios: &[String],
    context: &ConversationContext,
) -> String {
    PromptBuilder::structured(roles::MARKET_INTELLIGENCE)
        .conversation(context)
        .context_line("Field of Interest", field_of_interest)
        .context_json("User Background", user_background)
        .context_list("Previous Scenarios", previous_scenarios)
        .task(&format!(
            "Generate a realistic workplace scenario for {field_of_interest} that:\n\
             1. Reflects current industry challenges\n\
             2. Reveals problem-solving approach\n\
             3. Tests leadership and communication skills\n\
             4. Includes 4 response options with different skill implications"
        ))
        .example_shape(&shapes::scenario(field_of_interest))
        .build()
}

/// Prompt for analyzing the user's scenario responses.
pub fn scenario_analysis<R: Serialize>(
    field_of_interest: &str,
    scenario_responses: &R,
    context: &ConversationContext,
) -> String {
    PromptBuilder::structured(roles::PERSONAL_COACH)
        .conversation(context)
        .context_line("Field", field_of_interest)
        .context_json("Scenario Responses", scenario_responses)
        .task("Analyze the user's decision patterns and provide comprehensive personality analysis.")
        .example_shape(&shapes::scenario_analysis(field_of_interest))
        .build()
}

/// Prompt for generating a personalized startup roadmap.
pub fn startup_roadmap(
    top_skills: &[String],
    niche: &str,
    context: &ConversationContext,
) -> String {
    PromptBuilder::structured(roles::MARKET_INTELLIGENCE)
        .conversation(context)
        .context_list("Top Skills", top_skills)
        .context_line("Startup Niche", niche)
        .task(&format!(
            "Create a complete, personalized startup roadmap for launching a venture \
             in {niche}, grounded in the user's strongest skills. Cover the business \
             idea, business plan, funding strategy, team building, milestones, and \
             recommended resources."
        ))
        .example_shape(&shapes::roadmap(niche))
        .build()
}

/// Prompt for a free-form chat reply. The one call site that expects prose
/// rather than JSON.
pub fn chat(message: &str, user: &UserContext, context: &ConversationContext) -> String {
    let mut builder = PromptBuilder::new(roles::CHAT_COUNSELOR);
    let mut about = Vec::new();
    if let Some(field) = &user.field_of_interest {
        about.push(format!("User is interested in: {field}"));
    }
    if !user.skills.is_empty() {
        about.push(format!("User's top skills: {}", user.skills.join(", ")));
    }
    if !user.interests.is_empty() {
        about.push(format!("User's interests: {}", user.interests.join(", ")));
    }
    if let Some(name) = &user.name {
        about.push(format!("User's name: {name}"));
    }
    if !about.is_empty() {
        builder = builder.task(&format!("Context about the user:\n{}", about.join("\n")));
    }
    builder
        .conversation(context)
        .context_line("User question", message)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_prompt_carries_directive_and_skills() {
        let ctx = ConversationContext::new();
        let prompt = adaptive_questions(
            &["communication".into(), "leadership".into()],
            0,
            AssessmentPhase::Initial,
            &ctx,
        );
        assert!(prompt.contains("Respond ONLY with valid JSON"));
        assert!(prompt.contains("Selected Skills: communication, leadership"));
        assert!(prompt.contains("Assessment Phase: initial"));
        assert!(prompt.contains("broad skill assessment"));
        assert!(prompt.contains(r#""skillsAssessed": ["communication"]"#));
    }

    #[test]
    fn questions_prompt_without_skills_uses_generic_token() {
        let ctx = ConversationContext::new();
        let prompt = adaptive_questions(&[], 0, AssessmentPhase::Validation, &ctx);
        assert!(prompt.contains(GENERIC_SKILL));
    }

    #[test]
    fn analysis_prompt_serializes_structured_context() {
        let ctx = ConversationContext::new();
        let responses = serde_json::json!([{"questionId": "q_1", "answer": "A"}]);
        let profile = serde_json::json!({"yearsExperience": 4});
        let prompt = career_analysis(&["Design".into()], &responses, &profile, &ctx);
        assert!(prompt.contains(r#"Assessment Responses: [{"questionId":"q_1","answer":"A"}]"#));
        assert!(prompt.contains(r#"Additional Info: {"yearsExperience":4}"#));
        assert!(prompt.contains("careerRecommendations"));
    }

    #[test]
    fn scenario_prompt_embeds_field_everywhere() {
        let ctx = ConversationContext::new();
        let prompt =
            workplace_scenario("Healthcare", &serde_json::json!({}), &[], &ctx);
        assert!(prompt.contains("Field of Interest: Healthcare"));
        assert!(prompt.contains("workplace scenario for Healthcare"));
        assert!(prompt.contains("Healthcare professional"));
    }

    #[test]
    fn chat_prompt_includes_history_and_user_context() {
        let mut ctx = ConversationContext::new();
        ctx.append("Should I learn Rust?", "Yes, start with the book.");
        let user = UserContext {
            name: Some("Sam".into()),
            field_of_interest: Some("Systems programming".into()),
            skills: vec!["C++".into()],
            interests: vec![],
        };
        let prompt = chat("What next?", &user, &ctx);
        assert!(prompt.contains("User's name: Sam"));
        assert!(prompt.contains("User is interested in: Systems programming"));
        assert!(prompt.contains("User: Should I learn Rust?"));
        assert!(prompt.contains("User question: What next?"));
        // Chat expects prose, not JSON
        assert!(!prompt.contains("Respond ONLY with valid JSON"));
    }
}
