//! `compass questions` — Generate adaptive assessment questions.

use compass_core::{AssessmentPhase, ConversationContext};

pub async fn run(
    skills: Vec<String>,
    phase: AssessmentPhase,
    answered: usize,
) -> anyhow::Result<()> {
    let advisor = super::build_advisor()?;
    let mut context = ConversationContext::new();
    let questions = advisor
        .generate_adaptive_questions(&skills, answered, phase, &mut context)
        .await;
    super::print_json(&questions)
}
