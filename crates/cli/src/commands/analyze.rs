//! `compass analyze` — Run the comprehensive career-fit analysis.

use compass_core::ConversationContext;

pub async fn run(skills: Vec<String>, responses: String, profile: String) -> anyhow::Result<()> {
    let responses = super::parse_json_arg("responses", &responses)?;
    let profile = super::parse_json_arg("profile", &profile)?;

    let advisor = super::build_advisor()?;
    let mut context = ConversationContext::new();
    let analysis = advisor
        .analyze_career_fit(&skills, &responses, &profile, &mut context)
        .await;
    super::print_json(&analysis)
}
