//! `compass scenario-analysis` — Analyze scenario responses.

use compass_core::ConversationContext;

pub async fn run(field: String, responses: String) -> anyhow::Result<()> {
    let responses = super::parse_json_arg("responses", &responses)?;

    let advisor = super::build_advisor()?;
    let mut context = ConversationContext::new();
    let analysis = advisor
        .analyze_scenario_responses(&field, &responses, &mut context)
        .await;
    super::print_json(&analysis)
}
