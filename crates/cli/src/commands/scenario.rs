//! `compass scenario` — Generate a workplace scenario.

use compass_core::ConversationContext;

pub async fn run(field: String, background: String) -> anyhow::Result<()> {
    let background = super::parse_json_arg("background", &background)?;

    let advisor = super::build_advisor()?;
    let mut context = ConversationContext::new();
    let scenario = advisor
        .generate_workplace_scenario(&field, &background, &[], &mut context)
        .await;
    super::print_json(&scenario)
}
