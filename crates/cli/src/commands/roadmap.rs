//! `compass roadmap` — Generate a startup roadmap.

use compass_core::ConversationContext;

pub async fn run(skills: Vec<String>, niche: String) -> anyhow::Result<()> {
    let advisor = super::build_advisor()?;
    let mut context = ConversationContext::new();
    let roadmap = advisor
        .generate_startup_roadmap(&skills, &niche, &mut context)
        .await;
    super::print_json(&roadmap)
}
