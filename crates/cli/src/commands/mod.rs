//! Subcommand implementations.

pub mod analyze;
pub mod chat;
pub mod doctor;
pub mod questions;
pub mod roadmap;
pub mod scenario;
pub mod scenario_analysis;

use compass_config::AppConfig;
use compass_engine::CareerAdvisor;
use compass_gateway::GeminiClient;
use std::sync::Arc;

/// Load configuration and build the advisor every command shares.
pub fn build_advisor() -> anyhow::Result<CareerAdvisor> {
    let config = AppConfig::load()?;
    if config.api_key.is_none() {
        eprintln!(
            "⚠️  No API key configured — set GEMINI_API_KEY. \
             AI features will use built-in fallback content."
        );
    }
    let client = GeminiClient::from_config(&config);
    Ok(CareerAdvisor::new(Arc::new(client)))
}

/// Pretty-print any serializable result.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse a user-supplied JSON argument.
pub fn parse_json_arg(label: &str, raw: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(raw).map_err(|e| anyhow::anyhow!("invalid JSON for {label}: {e}"))
}
