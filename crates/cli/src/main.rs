//! Compass CLI — the main entry point.
//!
//! Commands:
//! - `chat`              — Talk to the career counselor
//! - `questions`         — Generate adaptive assessment questions
//! - `analyze`           — Run the career-fit analysis
//! - `scenario`          — Generate a workplace scenario
//! - `scenario-analysis` — Analyze scenario responses
//! - `roadmap`           — Generate a startup roadmap
//! - `doctor`            — Diagnose configuration and API reachability

use clap::{Parser, Subcommand};
use compass_core::AssessmentPhase;

mod commands;

#[derive(Parser)]
#[command(
    name = "compass",
    about = "Compass — AI-assisted career guidance",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the career counselor
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Field of interest, threaded into every prompt
        #[arg(short, long)]
        field: Option<String>,

        /// Comma-separated skills
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,
    },

    /// Generate adaptive assessment questions
    Questions {
        /// Comma-separated selected skills
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Assessment phase
        #[arg(short, long, default_value = "initial")]
        phase: String,

        /// How many questions were already answered
        #[arg(short, long, default_value_t = 0)]
        answered: usize,
    },

    /// Run the comprehensive career-fit analysis
    Analyze {
        /// Comma-separated selected skills
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Assessment responses as a JSON document
        #[arg(short, long, default_value = "[]")]
        responses: String,

        /// Additional profile info as a JSON document
        #[arg(long, default_value = "{}")]
        profile: String,
    },

    /// Generate a workplace scenario
    Scenario {
        /// Field of interest
        #[arg(short, long)]
        field: String,

        /// User background as a JSON document
        #[arg(short, long, default_value = "{}")]
        background: String,
    },

    /// Analyze scenario responses for personality insights
    ScenarioAnalysis {
        /// Field of interest
        #[arg(short, long)]
        field: String,

        /// Scenario responses as a JSON document
        #[arg(short, long, default_value = "[]")]
        responses: String,
    },

    /// Generate a startup roadmap
    Roadmap {
        /// Comma-separated top skills
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// The niche to build in
        #[arg(short, long)]
        niche: String,
    },

    /// Diagnose configuration and API reachability
    Doctor,
}

fn parse_phase(raw: &str) -> anyhow::Result<AssessmentPhase> {
    match raw {
        "initial" => Ok(AssessmentPhase::Initial),
        "deep-dive" => Ok(AssessmentPhase::DeepDive),
        "validation" => Ok(AssessmentPhase::Validation),
        other => anyhow::bail!("unknown phase '{other}' (expected initial, deep-dive, validation)"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Chat {
            message,
            field,
            skills,
        } => commands::chat::run(message, field, skills).await?,
        Commands::Questions {
            skills,
            phase,
            answered,
        } => commands::questions::run(skills, parse_phase(&phase)?, answered).await?,
        Commands::Analyze {
            skills,
            responses,
            profile,
        } => commands::analyze::run(skills, responses, profile).await?,
        Commands::Scenario { field, background } => {
            commands::scenario::run(field, background).await?
        }
        Commands::ScenarioAnalysis { field, responses } => {
            commands::scenario_analysis::run(field, responses).await?
        }
        Commands::Roadmap { skills, niche } => commands::roadmap::run(skills, niche).await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_parsing() {
        assert!(matches!(
            parse_phase("deep-dive"),
            Ok(AssessmentPhase::DeepDive)
        ));
        assert!(parse_phase("bogus").is_err());
    }
}
