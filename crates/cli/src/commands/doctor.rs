//! `compass doctor` — Diagnose configuration and API reachability.

use compass_config::AppConfig;
use compass_core::TextModel;
use compass_gateway::GeminiClient;

pub async fn run() -> anyhow::Result<()> {
    println!("🩺 Compass Doctor — System Diagnostics");
    println!("======================================\n");

    let mut issues = 0;

    // Check config
    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Configuration loaded");
            config
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            println!("\n  ⚠️  1 issue found. See above for details.");
            return Ok(());
        }
    };

    match AppConfig::default_path() {
        Some(path) if path.exists() => println!("  ✅ Config file present at {}", path.display()),
        Some(path) => println!("  ℹ️  No config file at {} (using defaults)", path.display()),
        None => println!("  ℹ️  Could not resolve a home directory for the config file"),
    }

    // Check API key
    if config.api_key.is_some() {
        println!("  ✅ API key configured");
    } else {
        println!("  ⚠️  No API key configured — set GEMINI_API_KEY");
        issues += 1;
    }

    println!("  ℹ️  Model: {}", config.model);

    // Check API reachability
    let client = GeminiClient::from_config(&config);
    match client.health_check().await {
        Ok(true) => println!("  ✅ API reachable"),
        Ok(false) => {
            println!("  ⚠️  API responded but model list was unavailable");
            issues += 1;
        }
        Err(e) => {
            println!("  ❌ API unreachable: {e}");
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
