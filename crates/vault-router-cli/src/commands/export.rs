use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use vault_router::{ExportConfig, ExportPlan};

pub fn execute(config_path: &Path) -> Result<()> {
    let config = ExportConfig::load(config_path)?;
    let plan = ExportPlan::build(&config, &config.router())
        .with_context(|| format!("Failed to plan export with {:?}", config_path))?;

    println!("{}", "Static export plan".green().bold());
    println!();
    println!("Strict: {}", if config.export.strict { "Yes" } else { "No" });
    println!(
        "Fallback: {}",
        plan.fallback.as_deref().unwrap_or("none").cyan()
    );

    println!("Prerendered ({}):", plan.prerendered.len());
    for path in &plan.prerendered {
        println!("  {}", path);
    }

    if !plan.skipped.is_empty() {
        println!("Left to the client ({}):", plan.skipped.len());
        for path in &plan.skipped {
            println!("  {}", path.yellow());
        }
    }

    Ok(())
}
