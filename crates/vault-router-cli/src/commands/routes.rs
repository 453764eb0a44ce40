use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use vault_router::ExportConfig;

pub fn execute(config_path: &Path) -> Result<()> {
    let config = ExportConfig::load(config_path)?;
    let router = config.router();

    println!("{}", "Routes".green().bold());
    println!();

    for route in router.routes() {
        let params = if route.params.is_empty() {
            "-".to_string()
        } else {
            route.params.join(", ")
        };
        println!(
            "  {} {} priority {:<3} params {}",
            format!("{:<32}", route.pattern).cyan(),
            format!("{:<32}", route.source).dimmed(),
            route.priority,
            params
        );
    }

    println!();
    println!(
        "Matching: {}",
        if router.is_case_insensitive() { "case-insensitive" } else { "case-sensitive" }
    );

    Ok(())
}
