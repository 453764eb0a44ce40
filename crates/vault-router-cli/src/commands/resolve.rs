use anyhow::{Context, Result};
use std::path::Path;
use vault_router::ExportConfig;

pub fn execute(config_path: &Path, url: &str) -> Result<()> {
    let config = ExportConfig::load(config_path)?;
    let navigator = config.navigator();

    let navigation = navigator
        .navigate(url)
        .with_context(|| format!("Failed to resolve {:?}", url))?;

    println!("{}", serde_json::to_string_pretty(&navigation)?);

    Ok(())
}
