// File: src/config.rs
// Purpose: Static export configuration parsing from vault-router.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{Navigator, Router};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "vault-router.toml";

/// Build and routing configuration for the static bundle
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExportConfig {
    #[serde(default)]
    pub export: StaticExport,

    #[serde(default)]
    pub prerender: PrerenderConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// How the static bundle is emitted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaticExport {
    /// Entry document served for every unmatched route; `""` disables it
    #[serde(default = "default_fallback")]
    pub fallback: Option<String>,

    /// Fail export planning on entries that resolve to nothing
    #[serde(default = "default_false")]
    pub strict: bool,
}

/// Paths pre-generated at build time
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PrerenderConfig {
    /// `"*"` expands to every static route
    #[serde(default)]
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoutingConfig {
    #[serde(default = "default_false")]
    pub case_insensitive: bool,
}

fn default_fallback() -> Option<String> {
    Some("index.html".to_string())
}

fn default_false() -> bool {
    false
}

impl Default for StaticExport {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            strict: false,
        }
    }
}

impl StaticExport {
    /// The configured fallback document, if any
    pub fn fallback_document(&self) -> Option<&str> {
        self.fallback.as_deref().filter(|doc| !doc.is_empty())
    }
}

impl ExportConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ExportConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// The application routing table with the configured case sensitivity
    pub fn router(&self) -> Router {
        Router::with_case_insensitive(self.routing.case_insensitive).with_vault_routes()
    }

    /// Builds a navigator with the configured fallback document
    ///
    /// Without one, matched URLs still resolve and unmatched URLs fail.
    pub fn navigator(&self) -> Navigator {
        match self.export.fallback_document() {
            Some(fallback) => Navigator::new(self.router(), fallback),
            None => Navigator::without_fallback(self.router()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.export.fallback.as_deref(), Some("index.html"));
        assert!(!config.export.strict);
        assert!(config.prerender.entries.is_empty());
        assert!(!config.routing.case_insensitive);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<ExportConfig>("").unwrap();
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn test_custom_config() {
        let toml = r#"
            [export]
            fallback = "200.html"
            strict = true

            [prerender]
            entries = ["*"]

            [routing]
            case_insensitive = true
        "#;
        let config: ExportConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.export.fallback.as_deref(), Some("200.html"));
        assert!(config.export.strict);
        assert_eq!(config.prerender.entries, vec!["*"]);
        assert!(config.router().is_case_insensitive());
    }

    #[test]
    fn test_navigator_without_fallback() {
        let mut config = ExportConfig::default();
        assert_eq!(config.navigator().fallback(), Some("index.html"));

        for fallback in [None, Some(String::new())] {
            config.export.fallback = fallback;
            let navigator = config.navigator();
            assert_eq!(navigator.fallback(), None);
            assert!(navigator.navigate("/vault/x").is_ok());
            assert_eq!(navigator.navigate("/nowhere"), Err(crate::RoutingError::no_route()));
        }
    }
}
