//! Build-time export plan
//!
//! The bundle is fully static and client-rendered. Only static routes can
//! be pre-generated; dynamic routes such as `/open-vault/[vault]` resolve
//! at runtime through the fallback document.

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ExportConfig;
use crate::path::normalize_path;
use crate::Router;

/// Wildcard entry that expands to every static route
pub const ALL_STATIC: &str = "*";

/// What the static export will emit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportPlan {
    /// Paths pre-generated as documents, first-seen order
    pub prerendered: Vec<String>,
    /// Entries that matched a dynamic route and were left to the client
    pub skipped: Vec<String>,
    /// Entry document for everything not pre-generated
    pub fallback: Option<String>,
}

impl ExportPlan {
    /// Plans the export of `router` under `config`
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_router::{ExportConfig, ExportPlan, Router};
    ///
    /// let plan = ExportPlan::build(&ExportConfig::default(), &Router::vault_routes()).unwrap();
    /// assert!(plan.prerendered.is_empty());
    /// assert_eq!(plan.fallback.as_deref(), Some("index.html"));
    /// ```
    pub fn build(config: &ExportConfig, router: &Router) -> Result<Self> {
        let strict = config.export.strict;
        let fallback = config.export.fallback_document().map(str::to_string);

        if strict && fallback.is_none() && router.has_dynamic_routes() {
            bail!("dynamic routes cannot resolve without a fallback document (export.fallback)");
        }

        let mut plan = ExportPlan {
            fallback,
            ..Default::default()
        };

        for entry in &config.prerender.entries {
            if entry == ALL_STATIC {
                router
                    .routes()
                    .iter()
                    .filter(|route| !route.is_dynamic())
                    .for_each(|route| plan.push_prerendered(&route.pattern));
                continue;
            }

            let path = normalize_path(entry);
            match router.match_route(&path) {
                Some(route_match) if route_match.route.is_dynamic() => {
                    debug!(entry = %entry, route = %route_match.route.pattern, "dynamic route excluded from prerender");
                    if !plan.skipped.iter().any(|p| p == path.as_ref()) {
                        plan.skipped.push(path.into_owned());
                    }
                }
                Some(_) => plan.push_prerendered(&path),
                None if strict => bail!("prerender entry {:?} does not match any route", entry),
                None => warn!(entry = %entry, "prerender entry does not match any route, skipping"),
            }
        }

        Ok(plan)
    }

    fn push_prerendered(&mut self, path: &str) {
        if !self.prerendered.iter().any(|p| p == path) {
            self.prerendered.push(path.to_string());
        }
    }
}
