//! Client-side navigation
//!
//! Turns a raw URL into page data. Unmatched URLs fall back to the single
//! entry document so the shell's client-side router can take over.

use serde::Serialize;
use tracing::{debug, warn};

use crate::loader::PageData;
use crate::path::{normalize_path, strip_query};
use crate::{Router, RoutingError};

/// Outcome of a navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Navigation {
    /// A route matched and its loader produced page data
    Page { route: String, data: PageData },
    /// No route matched; serve the entry document
    Fallback { document: String },
}

impl Navigation {
    pub fn page_data(&self) -> Option<&PageData> {
        match self {
            Navigation::Page { data, .. } => Some(data),
            Navigation::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Navigation::Fallback { .. })
    }
}

/// Resolves navigation requests against a routing table
#[derive(Debug, Clone)]
pub struct Navigator {
    router: Router,
    fallback: Option<String>,
}

impl Navigator {
    pub fn new(router: Router, fallback: impl Into<String>) -> Self {
        Self {
            router,
            fallback: Some(fallback.into()),
        }
    }

    /// A navigator whose unmatched URLs fail with [`RoutingError::no_route`]
    pub fn without_fallback(router: Router) -> Self {
        Self {
            router,
            fallback: None,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Resolves one navigation
    ///
    /// Loader errors are returned unchanged. An unmatched URL only fails
    /// when the navigator has no fallback document.
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_router::{Navigator, Router};
    ///
    /// let navigator = Navigator::new(Router::vault_routes(), "index.html");
    ///
    /// let nav = navigator.navigate("/vault/My%20Vault").unwrap();
    /// assert_eq!(nav.page_data().unwrap().as_vault().unwrap().vault_path, "My Vault");
    ///
    /// let nav = navigator.navigate("/settings").unwrap();
    /// assert!(nav.is_fallback());
    /// ```
    pub fn navigate(&self, url: &str) -> Result<Navigation, RoutingError> {
        let path = normalize_path(strip_query(url));

        let Some(route_match) = self.router.match_route(&path) else {
            let Some(document) = &self.fallback else {
                warn!(path = %path, "no route matched and no fallback document");
                return Err(RoutingError::no_route());
            };
            debug!(path = %path, fallback = %document, "no route matched, serving fallback");
            return Ok(Navigation::Fallback {
                document: document.clone(),
            });
        };

        match route_match.load() {
            Ok(data) => {
                debug!(path = %path, route = %route_match.route.pattern, "route resolved");
                Ok(Navigation::Page {
                    route: route_match.route.pattern,
                    data,
                })
            }
            Err(err) => {
                warn!(path = %path, route = %route_match.route.pattern, error = %err, "route loader failed");
                Err(err)
            }
        }
    }
}
