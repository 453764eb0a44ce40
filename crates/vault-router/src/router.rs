use std::fmt;

use crate::loader::{self, LoaderFn, PageData, RouteParams};
use crate::route;
use crate::RoutingError;

/// A single route: its URL pattern and the loader bound to it
#[derive(Clone)]
pub struct Route {
    /// URL pattern like "/open-vault/:vault"
    pub pattern: String,
    /// Directory-style source the pattern was parsed from
    pub source: String,
    /// List of parameter names
    pub params: Vec<String>,
    /// Priority for matching (lower = higher priority)
    pub priority: usize,
    loader: LoaderFn,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("source", &self.source)
            .field("params", &self.params)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Result of matching a route against a path
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route
    pub route: Route,
    /// Raw segments extracted from the path
    pub params: RouteParams,
}

impl RouteMatch {
    /// Runs the matched route's loader on the extracted segments
    pub fn load(&self) -> Result<PageData, RoutingError> {
        self.route.load(&self.params)
    }
}

impl Route {
    /// Creates a route from a directory-style path and binds a loader
    ///
    /// # Examples
    ///
    /// ```
    /// use vault_router::{resolve_vault, Route};
    ///
    /// let route = Route::from_path("open-vault/[vault]", resolve_vault);
    /// assert_eq!(route.pattern, "/open-vault/:vault");
    /// assert_eq!(route.params, vec!["vault"]);
    /// ```
    pub fn from_path(path: &str, loader: LoaderFn) -> Self {
        let parsed = route::parse_pattern(path);
        let depth = parsed.pattern.matches('/').count();
        let priority = route::calculate_priority(parsed.dynamic_count, depth);

        Route {
            pattern: parsed.pattern,
            source: path.to_string(),
            params: parsed.params,
            priority,
            loader,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn load(&self, params: &RouteParams) -> Result<PageData, RoutingError> {
        (self.loader)(params)
    }

    /// Matches this route against a path (case-sensitive)
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        self.matches_with_options(path, false)
    }

    /// Matches this route against a path with options
    ///
    /// Walks pattern and path segments together. Every parameter consumes
    /// exactly one non-empty segment and both sides must run out together.
    pub fn matches_with_options(&self, path: &str, case_insensitive: bool) -> Option<RouteParams> {
        let pattern_segments = crate::path::segments(&self.pattern);
        let path_segments = crate::path::segments(path);

        if pattern_segments.len() != path_segments.len() {
            return None;
        }

        fn match_segments(
            pattern_segments: &[&str],
            path_segments: &[&str],
            params: RouteParams,
            case_insensitive: bool,
        ) -> Option<RouteParams> {
            let (pattern_seg, path_seg) = match (pattern_segments.split_first(), path_segments.split_first()) {
                (None, None) => return Some(params),
                (Some(p), Some(s)) => (p, s),
                _ => return None,
            };

            let params = match pattern_seg.0.strip_prefix(':') {
                Some(param_name) => params.with(param_name, *path_seg.0),
                None => {
                    let matches = if case_insensitive {
                        pattern_seg.0.eq_ignore_ascii_case(path_seg.0)
                    } else {
                        pattern_seg.0 == path_seg.0
                    };
                    if !matches {
                        return None;
                    }
                    params
                }
            };

            match_segments(pattern_seg.1, path_seg.1, params, case_insensitive)
        }

        match_segments(
            &pattern_segments,
            &path_segments,
            RouteParams::new(),
            case_insensitive,
        )
    }
}

/// Ordered routing table
///
/// Routes are kept sorted by priority; ties keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
    case_insensitive: bool,
}

impl Router {
    /// Creates an empty, case-sensitive router
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_insensitive(case_insensitive: bool) -> Self {
        Self {
            routes: Vec::new(),
            case_insensitive,
        }
    }

    /// Adds a route (functional builder)
    ///
    /// ```
    /// use vault_router::{resolve_vault, Route, Router};
    ///
    /// let router = Router::new()
    ///     .with_route(Route::from_path("open-vault/[vault]", resolve_vault));
    /// assert_eq!(router.routes().len(), 1);
    /// ```
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self.routes.sort_by_key(|r| r.priority);
        self
    }

    pub fn with_routes<I>(self, routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        routes.into_iter().fold(self, Router::with_route)
    }

    /// The application's routing table
    ///
    /// ```
    /// use vault_router::Router;
    ///
    /// let router = Router::vault_routes();
    /// let route_match = router.match_route("/open-vault/MyVault/Notes1").unwrap();
    /// assert_eq!(route_match.route.pattern, "/open-vault/:vault/:notebook");
    /// ```
    pub fn vault_routes() -> Self {
        Self::new().with_vault_routes()
    }

    /// Adds the application's three vault routes to this router
    pub fn with_vault_routes(self) -> Self {
        self.with_routes([
            Route::from_path("open-vault/[vault]", loader::resolve_vault),
            Route::from_path("open-vault/[vault]/[notebook]", loader::resolve_notebook),
            Route::from_path("vault/[vaultPath]", loader::resolve_vault_path),
        ])
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Matches a path against all routes and returns the first match
    ///
    /// The path is expected in normalized form; see [`crate::path::normalize_path`].
    pub fn match_route(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            route
                .matches_with_options(path, self.case_insensitive)
                .map(|params| RouteMatch {
                    route: route.clone(),
                    params,
                })
        })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn has_dynamic_routes(&self) -> bool {
        self.routes.iter().any(Route::is_dynamic)
    }
}
