/// Routing failure raised by a loader
///
/// There is exactly one error kind at the loader layer. It carries a fixed
/// message and nothing else: a missing segment and an empty segment produce
/// the same error.
///
/// # Examples
///
/// ```
/// use vault_router::RoutingError;
///
/// let err = RoutingError::vault_path_required();
/// assert_eq!(err.to_string(), "vault path is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RoutingError {
    message: &'static str,
}

impl RoutingError {
    /// A single-segment vault route was reached without its segment
    pub fn vault_path_required() -> Self {
        Self {
            message: "vault path is required",
        }
    }

    /// A vault/notebook route was reached with either segment missing
    pub fn invalid_routing() -> Self {
        Self {
            message: "invalid routing",
        }
    }

    /// The vault path has a broken escape or does not decode to UTF-8
    pub fn malformed_vault_path() -> Self {
        Self {
            message: "vault path is malformed",
        }
    }

    /// No route matched and there is no entry document to fall back to
    pub fn no_route() -> Self {
        Self {
            message: "no route matches and no fallback document is configured",
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}
