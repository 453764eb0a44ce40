//! Page loaders for the vault routes
//!
//! Each loader reads one or two path segments, checks that they are present,
//! and returns the record the page renderer binds to. Loaders are pure: they
//! do no I/O, keep no state, and never log or catch their own errors.
//!
//! | Route                              | Loader               | Output               |
//! |------------------------------------|----------------------|----------------------|
//! | `/open-vault/[vault]`              | [`resolve_vault`]      | `{ vaultPath }` raw  |
//! | `/open-vault/[vault]/[notebook]`   | [`resolve_notebook`]   | `{ name, path }` raw |
//! | `/vault/[vaultPath]`               | [`resolve_vault_path`] | `{ vaultPath }` decoded |

use std::collections::HashMap;

use serde::Serialize;

use crate::RoutingError;

/// Signature shared by every page loader
pub type LoaderFn = fn(&RouteParams) -> Result<PageData, RoutingError>;

/// Raw path segments captured for one navigation, keyed by parameter name
///
/// Values are exactly as they appeared in the URL (still percent-encoded).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a segment (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Returns the segment when it is present and non-empty
    ///
    /// Missing and empty segments are indistinguishable to loaders.
    pub fn segment(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for RouteParams {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Page data for the single-vault pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaultPage {
    #[serde(rename = "vaultPath")]
    pub vault_path: String,
}

/// Page data for a notebook inside a vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotebookPage {
    /// Notebook segment
    pub name: String,
    /// Vault segment
    pub path: String,
}

/// Record handed to the page renderer
///
/// Serializes without a tag so the JSON keys are exactly the field names
/// the pages bind to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageData {
    Vault(VaultPage),
    Notebook(NotebookPage),
}

impl PageData {
    pub fn as_vault(&self) -> Option<&VaultPage> {
        match self {
            PageData::Vault(page) => Some(page),
            PageData::Notebook(_) => None,
        }
    }

    pub fn as_notebook(&self) -> Option<&NotebookPage> {
        match self {
            PageData::Notebook(page) => Some(page),
            PageData::Vault(_) => None,
        }
    }
}

/// `/open-vault/[vault]`: passes the vault segment through unchanged
///
/// # Examples
///
/// ```
/// use vault_router::{resolve_vault, RouteParams};
///
/// let params = RouteParams::new().with("vault", "MyVault");
/// let page = resolve_vault(&params).unwrap();
/// assert_eq!(page.as_vault().unwrap().vault_path, "MyVault");
/// ```
pub fn resolve_vault(params: &RouteParams) -> Result<PageData, RoutingError> {
    let vault_path = params
        .segment("vault")
        .ok_or_else(RoutingError::vault_path_required)?;

    Ok(PageData::Vault(VaultPage {
        vault_path: vault_path.to_string(),
    }))
}

/// `/open-vault/[vault]/[notebook]`: both segments raw, both required
///
/// ```
/// use vault_router::{resolve_notebook, RouteParams, RoutingError};
///
/// let params = RouteParams::new().with("vault", "V").with("notebook", "");
/// assert_eq!(resolve_notebook(&params), Err(RoutingError::invalid_routing()));
/// ```
pub fn resolve_notebook(params: &RouteParams) -> Result<PageData, RoutingError> {
    match (params.segment("vault"), params.segment("notebook")) {
        (Some(path), Some(name)) => Ok(PageData::Notebook(NotebookPage {
            name: name.to_string(),
            path: path.to_string(),
        })),
        _ => Err(RoutingError::invalid_routing()),
    }
}

/// Every `%` must introduce two hex digits
fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut idx = 0;
    while let Some(offset) = bytes[idx..].iter().position(|&b| b == b'%') {
        let start = idx + offset;
        match bytes.get(start + 1..start + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => idx = start + 3,
            _ => return false,
        }
    }
    true
}

/// `/vault/[vaultPath]`: percent-decodes the segment before use
///
/// The segment usually carries a filesystem path with encoded separators,
/// e.g. `home%2Fme%2FMy%20Vault`. A broken escape (`%`, `%4`, `%ZZ`) or an
/// escape sequence that decodes to invalid UTF-8 fails the navigation.
///
/// ```
/// use vault_router::{resolve_vault_path, RouteParams};
///
/// let params = RouteParams::new().with("vaultPath", "My%20Vault");
/// let page = resolve_vault_path(&params).unwrap();
/// assert_eq!(page.as_vault().unwrap().vault_path, "My Vault");
/// ```
pub fn resolve_vault_path(params: &RouteParams) -> Result<PageData, RoutingError> {
    let raw = params
        .segment("vaultPath")
        .ok_or_else(RoutingError::vault_path_required)?;

    if !has_valid_escapes(raw) {
        return Err(RoutingError::malformed_vault_path());
    }

    let decoded = urlencoding::decode(raw).map_err(|_| RoutingError::malformed_vault_path())?;
    if decoded.is_empty() {
        return Err(RoutingError::vault_path_required());
    }

    Ok(PageData::Vault(VaultPage {
        vault_path: decoded.into_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_segment_treats_empty_as_missing() {
        let params = RouteParams::new().with("vault", "");
        assert_eq!(params.segment("vault"), None);
        assert_eq!(params.segment("other"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_resolve_vault_keeps_encoding() {
        let params = RouteParams::new().with("vault", "My%20Vault");
        let page = resolve_vault(&params).unwrap();
        assert_eq!(page.as_vault().unwrap().vault_path, "My%20Vault");
    }

    #[test]
    fn test_resolve_vault_ignores_vault_path_key() {
        let params = RouteParams::new().with("vaultPath", "MyVault");
        assert_eq!(resolve_vault(&params), Err(RoutingError::vault_path_required()));
    }

    #[test]
    fn test_resolve_notebook_fails_as_unit() {
        let only_vault = RouteParams::new().with("vault", "V");
        let only_notebook = RouteParams::new().with("notebook", "N");
        assert_eq!(resolve_notebook(&only_vault), Err(RoutingError::invalid_routing()));
        assert_eq!(resolve_notebook(&only_notebook), Err(RoutingError::invalid_routing()));
    }

    #[test]
    fn test_resolve_vault_path_decodes_separators() {
        let params = RouteParams::new().with("vaultPath", "home%2Fme%2FMy%20Vault");
        let page = resolve_vault_path(&params).unwrap();
        assert_eq!(page.as_vault().unwrap().vault_path, "home/me/My Vault");
    }

    #[test]
    fn test_resolve_vault_path_plus_is_literal() {
        let params = RouteParams::new().with("vaultPath", "a+b");
        let page = resolve_vault_path(&params).unwrap();
        assert_eq!(page.as_vault().unwrap().vault_path, "a+b");
    }

    #[test]
    fn test_resolve_vault_path_invalid_utf8() {
        let params = RouteParams::new().with("vaultPath", "%FF%FE");
        assert_eq!(
            resolve_vault_path(&params),
            Err(RoutingError::malformed_vault_path())
        );
    }

    #[test]
    fn test_has_valid_escapes() {
        assert!(has_valid_escapes("plain"));
        assert!(has_valid_escapes("a%20b%2Fc"));
        assert!(has_valid_escapes("%e2%82%ac"));
        assert!(!has_valid_escapes("%"));
        assert!(!has_valid_escapes("ab%2"));
        assert!(!has_valid_escapes("%G0"));
        assert!(!has_valid_escapes("ok%20then%"));
    }

    #[test]
    fn test_page_data_json_shape() {
        let vault = PageData::Vault(VaultPage {
            vault_path: "MyVault".to_string(),
        });
        let notebook = PageData::Notebook(NotebookPage {
            name: "Notes1".to_string(),
            path: "MyVault".to_string(),
        });

        assert_eq!(serde_json::to_value(&vault).unwrap(), json!({ "vaultPath": "MyVault" }));
        assert_eq!(
            serde_json::to_value(&notebook).unwrap(),
            json!({ "name": "Notes1", "path": "MyVault" })
        );
    }

    #[test]
    fn test_params_from_iter() {
        let params: RouteParams = [("vault", "A"), ("notebook", "B")].into_iter().collect();
        assert_eq!(params.segment("notebook"), Some("B"));
        assert_eq!(params.iter().count(), 2);
    }
}
