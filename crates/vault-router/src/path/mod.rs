/// Path utilities for navigation URLs
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use vault_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/open-vault/MyVault"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("open-vault")); // Missing leading /
/// assert!(!is_valid_path("/open-vault/")); // Trailing /
/// assert!(!is_valid_path("/open-vault//MyVault")); // Double //
/// assert!(!is_valid_path("\\vault\\MyVault")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
///
/// - Trailing slashes: `/vault/x/` → `/vault/x`
/// - Double slashes: `/vault//x` → `/vault/x`
/// - Backslashes: `\vault\x` → `/vault/x`
///
/// Percent-encoded sequences are left untouched; an encoded separator such
/// as `%2F` stays inside its segment.
///
/// # Examples
///
/// ```
/// use vault_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/vault/notes");
/// assert!(matches!(path, Cow::Borrowed("/vault/notes")));
///
/// assert_eq!(normalize_path("/open-vault/MyVault/"), "/open-vault/MyVault");
/// assert_eq!(normalize_path("\\open-vault\\MyVault"), "/open-vault/MyVault");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Drops the query string and fragment from a navigation URL
///
/// # Examples
///
/// ```
/// use vault_router::path::strip_query;
///
/// assert_eq!(strip_query("/vault/notes?tab=2#top"), "/vault/notes");
/// assert_eq!(strip_query("/vault/notes#top"), "/vault/notes");
/// assert_eq!(strip_query("/vault/notes"), "/vault/notes");
/// ```
pub fn strip_query(url: &str) -> &str {
    url.find(['?', '#']).map_or(url, |idx| &url[..idx])
}

/// Splits a path into its non-empty segments
pub(crate) fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/open-vault/MyVault/Notes1"));
        assert!(is_valid_path("/vault/My%20Vault"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("vault"));
        assert!(!is_valid_path("/vault/"));
        assert!(!is_valid_path("/vault//x"));
        assert!(!is_valid_path("/vault\\x"));
    }

    #[test]
    fn test_normalize_path_valid() {
        let path = normalize_path("/open-vault/MyVault");
        assert!(matches!(path, Cow::Borrowed("/open-vault/MyVault")));

        let path = normalize_path("/");
        assert!(matches!(path, Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_path_repairs() {
        assert_eq!(normalize_path("/open-vault/MyVault/"), "/open-vault/MyVault");
        assert_eq!(normalize_path("/open-vault///MyVault"), "/open-vault/MyVault");
        assert_eq!(normalize_path("open-vault/MyVault"), "/open-vault/MyVault");
        assert_eq!(normalize_path("\\vault\\x"), "/vault/x");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_normalize_keeps_encoded_separator() {
        assert_eq!(normalize_path("/vault/home%2Fme%2Fnotes/"), "/vault/home%2Fme%2Fnotes");
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("/vault/x?"), "/vault/x");
        assert_eq!(strip_query("?a=1"), "");
        assert_eq!(strip_query("/a#b?c"), "/a");
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("/open-vault/a/b"), vec!["open-vault", "a", "b"]);
        assert!(segments("/").is_empty());
    }
}
