/// Pattern parsing for route segments
///
/// Pure functional parsing of directory-style route patterns into typed segments.

/// Represents the kinds of route pattern segment
///
/// # Examples
///
/// ```
/// use vault_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// let seg = classify_segment("open-vault");
/// assert!(matches!(seg, PatternSegmentType::Static(_)));
///
/// let seg = classify_segment("[vault]");
/// assert!(matches!(seg, PatternSegmentType::Required(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSegmentType {
    /// Required parameter: [vault]
    Required(String),
    /// Static text segment
    Static(String),
}

/// Classifies a segment into a pattern type (pure function)
///
/// `[name]` is a required parameter; anything else is matched literally.
/// Brackets with nothing inside (`[]`) are treated as static text.
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    match segment
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .filter(|inner| !inner.is_empty())
    {
        Some(name) => PatternSegmentType::Required(name.to_string()),
        None => PatternSegmentType::Static(segment.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        let seg = classify_segment("open-vault");
        assert_eq!(seg, PatternSegmentType::Static("open-vault".to_string()));
    }

    #[test]
    fn test_classify_required() {
        let seg = classify_segment("[vaultPath]");
        assert_eq!(seg, PatternSegmentType::Required("vaultPath".to_string()));
    }

    #[test]
    fn test_classify_empty_brackets() {
        let seg = classify_segment("[]");
        assert_eq!(seg, PatternSegmentType::Static("[]".to_string()));
    }

    #[test]
    fn test_classify_unbalanced() {
        assert!(matches!(classify_segment("[vault"), PatternSegmentType::Static(_)));
        assert!(matches!(classify_segment("vault]"), PatternSegmentType::Static(_)));
    }
}
