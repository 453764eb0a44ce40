/// Pattern parsing and priority calculation for routes
///
/// Pure functional parsers that transform route directory paths into URL patterns.

use super::pattern::{classify_segment, PatternSegmentType};

/// Accumulator for fold-based parsing
#[derive(Default)]
struct ParseState {
    pattern: String,
    params: Vec<String>,
    dynamic_count: usize,
}

impl ParseState {
    fn with_static_segment(mut self, segment: String) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(&segment);
        self
    }

    fn with_required_param(mut self, param_name: String) -> Self {
        self.pattern.push_str("/:");
        self.pattern.push_str(&param_name);
        self.params.push(param_name);
        self.dynamic_count += 1;
        self
    }

    fn finalize(mut self) -> Self {
        if self.pattern.is_empty() {
            self.pattern = "/".to_string();
        }
        self
    }
}

/// Output of [`parse_pattern`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPattern {
    /// URL pattern like "/open-vault/:vault"
    pub pattern: String,
    /// Parameter names in path order
    pub params: Vec<String>,
    /// Number of dynamic segments
    pub dynamic_count: usize,
}

/// Route groups like `(app)` organise directories without adding a URL segment
fn should_skip_segment(segment: &str) -> bool {
    segment.is_empty() || (segment.starts_with('(') && segment.ends_with(')'))
}

fn process_segment(state: ParseState, segment: &str) -> ParseState {
    if should_skip_segment(segment) {
        return state;
    }

    match classify_segment(segment) {
        PatternSegmentType::Required(param_name) => state.with_required_param(param_name),
        PatternSegmentType::Static(seg) => state.with_static_segment(seg),
    }
}

/// Parses a route directory path into a URL pattern (pure function)
///
/// # Examples
///
/// ```
/// use vault_router::route::parser::parse_pattern;
///
/// let parsed = parse_pattern("open-vault/[vault]/[notebook]");
/// assert_eq!(parsed.pattern, "/open-vault/:vault/:notebook");
/// assert_eq!(parsed.params, vec!["vault", "notebook"]);
/// assert_eq!(parsed.dynamic_count, 2);
///
/// let parsed = parse_pattern("(app)/settings");
/// assert_eq!(parsed.pattern, "/settings");
/// ```
pub fn parse_pattern(path: &str) -> ParsedPattern {
    let state = path
        .split('/')
        .fold(ParseState::default(), process_segment)
        .finalize();

    ParsedPattern {
        pattern: state.pattern,
        params: state.params,
        dynamic_count: state.dynamic_count,
    }
}

/// Calculates route priority for matching order (pure function)
///
/// Lower number = higher priority (matched first). Static routes are always 0.
///
/// ```
/// use vault_router::route::parser::calculate_priority;
///
/// assert_eq!(calculate_priority(0, 2), 0);
/// assert_eq!(calculate_priority(1, 2), 4); // 1 + 2 + 1
/// ```
pub fn calculate_priority(dynamic_count: usize, depth: usize) -> usize {
    if dynamic_count > 0 {
        dynamic_count + depth + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_static() {
        let parsed = parse_pattern("settings");
        assert_eq!(parsed.pattern, "/settings");
        assert!(parsed.params.is_empty());
        assert_eq!(parsed.dynamic_count, 0);
    }

    #[test]
    fn test_parse_pattern_single_param() {
        let parsed = parse_pattern("vault/[vaultPath]");
        assert_eq!(parsed.pattern, "/vault/:vaultPath");
        assert_eq!(parsed.params, vec!["vaultPath".to_string()]);
        assert_eq!(parsed.dynamic_count, 1);
    }

    #[test]
    fn test_parse_pattern_leading_slash_and_root() {
        assert_eq!(parse_pattern("/open-vault/[vault]").pattern, "/open-vault/:vault");
        assert_eq!(parse_pattern("").pattern, "/");
        assert_eq!(parse_pattern("(app)").pattern, "/");
    }

    #[test]
    fn test_calculate_priority() {
        assert_eq!(calculate_priority(0, 5), 0);
        assert_eq!(calculate_priority(2, 3), 6);
        assert!(calculate_priority(1, 2) < calculate_priority(2, 3));
    }
}
