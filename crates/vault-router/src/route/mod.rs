/// Route pattern parsing
///
/// Pure functional components that turn route directory paths into URL patterns.

pub mod parser;
pub mod pattern;

pub use parser::{calculate_priority, parse_pattern, ParsedPattern};
pub use pattern::{classify_segment, PatternSegmentType};
