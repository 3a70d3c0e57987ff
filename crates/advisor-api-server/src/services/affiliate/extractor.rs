use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Numbered-list entry whose name precedes an opening parenthesis:
/// "1. Galaxy S21 (₹45000)" -> "Galaxy S21"
static NUMBERED_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\s*([^()\n]+?)\s*\(").expect("invalid numbered entry pattern"));

/// Markdown heading line: "### Galaxy S21" -> "Galaxy S21"
static HEADING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s*(\S.*)$").expect("invalid heading pattern"));

/// Extracts candidate product names from free-text assistant output.
/// Purely syntactic: no validation that candidates are plausible products.
pub trait ProductExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Candidates in original order, duplicates retained.
    fn extract(&self, reply: &str) -> Vec<String>;
}

/// Primary pattern: numbered-list entries with parenthesized trailing specs.
pub struct NumberedListExtractor;

impl ProductExtractor for NumberedListExtractor {
    fn name(&self) -> &'static str {
        "numbered-list"
    }

    fn extract(&self, reply: &str) -> Vec<String> {
        NUMBERED_ENTRY
            .captures_iter(reply)
            .filter_map(|captures| captures.get(1))
            .map(|m| clean_name(m.as_str()))
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Fallback pattern: the remainder of any markdown heading line.
pub struct HeadingExtractor;

impl ProductExtractor for HeadingExtractor {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn extract(&self, reply: &str) -> Vec<String> {
        HEADING_LINE
            .captures_iter(reply)
            .filter_map(|captures| captures.get(1))
            .map(|m| clean_name(m.as_str()))
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Strip surrounding whitespace and markdown emphasis from a raw capture.
fn clean_name(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '*' || c == '_' || c == '`')
        .trim()
        .to_string()
}

/// Ordered set of extractors tried in priority order; the first non-empty
/// result wins.
pub struct ExtractorChain {
    extractors: Vec<Box<dyn ProductExtractor>>,
}

impl ExtractorChain {
    pub fn new(extractors: Vec<Box<dyn ProductExtractor>>) -> Self {
        Self { extractors }
    }

    pub fn default_chain() -> Self {
        Self::new(vec![
            Box::new(NumberedListExtractor),
            Box::new(HeadingExtractor),
        ])
    }

    pub fn extract(&self, reply: &str) -> Vec<String> {
        for extractor in &self.extractors {
            let candidates = extractor.extract(reply);
            if !candidates.is_empty() {
                debug!(
                    "Extractor '{}' matched {} product name(s)",
                    extractor.name(),
                    candidates.len()
                );
                return candidates;
            }
        }
        Vec::new()
    }
}
