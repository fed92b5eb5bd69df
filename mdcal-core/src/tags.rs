//! Extracting `#tag` tokens from a tag line.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#([A-Za-z0-9_-]+)").unwrap());

static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#[A-Za-z0-9_-]+(\s+#[A-Za-z0-9_-]+)*\s*$").unwrap());

/// Extract all tags on a line, deduplicated, first occurrence order
/// preserved. Non-tag content on the line is ignored, never an error,
/// so trailing punctuation or comments are tolerated.
pub fn extract_tags(line: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for cap in TAG.captures_iter(line) {
        let tag = &cap[1];
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// True when a line consists entirely of whitespace-separated `#tag`
/// tokens. A line that merely contains a `#word` among other content is
/// description text, not a tag line.
pub fn is_tag_line(line: &str) -> bool {
    TAG_LINE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order() {
        assert_eq!(extract_tags("#trailrun #race"), vec!["trailrun", "race"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        assert_eq!(extract_tags("#run #race #run"), vec!["run", "race"]);
    }

    #[test]
    fn test_non_tag_content_is_ignored() {
        assert_eq!(extract_tags("#run (tentative!)"), vec!["run"]);
        assert_eq!(extract_tags("no tags here"), Vec::<String>::new());
        assert_eq!(extract_tags(""), Vec::<String>::new());
    }

    #[test]
    fn test_tags_are_case_sensitive_as_written() {
        assert_eq!(extract_tags("#Run #run"), vec!["Run", "run"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_tags("#swim #bike #run #swim");
        let rejoined = first
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_tags(&rejoined), first);
    }

    #[test]
    fn test_tag_line_must_be_entirely_tags() {
        assert!(is_tag_line("#trailrun #race"));
        assert!(is_tag_line("  #solo  "));
        assert!(!is_tag_line("#1 seed faces #2 seed"));
        assert!(!is_tag_line("meet at the #main entrance"));
        assert!(!is_tag_line("# heading, not a tag"));
        assert!(!is_tag_line(""));
    }
}
