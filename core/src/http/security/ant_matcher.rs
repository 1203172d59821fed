//! Ant-style Path Matcher
//!
//! # Pattern Syntax
//!
//! - `?` matches exactly one character
//! - `*` matches zero or more characters within a path segment
//! - `**` matches zero or more path segments
//!
//! # Examples
//!
//! ```rust
//! use basic_auth_db_core::http::security::ant_matcher::AntMatcher;
//!
//! let matcher = AntMatcher::new("/secured");
//! assert!(matcher.matches("/secured"));
//! assert!(!matcher.matches("/secured/extra"));
//!
//! let matcher = AntMatcher::new("/**");
//! assert!(matcher.matches("/"));
//! assert!(matcher.matches("/any/thing"));
//! ```
//!
//! # Spring Equivalent
//!
//! `org.springframework.util.AntPathMatcher`

/// Ant-style path matcher. Matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct AntMatcher {
    pattern: String,
    segments: Vec<PatternSegment>,
}

#[derive(Debug, Clone, PartialEq)]
enum PatternSegment {
    /// Literal text (no wildcards)
    Literal(String),
    /// Single segment wildcard (*)
    SingleWildcard,
    /// Multi-segment wildcard (**)
    DoubleWildcard,
    /// Segment with embedded wildcards (*, ?)
    Pattern(Vec<char>),
}

impl AntMatcher {
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| match part {
                "**" => PatternSegment::DoubleWildcard,
                "*" => PatternSegment::SingleWildcard,
                _ if part.contains('*') || part.contains('?') => {
                    PatternSegment::Pattern(part.chars().collect())
                }
                _ => PatternSegment::Literal(part.to_string()),
            })
            .collect();

        Self {
            pattern: pattern.to_string(),
            segments,
        }
    }

    /// Get the original pattern string
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check if the given path matches this pattern.
    ///
    /// Empty segments are ignored, so `/secured/` matches `/secured`.
    pub fn matches(&self, path: &str) -> bool {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match_segments(&self.segments, &path_segments)
    }
}

fn match_segments(pattern: &[PatternSegment], path: &[&str]) -> bool {
    match (pattern.split_first(), path.split_first()) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some((PatternSegment::DoubleWildcard, rest)), _) => {
            (0..=path.len()).any(|skip| match_segments(rest, &path[skip..]))
        }
        (Some(_), None) => false,
        (Some((segment, rest)), Some((head, tail))) => {
            let head_matches = match segment {
                PatternSegment::Literal(literal) => literal.as_str() == *head,
                PatternSegment::SingleWildcard | PatternSegment::DoubleWildcard => true,
                PatternSegment::Pattern(chars) => {
                    let text: Vec<char> = head.chars().collect();
                    match_chars(chars, &text)
                }
            };
            head_matches && match_segments(rest, tail)
        }
    }
}

fn match_chars(pattern: &[char], text: &[char]) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some(('*', rest)) => (0..=text.len()).any(|skip| match_chars(rest, &text[skip..])),
        Some(('?', rest)) => !text.is_empty() && match_chars(rest, &text[1..]),
        Some((c, rest)) => text.first() == Some(c) && match_chars(rest, &text[1..]),
    }
}
