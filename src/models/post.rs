//! Post content record.

use serde::Deserialize;

/// Body values that stand in for deleted or absent content.
const BODY_TOMBSTONES: [&str; 4] = ["none", "n/a", "[deleted]", "[removed]"];

/// Structured content of a single post, as returned by `get_post_content`.
///
/// All fields are optional; the server is inconsistent about which of
/// `selftext`, `body`, or `text` carries the post body.
#[derive(Debug, Clone, Deserialize)]
pub struct PostContent {
    /// Post title
    #[serde(default)]
    pub title: Option<String>,

    /// Post body (preferred field)
    #[serde(default)]
    pub selftext: Option<String>,

    /// Post body (first fallback field)
    #[serde(default)]
    pub body: Option<String>,

    /// Post body (second fallback field)
    #[serde(default)]
    pub text: Option<String>,
}

impl PostContent {
    /// Trimmed title, if present and non-empty.
    pub fn title_text(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Trimmed body text, taken from `selftext`, `body`, or `text` in that
    /// priority order. Empty and tombstoned values yield `None`.
    pub fn body_text(&self) -> Option<&str> {
        let raw = [&self.selftext, &self.body, &self.text]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|s| !s.is_empty())?;

        let trimmed = raw.trim();
        if trimmed.is_empty() || BODY_TOMBSTONES.contains(&trimmed.to_lowercase().as_str()) {
            return None;
        }
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> PostContent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_title_trimmed() {
        let post = parse(r#"{"title": "  Hi  "}"#);
        assert_eq!(post.title_text(), Some("Hi"));
    }

    #[test]
    fn test_empty_title_dropped() {
        let post = parse(r#"{"title": "   "}"#);
        assert_eq!(post.title_text(), None);
    }

    #[test]
    fn test_body_priority_order() {
        let post = parse(r#"{"selftext": "from selftext", "body": "from body"}"#);
        assert_eq!(post.body_text(), Some("from selftext"));

        let post = parse(r#"{"body": "from body", "text": "from text"}"#);
        assert_eq!(post.body_text(), Some("from body"));

        let post = parse(r#"{"text": "from text"}"#);
        assert_eq!(post.body_text(), Some("from text"));
    }

    #[test]
    fn test_empty_field_falls_through() {
        let post = parse(r#"{"selftext": "", "body": "from body"}"#);
        assert_eq!(post.body_text(), Some("from body"));
    }

    #[test]
    fn test_tombstone_bodies_suppressed() {
        for value in ["none", "None", "N/A", "[deleted]", "[REMOVED]", "  "] {
            let post = parse(&format!(r#"{{"selftext": "{value}"}}"#));
            assert_eq!(post.body_text(), None, "expected {value:?} suppressed");
        }
    }

    #[test]
    fn test_missing_fields() {
        let post = parse("{}");
        assert_eq!(post.title_text(), None);
        assert_eq!(post.body_text(), None);
    }
}
