//! Utility functions and helpers.

use url::Url;

/// Canonical subreddit name from a user-supplied reference.
///
/// Accepts the `r/<name>` shorthand or a full URL whose path contains an
/// `r` segment followed by the name. Anything else is returned unchanged so
/// the caller can still attempt the scrape with the raw input.
pub fn subreddit_name(reference: &str) -> String {
    if let Some(name) = reference.strip_prefix("r/") {
        return name.to_string();
    }

    if let Ok(parsed) = Url::parse(reference) {
        if let Some(segments) = parsed.path_segments() {
            let parts: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();
            if let Some(pos) = parts.iter().position(|s| *s == "r") {
                if let Some(name) = parts.get(pos + 1) {
                    return (*name).to_string();
                }
            }
        }
    }

    reference.to_string()
}
