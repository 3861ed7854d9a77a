//! The accumulated text corpus.

/// Ordered, append-only collection of extracted text entries.
///
/// Owned by a single run; grows monotonically and is handed off to the
/// storage layer once, at the end.
#[derive(Debug, Default)]
pub struct Corpus {
    entries: Vec<String>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one text entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Number of entries collected so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in append order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut corpus = Corpus::new();
        corpus.push("first");
        corpus.push("second".to_string());

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries(), ["first", "second"]);
    }

    #[test]
    fn test_empty() {
        let corpus = Corpus::new();
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
    }
}
