//! Storage abstractions for corpus persistence.
//!
//! One run produces one artifact: a single-column CSV named after the
//! subreddit, written in full once harvesting completes.

pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Corpus;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Full path of the written file
    pub path: PathBuf,

    /// Number of data rows written (excluding the header)
    pub rows: usize,
}

/// Trait for corpus storage backends.
#[async_trait]
pub trait CorpusStorage: Send + Sync {
    /// Write the whole corpus as a single-column CSV derived from the
    /// subreddit name. No partial writes occur before this point.
    async fn write_corpus(&self, subreddit: &str, corpus: &Corpus) -> Result<WriteSummary>;
}
