//! Local filesystem storage implementation.
//!
//! Writes the corpus to `{subreddit}_reddit_data.csv` under the configured
//! output directory: a `reddit_text` header followed by one quoted row per
//! entry, UTF-8 encoded.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::Corpus;
use crate::storage::{CorpusStorage, WriteSummary};

/// Column header of the corpus CSV.
const CSV_HEADER: &str = "reddit_text";

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Output path for a subreddit's corpus file.
    fn corpus_path(&self, subreddit: &str) -> PathBuf {
        self.root_dir.join(format!("{subreddit}_reddit_data.csv"))
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

/// Quote a CSV field per RFC 4180.
///
/// Fields containing quotes, commas, or line breaks are wrapped in double
/// quotes, with embedded quotes doubled. Everything else passes through.
fn quote_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the corpus as single-column CSV text.
fn render_csv(corpus: &Corpus) -> String {
    let mut out = String::with_capacity(corpus.len() * 64 + CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for entry in corpus.entries() {
        out.push_str(&quote_field(entry));
        out.push('\n');
    }
    out
}

#[async_trait]
impl CorpusStorage for LocalStorage {
    async fn write_corpus(&self, subreddit: &str, corpus: &Corpus) -> Result<WriteSummary> {
        let path = self.corpus_path(subreddit);
        let csv = render_csv(corpus);
        self.write_bytes(&path, csv.as_bytes()).await?;

        log::info!("Corpus: {} rows written to {}", corpus.len(), path.display());
        Ok(WriteSummary {
            path,
            rows: corpus.len(),
        })
    }
}
