// src/pipeline/scrape.rs

//! Scrape pipeline.
//!
//! Canonicalizes the subreddit reference, opens the MCP session, walks the
//! hot-post listing, and hands the collected corpus to storage.

use crate::error::Result;
use crate::models::{Config, Corpus};
use crate::services::{PostHarvester, PostSource, RedditMcp, ToolReply, extract_post_ids};
use crate::storage::{CorpusStorage, LocalStorage};
use crate::utils::subreddit_name;

/// Run the full scrape for a subreddit reference.
///
/// The only fatal failures are establishing the MCP session and the listing
/// call itself; everything after that degrades per post. The session is the
/// one shared resource: acquired once here and released before the corpus is
/// written, even when harvesting bails out.
pub async fn run_scrape(config: &Config, reference: &str, post_limit: usize) -> Result<()> {
    let subreddit = subreddit_name(reference);
    log::info!("Scraping subreddit: r/{subreddit}");

    let client = RedditMcp::connect(&config.mcp).await?;
    let harvested = harvest_subreddit(&client, config, &subreddit, post_limit).await;

    if let Err(e) = client.shutdown().await {
        log::warn!("MCP shutdown failed: {e}");
    }
    let corpus = harvested?;

    let storage = LocalStorage::new(&config.output.dir);
    let summary = storage.write_corpus(&subreddit, &corpus).await?;
    log::info!(
        "Data saved to {} ({} rows)",
        summary.path.display(),
        summary.rows
    );

    Ok(())
}

/// Listing and harvest stages, generic over the post source.
pub async fn harvest_subreddit<S: PostSource>(
    source: &S,
    config: &Config,
    subreddit: &str,
    post_limit: usize,
) -> Result<Corpus> {
    log::info!("Fetching hot posts from r/{subreddit}...");

    // The server pages at `page_size`; the requested limit still caps the
    // total number of ids considered.
    let listing_limit = post_limit.min(config.scraper.page_size);
    let listing = match source.list_hot_posts(subreddit, listing_limit).await? {
        ToolReply::Payload(text) => text,
        ToolReply::ServerError => {
            log::warn!("Server returned an error for the hot-post listing");
            String::new()
        }
        ToolReply::Empty => {
            log::warn!("Hot-post listing came back empty");
            String::new()
        }
    };

    let post_ids = extract_post_ids(&listing, post_limit);
    log::info!("Found {} post IDs to fetch", post_ids.len());

    let mut corpus = Corpus::new();
    let harvester = PostHarvester::new(source, &config.scraper);
    let outcome = harvester.harvest_all(&post_ids, &mut corpus).await;

    log::info!(
        "Total scraped: {} posts, {} total entries",
        outcome.posts_processed,
        corpus.len()
    );
    if outcome.content_failures > 0 || outcome.comment_failures > 0 {
        log::warn!(
            "Failures: {} content fetches, {} comment fetches",
            outcome.content_failures,
            outcome.comment_failures
        );
    }

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;

    struct StubSource {
        listing: Result<ToolReply>,
        content: HashMap<String, Result<ToolReply>>,
    }

    fn payload(text: &str) -> Result<ToolReply> {
        Ok(ToolReply::Payload(text.to_string()))
    }

    #[async_trait]
    impl PostSource for StubSource {
        async fn list_hot_posts(&self, _subreddit: &str, _limit: usize) -> Result<ToolReply> {
            match &self.listing {
                Ok(reply) => Ok(reply.clone()),
                Err(_) => Err(AppError::tool("get_subreddit_hot_posts", "down")),
            }
        }

        async fn get_post_content(&self, post_id: &str) -> Result<ToolReply> {
            match self.content.get(post_id) {
                Some(Ok(reply)) => Ok(reply.clone()),
                Some(Err(_)) => Err(AppError::tool("get_post_content", "down")),
                None => Ok(ToolReply::Empty),
            }
        }

        async fn get_post_comments(&self, _post_id: &str) -> Result<ToolReply> {
            Ok(ToolReply::Empty)
        }
    }

    fn fast_config() -> Config {
        let mut config = Config::default();
        config.scraper.pause_ms = 0;
        config
    }

    #[tokio::test]
    async fn test_end_to_end_with_one_failing_post() {
        let listing = "/comments/aaa1/x/ /comments/bbb2/y/ /comments/aaa1/x/ /comments/ccc3/z/";
        let source = StubSource {
            listing: payload(listing),
            content: HashMap::from([
                ("aaa1".to_string(), payload(r#"{"title": "First"}"#)),
                (
                    "bbb2".to_string(),
                    payload(r#"{"title": "Second", "selftext": "Body"}"#),
                ),
                (
                    "ccc3".to_string(),
                    Err(AppError::tool("get_post_content", "down")),
                ),
            ]),
        };

        let corpus = harvest_subreddit(&source, &fast_config(), "rust", 100)
            .await
            .unwrap();

        assert_eq!(corpus.entries(), ["First", "Second", "Body"]);
    }

    #[tokio::test]
    async fn test_listing_server_error_yields_empty_corpus() {
        let source = StubSource {
            listing: Ok(ToolReply::ServerError),
            content: HashMap::new(),
        };

        let corpus = harvest_subreddit(&source, &fast_config(), "rust", 100)
            .await
            .unwrap();

        assert!(corpus.is_empty());
    }

    #[tokio::test]
    async fn test_listing_transport_failure_is_fatal() {
        let source = StubSource {
            listing: Err(AppError::tool("get_subreddit_hot_posts", "down")),
            content: HashMap::new(),
        };

        let result = harvest_subreddit(&source, &fast_config(), "rust", 100).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_post_limit_caps_ids() {
        let listing = "/comments/aaa1/x/ /comments/bbb2/y/ /comments/ccc3/z/";
        let source = StubSource {
            listing: payload(listing),
            content: HashMap::from([
                ("aaa1".to_string(), payload(r#"{"title": "One"}"#)),
                ("bbb2".to_string(), payload(r#"{"title": "Two"}"#)),
                ("ccc3".to_string(), payload(r#"{"title": "Three"}"#)),
            ]),
        };

        let corpus = harvest_subreddit(&source, &fast_config(), "rust", 2)
            .await
            .unwrap();

        assert_eq!(corpus.entries(), ["One", "Two"]);
    }
}
