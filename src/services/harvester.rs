// src/services/harvester.rs

//! Paced, sequential post text collection.
//!
//! Drives a batch of post ids through content and comment fetches in strict
//! batch order, one post at a time, pausing after every few posts to stay
//! within the server's rate expectations. Failures on one id are reported
//! and contained; they never abort the rest of the batch.

use std::time::Duration;

use crate::models::{CommentTree, Corpus, PostContent, ScraperConfig};
use crate::services::{PostSource, ToolReply};

/// Summary of a harvest run.
#[derive(Debug, Default)]
pub struct HarvestOutcome {
    /// Posts attempted (always the full batch)
    pub posts_processed: usize,

    /// Content fetches that contributed nothing (transport, server, or parse)
    pub content_failures: usize,

    /// Comment fetches that contributed nothing (transport, server, or parse)
    pub comment_failures: usize,
}

/// Collects post and comment text for a batch of post ids.
pub struct PostHarvester<'a, S: PostSource> {
    source: &'a S,
    config: &'a ScraperConfig,
}

impl<'a, S: PostSource> PostHarvester<'a, S> {
    /// Create a harvester over the given post source.
    pub fn new(source: &'a S, config: &'a ScraperConfig) -> Self {
        Self { source, config }
    }

    /// Process every id in batch order, appending extracted text to `corpus`.
    ///
    /// No reordering and no concurrent fetches. After every
    /// `posts_per_pause` posts a progress line is logged and the task sleeps
    /// for `pause_ms`.
    pub async fn harvest_all(&self, post_ids: &[String], corpus: &mut Corpus) -> HarvestOutcome {
        let mut outcome = HarvestOutcome::default();
        let total = post_ids.len();

        for post_id in post_ids {
            log::info!(
                "Fetching post {}/{} (ID: {})",
                outcome.posts_processed + 1,
                total,
                post_id
            );
            self.collect_post(post_id, corpus, &mut outcome).await;
            outcome.posts_processed += 1;

            if outcome.posts_processed % self.config.posts_per_pause == 0 {
                log::info!(
                    "Progress: {}/{} posts processed, {} total entries",
                    outcome.posts_processed,
                    total,
                    corpus.len()
                );
                if self.config.pause_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(self.config.pause_ms)).await;
                }
            }
        }

        outcome
    }

    /// Collect title, body, and comment text for one post.
    ///
    /// Appends in a fixed order: title, then body, then comment bodies in
    /// tree pre-order. Comments are fetched regardless of how the content
    /// fetch went.
    async fn collect_post(&self, post_id: &str, corpus: &mut Corpus, outcome: &mut HarvestOutcome) {
        match self.source.get_post_content(post_id).await {
            Ok(ToolReply::Payload(text)) => match serde_json::from_str::<PostContent>(&text) {
                Ok(content) => {
                    if let Some(title) = content.title_text() {
                        corpus.push(title);
                    }
                    if let Some(body) = content.body_text() {
                        corpus.push(body);
                    }
                    log::debug!("Post content added for {post_id}");
                }
                Err(e) => {
                    outcome.content_failures += 1;
                    log::warn!("Could not parse post JSON for {post_id}: {e}");
                }
            },
            Ok(ToolReply::ServerError) => {
                outcome.content_failures += 1;
                log::warn!("Server returned an error for post {post_id}, skipping content");
            }
            Ok(ToolReply::Empty) => {
                log::debug!("No content returned for post {post_id}");
            }
            Err(e) => {
                outcome.content_failures += 1;
                log::warn!("Error fetching post {post_id}: {e}");
            }
        }

        match self.source.get_post_comments(post_id).await {
            Ok(ToolReply::Payload(text)) => match serde_json::from_str::<CommentTree>(&text) {
                Ok(tree) => {
                    let bodies = tree.flatten();
                    log::debug!("Added {} comments for {post_id}", bodies.len());
                    for body in bodies {
                        corpus.push(body);
                    }
                }
                Err(e) => {
                    outcome.comment_failures += 1;
                    log::warn!("Could not parse comments JSON for {post_id}: {e}");
                }
            },
            Ok(ToolReply::ServerError) => {
                outcome.comment_failures += 1;
                log::warn!("Server returned an error for post {post_id}, skipping comments");
            }
            Ok(ToolReply::Empty) => {
                log::debug!("No comments returned for post {post_id}");
            }
            Err(e) => {
                outcome.comment_failures += 1;
                log::warn!("Error fetching comments for {post_id}: {e}");
            }
        }
    }
}
