//! Service layer for the scraper application.
//!
//! This module contains the business logic for:
//! - Talking to the Reddit MCP server (`RedditMcp`, `PostSource`)
//! - Post id extraction from listings (`extract_post_ids`)
//! - Paced per-post text collection (`PostHarvester`)

mod harvester;
mod listing;
mod reddit;

pub use harvester::{HarvestOutcome, PostHarvester};
pub use listing::extract_post_ids;
pub use reddit::{PostSource, RedditMcp, ToolReply};
