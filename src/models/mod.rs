// src/models/mod.rs

//! Domain models for the scraper application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod comment;
mod config;
mod corpus;
mod post;

// Re-export all public types
pub use comment::{CommentNode, CommentTree};
pub use config::{Config, McpConfig, OutputConfig, ScraperConfig};
pub use corpus::Corpus;
pub use post::PostContent;
