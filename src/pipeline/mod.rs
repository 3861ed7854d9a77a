//! Pipeline entry points for scraper operations.
//!
//! - `run_scrape`: Full listing → harvest → CSV run for one subreddit

pub mod scrape;

pub use scrape::{harvest_subreddit, run_scrape};
