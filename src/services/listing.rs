// src/services/listing.rs

//! Post id extraction from hot-post listings.

use std::collections::HashSet;

use regex::Regex;

/// Extract post ids embedded in a raw listing response.
///
/// Ids appear as `/comments/<id>/` path segments in the links the server
/// includes for each thread. The result preserves first-seen order, contains
/// no duplicates, and holds at most `cap` ids.
pub fn extract_post_ids(listing: &str, cap: usize) -> Vec<String> {
    let pattern = Regex::new(r"/comments/([A-Za-z0-9]+)/").expect("hardcoded pattern is valid");

    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for caps in pattern.captures_iter(listing) {
        if ids.len() == cap {
            break;
        }
        let id = &caps[1];
        if seen.insert(id.to_string()) {
            ids.push(id.to_string());
        }
    }
    ids
}
