//! Nested comment tree structures.

use serde::Deserialize;

/// Comment body values that indicate deleted content.
const COMMENT_TOMBSTONES: [&str; 2] = ["[deleted]", "[removed]"];

/// A single comment: an optional body plus ordered replies.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentNode {
    /// Comment body (absent on tombstoned comments)
    #[serde(default)]
    pub body: Option<String>,

    /// Child comments, in display order
    #[serde(default)]
    pub replies: Option<Vec<CommentTree>>,
}

/// A comment tree fragment as returned by `get_post_comments`.
///
/// The server mixes single nodes and lists of nodes at any level, so the
/// traversal dispatches on one untagged union. Values of any other shape are
/// skipped silently rather than failing the walk.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CommentTree {
    /// A list of sibling trees
    Many(Vec<CommentTree>),

    /// A single comment node
    Node(CommentNode),

    /// Anything else (ignored)
    Other(serde_json::Value),
}

impl CommentTree {
    /// Flatten the tree into comment bodies, depth-first pre-order.
    ///
    /// A node's own body comes before its replies; siblings keep their order.
    /// Empty and tombstoned bodies are dropped.
    pub fn flatten(&self) -> Vec<String> {
        let mut bodies = Vec::new();
        self.collect_bodies(&mut bodies);
        bodies
    }

    fn collect_bodies(&self, out: &mut Vec<String>) {
        match self {
            CommentTree::Many(items) => {
                for item in items {
                    item.collect_bodies(out);
                }
            }
            CommentTree::Node(node) => {
                if let Some(body) = node.body.as_deref() {
                    let trimmed = body.trim();
                    if !trimmed.is_empty() && !COMMENT_TOMBSTONES.contains(&trimmed) {
                        out.push(trimmed.to_string());
                    }
                }
                if let Some(replies) = &node.replies {
                    for reply in replies {
                        reply.collect_bodies(out);
                    }
                }
            }
            CommentTree::Other(_) => {}
        }
    }
}
