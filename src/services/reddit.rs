// src/services/reddit.rs

//! Reddit MCP client service.
//!
//! Spawns the configured MCP server as a child process and exposes its three
//! tools behind the [`PostSource`] trait. Every response is decoded into a
//! [`ToolReply`] right at the call boundary, so downstream logic never
//! inspects raw text for error markers.

use async_trait::async_trait;
use rmcp::{
    ServiceExt,
    model::CallToolRequestParam,
    service::{RoleClient, RunningService},
    transport::TokioChildProcess,
};
use serde_json::json;
use tokio::process::Command;

use crate::error::{AppError, Result};
use crate::models::McpConfig;

/// Marker substring the server embeds in otherwise well-formed responses
/// when it fails internally.
const SOFT_ERROR_MARKER: &str = "Error processing";

/// A tool response, decoded at the call boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolReply {
    /// Successful payload text
    Payload(String),

    /// The server reported an internal failure for this request
    ServerError,

    /// The response carried no content
    Empty,
}

/// Interface to the Reddit tool server.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the hot-post listing of a subreddit.
    async fn list_hot_posts(&self, subreddit: &str, limit: usize) -> Result<ToolReply>;

    /// Fetch the full content of one post.
    async fn get_post_content(&self, post_id: &str) -> Result<ToolReply>;

    /// Fetch the comment tree of one post.
    async fn get_post_comments(&self, post_id: &str) -> Result<ToolReply>;
}

/// MCP-backed implementation of [`PostSource`].
///
/// Holds the single tool-call session of a run. Calls are issued one at a
/// time; the session lives until [`RedditMcp::shutdown`].
pub struct RedditMcp {
    service: RunningService<RoleClient, ()>,
}

impl RedditMcp {
    /// Spawn the configured MCP server and initialize a client session.
    pub async fn connect(config: &McpConfig) -> Result<Self> {
        let mut command = Command::new(&config.command);
        command.args(&config.args);

        let transport = TokioChildProcess::new(command)?;
        let service = ().serve(transport).await.map_err(AppError::mcp)?;

        log::info!("Connected to Reddit MCP server");
        Ok(Self { service })
    }

    /// Shut the session down, terminating the server process.
    pub async fn shutdown(self) -> Result<()> {
        self.service.cancel().await.map_err(AppError::mcp)?;
        Ok(())
    }

    async fn call_tool(&self, tool: &'static str, args: serde_json::Value) -> Result<ToolReply> {
        let result = self
            .service
            .call_tool(CallToolRequestParam {
                name: tool.into(),
                arguments: args.as_object().cloned(),
            })
            .await
            .map_err(|e| AppError::tool(tool, e))?;

        let text = result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|text| text.text.clone());
        Ok(decode_reply(result.is_error.unwrap_or(false), text))
    }
}

/// Decode a raw tool result into a [`ToolReply`].
///
/// The server signals its own internal failures two ways: the protocol-level
/// error flag, and the soft-error marker embedded in a payload that is
/// otherwise well-formed. Both collapse into [`ToolReply::ServerError`].
fn decode_reply(is_error: bool, text: Option<String>) -> ToolReply {
    if is_error {
        return ToolReply::ServerError;
    }
    match text {
        None => ToolReply::Empty,
        Some(text) if text.contains(SOFT_ERROR_MARKER) => ToolReply::ServerError,
        Some(text) => ToolReply::Payload(text),
    }
}

#[async_trait]
impl PostSource for RedditMcp {
    async fn list_hot_posts(&self, subreddit: &str, limit: usize) -> Result<ToolReply> {
        self.call_tool(
            "get_subreddit_hot_posts",
            json!({ "subreddit_name": subreddit, "limit": limit }),
        )
        .await
    }

    async fn get_post_content(&self, post_id: &str) -> Result<ToolReply> {
        self.call_tool("get_post_content", json!({ "post_id": post_id }))
            .await
    }

    async fn get_post_comments(&self, post_id: &str) -> Result<ToolReply> {
        self.call_tool("get_post_comments", json!({ "post_id": post_id }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payload() {
        let reply = decode_reply(false, Some("{\"title\": \"Hi\"}".to_string()));
        assert_eq!(reply, ToolReply::Payload("{\"title\": \"Hi\"}".to_string()));
    }

    #[test]
    fn test_decode_soft_error_marker() {
        let reply = decode_reply(false, Some("Error processing post abc123".to_string()));
        assert_eq!(reply, ToolReply::ServerError);
    }

    #[test]
    fn test_decode_error_flag_wins() {
        let reply = decode_reply(true, Some("looks fine".to_string()));
        assert_eq!(reply, ToolReply::ServerError);
    }

    #[test]
    fn test_decode_missing_content() {
        assert_eq!(decode_reply(false, None), ToolReply::Empty);
    }
}
