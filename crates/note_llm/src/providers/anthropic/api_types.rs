//! Anthropic Messages API types for the non-streaming request/response pair.

use serde::{Deserialize, Serialize};

/// Anthropic Messages API request format
#[derive(Debug, Serialize)]
pub struct AnthropicMessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<&'a str>,
    pub messages: Vec<AnthropicMessage<'a>>,
}

/// Anthropic message format
#[derive(Debug, Serialize)]
pub struct AnthropicMessage<'a> {
    pub role: AnthropicRole,
    pub content: &'a str,
}

/// Requests carry a single user turn, so no other role is ever sent.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AnthropicRole {
    User,
}

/// Anthropic Messages API response format
#[derive(Debug, Deserialize)]
pub struct AnthropicMessagesResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub content: Vec<AnthropicResponseContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    pub usage: AnthropicUsage,
}

impl AnthropicMessagesResponse {
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            AnthropicResponseContentBlock::Text { text } => Some(text.as_str()),
            AnthropicResponseContentBlock::Other => None,
        })
    }
}

/// Anthropic response content block
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicResponseContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

/// Anthropic token usage
#[derive(Debug, Deserialize)]
pub struct AnthropicUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}
