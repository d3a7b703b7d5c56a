//! Anthropic provider and request-building helpers.

pub mod api_types;

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};

use crate::provider::{Completion, CompletionProvider, CompletionRequest, LLMError, Result, Usage};
use api_types::{AnthropicMessage, AnthropicMessagesRequest, AnthropicMessagesResponse, AnthropicRole};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API provider.
///
/// The key is not held here: it travels with each [`CompletionRequest`] so a
/// credential update applies to the next call without rebuilding the client.
#[derive(Clone)]
pub struct AnthropicProvider {
    client: Client,
    base_url: String,
}

impl Default for AnthropicProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AnthropicProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_headers(&self, api_key: &str) -> Result<HeaderMap> {
        use reqwest::header::{HeaderValue, CONTENT_TYPE};

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| LLMError::Auth(format!("Invalid API key: {}", e)))?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion> {
        if request.api_key.is_empty() {
            return Err(LLMError::Configuration(
                "Anthropic API key is not set".to_string(),
            ));
        }

        let headers = self.build_headers(&request.api_key)?;
        let body = build_anthropic_request(&request);

        log::debug!(
            "Anthropic request: model={}, max_tokens={}, user_message_len={}",
            request.model,
            request.max_tokens,
            request.user_message.len()
        );

        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(LLMError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(LLMError::Http)?;

            if status == 401 || status == 403 {
                return Err(LLMError::Auth(format!(
                    "Anthropic authentication failed: {}. Please check your API key.",
                    text
                )));
            }

            return Err(LLMError::Api(format!(
                "Anthropic API error: HTTP {}: {}",
                status, text
            )));
        }

        let bytes = response.bytes().await.map_err(LLMError::Http)?;
        let parsed: AnthropicMessagesResponse = serde_json::from_slice(&bytes)?;
        log::debug!(
            "Anthropic response: stop_reason={}, input_tokens={}, output_tokens={}",
            parsed.stop_reason.as_deref().unwrap_or("none"),
            parsed.usage.input_tokens,
            parsed.usage.output_tokens
        );
        completion_from_response(parsed)
    }
}

/// Build an Anthropic Messages API request body for a single user turn.
pub fn build_anthropic_request(request: &CompletionRequest) -> AnthropicMessagesRequest<'_> {
    AnthropicMessagesRequest {
        model: &request.model,
        max_tokens: request.max_tokens,
        system: request.system.as_deref(),
        messages: vec![AnthropicMessage {
            role: AnthropicRole::User,
            content: &request.user_message,
        }],
    }
}

fn completion_from_response(response: AnthropicMessagesResponse) -> Result<Completion> {
    let Some(text) = response.first_text() else {
        return Err(LLMError::Api(format!(
            "Anthropic response {} contained no text block",
            response.id.as_deref().unwrap_or("<unknown>")
        )));
    };

    Ok(Completion {
        text: text.to_string(),
        usage: Usage {
            input_tokens: response.usage.input_tokens,
            output_tokens: response.usage.output_tokens,
        },
    })
}


#[cfg(test)]
mod anthropic_response_parse {
    use super::api_types::AnthropicMessagesResponse;
    use crate::provider::LLMError;

    #[test]
    fn test_first_text_block_and_usage_are_returned_verbatim() {
        let data = r##"{"id":"msg_1","type":"message","role":"assistant","content":[{"type":"text","text":"# Title\nBody"},{"type":"text","text":"ignored"}],"model":"claude-test","stop_reason":"end_turn","usage":{"input_tokens":12,"output_tokens":34}}"##;
        let parsed: AnthropicMessagesResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.stop_reason.as_deref(), Some("end_turn"));

        let completion = super::completion_from_response(parsed).unwrap();

        assert_eq!(completion.text, "# Title\nBody");
        assert_eq!(completion.usage.input_tokens, 12);
        assert_eq!(completion.usage.output_tokens, 34);
    }

    #[test]
    fn test_non_text_blocks_are_skipped() {
        let data = r#"{"id":"msg_2","content":[{"type":"thinking","thinking":"..."},{"type":"text","text":"answer"}],"usage":{"input_tokens":1,"output_tokens":2}}"#;
        let parsed: AnthropicMessagesResponse = serde_json::from_str(data).unwrap();

        let completion = super::completion_from_response(parsed).unwrap();

        assert_eq!(completion.text, "answer");
    }

    #[test]
    fn test_response_without_text_is_an_api_error() {
        let data = r#"{"id":"msg_3","content":[],"usage":{"input_tokens":1,"output_tokens":0}}"#;
        let parsed: AnthropicMessagesResponse = serde_json::from_str(data).unwrap();

        match super::completion_from_response(parsed) {
            Err(LLMError::Api(message)) => assert!(message.contains("msg_3")),
            other => panic!("expected LLMError::Api, got {other:?}"),
        }
    }
}
