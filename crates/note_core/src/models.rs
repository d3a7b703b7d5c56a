//! Request and response values for the note operations.
//!
//! Field names follow the snake_case JSON contract of the browser UI.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CHAT_TITLE: &str = "無題";

/// Requested artifact kind.
///
/// Free-form strings from the UI land in [`OutputMode::Other`], which renders
/// the article prompt but does not qualify for the article token budget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum OutputMode {
    #[default]
    Article,
    Summary,
    Other(String),
}

impl From<String> for OutputMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "article" => OutputMode::Article,
            "summary" => OutputMode::Summary,
            _ => OutputMode::Other(value),
        }
    }
}

impl From<&str> for OutputMode {
    fn from(value: &str) -> Self {
        OutputMode::from(value.to_string())
    }
}

/// Target length. Unknown values are treated as [`Length::Standard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Length {
    Short,
    #[default]
    Standard,
    Long,
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        Length::from(value.as_str())
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        match value {
            "short" => Length::Short,
            "long" => Length::Long,
            _ => Length::Standard,
        }
    }
}

fn default_chat_title() -> String {
    DEFAULT_CHAT_TITLE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub chat_content: String,
    #[serde(default = "default_chat_title")]
    pub chat_title: String,
    #[serde(default)]
    pub output_mode: OutputMode,
    #[serde(default)]
    pub length: Length,
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

impl GenerationRequest {
    pub fn new(chat_content: impl Into<String>) -> Self {
        Self {
            chat_content: chat_content.into(),
            chat_title: default_chat_title(),
            output_mode: OutputMode::default(),
            length: Length::default(),
            custom_prompt: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CleanupRequest {
    pub content: String,
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastArticle {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsistencyRequest {
    pub new_article: String,
    pub past_articles: Vec<PastArticle>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input: u32,
    pub output: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub title: String,
    pub content: String,
    pub token_usage: TokenUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupResult {
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Contradiction,
    Terminology,
    Tone,
    Duplication,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    pub description: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    #[serde(default)]
    pub issues: Vec<ConsistencyIssue>,
    pub summary: String,
}

impl ConsistencyResult {
    pub fn summary_only(summary: impl Into<String>) -> Self {
        Self {
            issues: Vec::new(),
            summary: summary.into(),
        }
    }
}
