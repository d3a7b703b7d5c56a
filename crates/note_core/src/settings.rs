pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const MAX_TOKENS_ARTICLE: u32 = 4096;
pub const MAX_TOKENS_SUMMARY: u32 = 2048;
pub const MAX_TOKENS_CLEANUP: u32 = 4096;
pub const MAX_TOKENS_CONSISTENCY: u32 = 2048;
pub const MAX_TOKENS_KEY_CHECK: u32 = 10;

/// Model id and per-operation token budgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens_article: u32,
    pub max_tokens_summary: u32,
    pub max_tokens_cleanup: u32,
    pub max_tokens_consistency: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens_article: MAX_TOKENS_ARTICLE,
            max_tokens_summary: MAX_TOKENS_SUMMARY,
            max_tokens_cleanup: MAX_TOKENS_CLEANUP,
            max_tokens_consistency: MAX_TOKENS_CONSISTENCY,
        }
    }
}
