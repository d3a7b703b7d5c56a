pub mod provider;
pub mod providers;

pub use provider::{Completion, CompletionProvider, CompletionRequest, LLMError, Result, Usage};
pub use providers::AnthropicProvider;
