//! LLM Providers
//!
//! Only the Anthropic Messages API is wired up; the trait in
//! [`crate::provider`] is the seam used by callers and tests.

pub mod anthropic;

pub use anthropic::AnthropicProvider;
