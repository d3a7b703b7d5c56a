//! The three note operations plus the API key update.
//!
//! Each operation reads the credential once, builds its prompt, performs a
//! single [`CompletionProvider::complete`] call and shapes the result.

use std::sync::Arc;

use note_llm::{CompletionProvider, CompletionRequest, LLMError};

use crate::credential::Credential;
use crate::env_file::{EnvFilePersister, API_KEY_VAR};
use crate::error::{NoteError, Result};
use crate::models::{
    CleanupRequest, CleanupResult, ConsistencyRequest, ConsistencyResult, GenerationRequest,
    GenerationResult, OutputMode, TokenUsage,
};
use crate::normalizer::{extract_title, parse_consistency_result, render_past_articles};
use crate::prompts::{
    build_generation_prompt, consistency_user_message, generation_user_message,
    resolve_system_prompt, CLEANUP_PROMPT, CONSISTENCY_CHECK_PROMPT, NO_PAST_ARTICLES_SUMMARY,
};
use crate::settings::{GenerationSettings, MAX_TOKENS_KEY_CHECK};

const KEY_CHECK_MESSAGE: &str = "test";
const INVALID_API_KEY_MESSAGE: &str = "無効なAPIキーです。";
const EMPTY_API_KEY_MESSAGE: &str = "APIキーを入力してください。";

pub struct NoteService {
    provider: Arc<dyn CompletionProvider>,
    credential: Credential,
    settings: GenerationSettings,
    persister: Option<EnvFilePersister>,
}

impl NoteService {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        credential: Credential,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            provider,
            credential,
            settings,
            persister: None,
        }
    }

    /// Persist accepted API keys to this env file.
    pub fn with_persister(mut self, persister: EnvFilePersister) -> Self {
        self.persister = Some(persister);
        self
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub async fn is_configured(&self) -> bool {
        self.credential.is_configured().await
    }

    /// Only [`OutputMode::Article`] gets the article budget.
    pub fn generation_budget(&self, output_mode: &OutputMode) -> u32 {
        match output_mode {
            OutputMode::Article => self.settings.max_tokens_article,
            OutputMode::Summary | OutputMode::Other(_) => self.settings.max_tokens_summary,
        }
    }

    async fn require_api_key(&self) -> Result<String> {
        let api_key = self.credential.current().await;
        if api_key.is_empty() {
            return Err(NoteError::missing_api_key());
        }
        Ok(api_key)
    }

    pub async fn generate_article(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let api_key = self.require_api_key().await?;

        let system = resolve_system_prompt(request.custom_prompt.as_deref(), || {
            build_generation_prompt(&request.output_mode, request.length)
        });
        let max_tokens = self.generation_budget(&request.output_mode);

        log::info!(
            "Generating {:?} ({:?}), chat_len={}, max_tokens={}, custom_prompt={}",
            request.output_mode,
            request.length,
            request.chat_content.len(),
            max_tokens,
            request.custom_prompt.as_deref().is_some_and(|p| !p.is_empty())
        );

        let completion = self
            .provider
            .complete(
                CompletionRequest::new(
                    api_key,
                    self.settings.model.clone(),
                    generation_user_message(&request.chat_title, &request.chat_content),
                    max_tokens,
                )
                .with_system(system),
            )
            .await?;

        let title = extract_title(&completion.text, &request.chat_title);

        Ok(GenerationResult {
            title,
            content: completion.text,
            token_usage: TokenUsage {
                input: completion.usage.input_tokens,
                output: completion.usage.output_tokens,
            },
        })
    }

    pub async fn cleanup_text(&self, request: CleanupRequest) -> Result<CleanupResult> {
        let api_key = self.require_api_key().await?;

        let system = resolve_system_prompt(request.custom_prompt.as_deref(), || {
            CLEANUP_PROMPT.to_string()
        });

        log::info!("Cleaning up text, content_len={}", request.content.len());

        let completion = self
            .provider
            .complete(
                CompletionRequest::new(
                    api_key,
                    self.settings.model.clone(),
                    request.content,
                    self.settings.max_tokens_cleanup,
                )
                .with_system(system),
            )
            .await?;

        Ok(CleanupResult {
            content: completion.text,
        })
    }

    pub async fn check_consistency(&self, request: ConsistencyRequest) -> Result<ConsistencyResult> {
        if request.past_articles.is_empty() {
            return Ok(ConsistencyResult::summary_only(NO_PAST_ARTICLES_SUMMARY));
        }

        let api_key = self.require_api_key().await?;
        let past_block = render_past_articles(&request.past_articles);

        log::info!(
            "Checking consistency against {} past articles",
            request.past_articles.len()
        );

        let completion = self
            .provider
            .complete(
                CompletionRequest::new(
                    api_key,
                    self.settings.model.clone(),
                    consistency_user_message(&request.new_article, &past_block),
                    self.settings.max_tokens_consistency,
                )
                .with_system(CONSISTENCY_CHECK_PROMPT),
            )
            .await?;

        Ok(parse_consistency_result(&completion.text))
    }

    /// Validate `api_key` with a minimal live call, then adopt and persist it.
    pub async fn update_api_key(&self, api_key: &str) -> Result<()> {
        if api_key.is_empty() {
            return Err(NoteError::Validation(EMPTY_API_KEY_MESSAGE.to_string()));
        }

        let check = CompletionRequest::new(
            api_key,
            self.settings.model.clone(),
            KEY_CHECK_MESSAGE,
            MAX_TOKENS_KEY_CHECK,
        );
        match self.provider.complete(check).await {
            Ok(_) => {}
            Err(LLMError::Auth(message)) => {
                log::warn!("API key rejected: {}", message);
                return Err(NoteError::Authentication(INVALID_API_KEY_MESSAGE.to_string()));
            }
            Err(err) => {
                return Err(NoteError::Adapter(format!(
                    "APIキーの検証に失敗しました: {err}"
                )));
            }
        }

        self.credential.set(api_key).await;
        log::info!("API key updated");

        if let Some(persister) = &self.persister {
            persister.persist(API_KEY_VAR, api_key).await;
        }

        Ok(())
    }
}
