use note_llm::LLMError;
use thiserror::Error;

pub type Result<T, E = NoteError> = std::result::Result<T, E>;

pub const MISSING_API_KEY_MESSAGE: &str =
    "APIキーが設定されていません。設定画面からAPIキーを入力してください。";

#[derive(Debug, Error)]
pub enum NoteError {
    /// No credential is configured. Raised before any network call.
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    /// The external API rejected the credential.
    #[error("{0}")]
    Authentication(String),

    /// Any other failure of the external call, message preserved.
    #[error("{0}")]
    Adapter(String),
}

impl NoteError {
    pub fn missing_api_key() -> Self {
        NoteError::Configuration(MISSING_API_KEY_MESSAGE.to_string())
    }
}

/// A key the API rejects mid-operation is an adapter failure; only the key
/// update path reports [`NoteError::Authentication`].
impl From<LLMError> for NoteError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::Configuration(_) => NoteError::missing_api_key(),
            other => NoteError::Adapter(other.to_string()),
        }
    }
}
