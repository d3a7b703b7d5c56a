pub mod credential;
pub mod env_file;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod service;
pub mod settings;

pub use credential::Credential;
pub use error::{NoteError, Result};
pub use models::*;
pub use service::NoteService;
pub use settings::GenerationSettings;
