//! Settings and health payloads exchanged with the browser UI
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub struct ApiKeyRequest {
    pub api_key: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiKeySaved {
    pub success: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CredentialStatus {
    pub api_key_configured: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub api_key_configured: bool,
}
