//! Process-wide API key.
//!
//! Operations take a snapshot of the key when they start. A [`Credential::set`]
//! is seen by every operation that starts after it returns; operations already
//! in flight keep the key they read, and there is no ordering between the two.

use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct Credential {
    api_key: Arc<RwLock<String>>,
}

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Arc::new(RwLock::new(api_key.into())),
        }
    }

    pub async fn current(&self) -> String {
        self.api_key.read().await.clone()
    }

    pub async fn is_configured(&self) -> bool {
        !self.api_key.read().await.is_empty()
    }

    pub async fn set(&self, api_key: impl Into<String>) {
        *self.api_key.write().await = api_key.into();
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_is_visible_to_clones() {
        let credential = Credential::default();
        let shared = credential.clone();
        assert!(!shared.is_configured().await);

        credential.set("sk-ant-1").await;

        assert!(shared.is_configured().await);
        assert_eq!(shared.current().await, "sk-ant-1");
    }

    #[test]
    fn test_debug_output_hides_the_key() {
        let credential = Credential::new("sk-secret");
        assert!(!format!("{credential:?}").contains("sk-secret"));
    }
}
