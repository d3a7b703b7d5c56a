//! Line-oriented `KEY=value` file used to persist the API key.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Rewrite the `key=` line of `path` in place, or append it.
///
/// Reads the whole file, replaces every line starting with `key=`, and writes
/// the whole file back. A missing file is created.
pub async fn update_env_file(path: &Path, key: &str, value: &str) -> io::Result<()> {
    let existing = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err),
    };

    let prefix = format!("{key}=");
    let assignment = format!("{key}={value}\n");
    let mut found = false;
    let mut updated = String::with_capacity(existing.len() + assignment.len());

    for line in existing.split_inclusive('\n') {
        if line.starts_with(&prefix) {
            updated.push_str(&assignment);
            found = true;
        } else {
            updated.push_str(line);
        }
    }

    if !found {
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(&assignment);
    }

    fs::write(path, updated).await
}

/// Fire-and-forget persistence of a single variable.
///
/// Failures are logged and dropped; the caller's operation never fails
/// because of them.
#[derive(Debug, Clone)]
pub struct EnvFilePersister {
    path: PathBuf,
}

impl EnvFilePersister {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn persist(&self, key: &str, value: &str) {
        match update_env_file(&self.path, key, value).await {
            Ok(()) => log::info!("Persisted {} to {}", key, self.path.display()),
            Err(err) => log::warn!(
                "Failed to persist {} to {}: {}",
                key,
                self.path.display(),
                err
            ),
        }
    }
}
