//! Single-slot credential store.
//!
//! The backend issues one opaque JWT per login/register. The store keeps
//! exactly that token under a fixed slot with an explicit `set`/`get`/`clear`
//! contract: set on successful login or register, read before every
//! request, cleared on logout. No expiry or refresh logic exists; a token
//! stays valid until overwritten or cleared.
//!
//! Two backends:
//! - [`TokenStore::file`] persists the token on disk so it survives
//!   process restarts (the "scoped storage" of the mobile app it replaces)
//! - [`TokenStore::in_memory`] holds it in a process-local slot, used by
//!   tests and ephemeral sessions

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

/// Errors that can occur reading or writing the credential slot.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// The underlying storage could not be read or written.
    #[error("credential storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single-slot store for the persisted auth token.
///
/// Cheap to clone; clones share the same slot.
#[derive(Clone)]
pub struct TokenStore {
    inner: Arc<Slot>,
}

enum Slot {
    File(PathBuf),
    Memory(RwLock<Option<SecretString>>),
}

impl TokenStore {
    /// A store persisting the token to `path`, surviving restarts.
    #[must_use]
    pub fn file(path: PathBuf) -> Self {
        Self {
            inner: Arc::new(Slot::File(path)),
        }
    }

    /// A volatile store for tests and ephemeral sessions.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Slot::Memory(RwLock::new(None))),
        }
    }

    /// Read the stored token, if any.
    ///
    /// An empty or missing slot is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Io`] if the backing storage cannot be read.
    pub async fn get(&self) -> Result<Option<SecretString>, TokenStoreError> {
        match &*self.inner {
            Slot::File(path) => match tokio::fs::read_to_string(path).await {
                Ok(contents) => {
                    let token = contents.trim();
                    if token.is_empty() {
                        Ok(None)
                    } else {
                        Ok(Some(SecretString::from(token.to_owned())))
                    }
                }
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            },
            Slot::Memory(slot) => Ok(slot.read().await.clone()),
        }
    }

    /// Overwrite the slot with a new token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Io`] if the backing storage cannot be written.
    pub async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        match &*self.inner {
            Slot::File(path) => {
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(path, token).await?;
                debug!(path = %path.display(), "persisted auth token");
                Ok(())
            }
            Slot::Memory(slot) => {
                *slot.write().await = Some(SecretString::from(token.to_owned()));
                Ok(())
            }
        }
    }

    /// Empty the slot. Clearing an already-empty slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Io`] if the backing storage cannot be removed.
    pub async fn clear(&self) -> Result<(), TokenStoreError> {
        match &*self.inner {
            Slot::File(path) => match tokio::fs::remove_file(path).await {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(err) => Err(err.into()),
            },
            Slot::Memory(slot) => {
                *slot.write().await = None;
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &*self.inner {
            Slot::File(path) => f.debug_tuple("TokenStore::File").field(path).finish(),
            Slot::Memory(_) => f.write_str("TokenStore::Memory([REDACTED])"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn expose(token: Option<SecretString>) -> Option<String> {
        token.map(|t| t.expose_secret().to_owned())
    }

    #[tokio::test]
    async fn test_memory_set_get_clear() {
        let store = TokenStore::in_memory();
        assert_eq!(expose(store.get().await.unwrap()), None);

        store.set("abc123").await.unwrap();
        assert_eq!(expose(store.get().await.unwrap()), Some("abc123".into()));

        // Overwrite replaces the slot
        store.set("def456").await.unwrap();
        assert_eq!(expose(store.get().await.unwrap()), Some("def456".into()));

        store.clear().await.unwrap();
        assert_eq!(expose(store.get().await.unwrap()), None);
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth_token");

        let store = TokenStore::file(path.clone());
        store.set("persisted-token").await.unwrap();
        drop(store);

        let reopened = TokenStore::file(path);
        assert_eq!(
            expose(reopened.get().await.unwrap()),
            Some("persisted-token".into())
        );
    }

    #[tokio::test]
    async fn test_file_store_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::file(dir.path().join("nope"));
        assert_eq!(expose(store.get().await.unwrap()), None);
    }

    #[tokio::test]
    async fn test_file_store_unreadable_slot_is_an_error() {
        // A directory in the slot position cannot be read as a token
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::file(dir.path().to_path_buf());
        assert!(store.get().await.is_err());
    }

    #[tokio::test]
    async fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth_token");
        let store = TokenStore::file(path.clone());

        store.set("tok").await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(expose(store.get().await.unwrap()), None);
    }

    #[tokio::test]
    async fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dirs/auth_token");
        let store = TokenStore::file(path);
        store.set("tok").await.unwrap();
        assert!(expose(store.get().await.unwrap()).is_some());
    }

    #[test]
    fn test_debug_redacts_memory_slot() {
        let store = TokenStore::in_memory();
        assert!(format!("{store:?}").contains("REDACTED"));
    }
}
