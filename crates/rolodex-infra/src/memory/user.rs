//! In-memory user store.
//!
//! Implements `UserStore` from `rolodex-core` on top of a `DashMap`, so
//! concurrent adds and lookups never lock the whole map. Writes are upserts:
//! when two writers race on the same id, the last one wins.

use std::path::{Path, PathBuf};

use dashmap::DashMap;
use thiserror::Error;

use rolodex_core::repository::user::UserStore;
use rolodex_types::error::StoreError;
use rolodex_types::user::User;

/// Errors from loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("seed user at index {0} has no id")]
    MissingId(usize),
}

/// Concurrent in-memory implementation of `UserStore`.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: DashMap<String, User>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `users`. Later duplicates replace earlier ones.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::new();
        for user in users {
            store.users.insert(user.id.clone(), user);
        }
        store
    }

    /// Load a store from a JSON file holding an array of users.
    pub async fn load_seed(path: &Path) -> Result<Self, SeedError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let users: Vec<User> =
            serde_json::from_str(&content).map_err(|source| SeedError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(index) = users.iter().position(|u| !u.has_id()) {
            return Err(SeedError::MissingId(index));
        }

        tracing::debug!(path = %path.display(), users = users.len(), "loaded seed users");
        Ok(Self::from_users(users))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for InMemoryUserStore {
    async fn add_user(&self, user: &User) -> Result<(), StoreError> {
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn find_user(&self, id: &str) -> Result<User, StoreError> {
        self.users
            .get(id)
            .map(|r| r.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
