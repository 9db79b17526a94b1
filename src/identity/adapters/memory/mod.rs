//! In-memory user directory for tests and local wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{UserId, UserProfile},
    ports::{DirectoryError, DirectoryResult, UserDirectory},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a profile.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::StoreUnavailable`] when the lock is poisoned.
    pub fn insert(&self, profile: UserProfile) -> DirectoryResult<()> {
        let mut users = self.users.write().map_err(|err| {
            DirectoryError::store_unavailable(std::io::Error::other(err.to_string()))
        })?;
        users.insert(profile.id, profile);
        Ok(())
    }

    /// Removes a profile, simulating a deleted account.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::StoreUnavailable`] when the lock is poisoned.
    pub fn remove(&self, id: UserId) -> DirectoryResult<Option<UserProfile>> {
        let mut users = self.users.write().map_err(|err| {
            DirectoryError::store_unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.remove(&id))
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_many(&self, ids: &[UserId]) -> DirectoryResult<Vec<UserProfile>> {
        let users = self.users.read().map_err(|err| {
            DirectoryError::store_unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }
}
