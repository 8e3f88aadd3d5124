//! Local key-value storage for the admin.
//!
//! Four JSON blobs live under the fixed `petstore:` prefix:
//!
//! - `petstore:users` - stored admin credentials (`Vec<User>`)
//! - `petstore:session` - the single active session, if any
//! - `petstore:promotions` - the full promotion collection
//! - `petstore:settings` - accessibility preferences
//!
//! [`Store`] wraps an injected [`StorageBackend`] with typed accessors.
//! Reads fall back to a type-appropriate default when a key is absent, but
//! fail loud with [`StoreError::Corrupt`] when a present value does not
//! parse; corruption is never silently recovered. A stored empty string is
//! treated as absent, not as corruption.
//!
//! There is exactly one logical writer: no locking, no conflict detection.
//! Two processes sharing the same data directory race with last-writer-wins.

mod file;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Promotion, Session, Settings, User};
use crate::seed;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Storage keys, namespaced under the fixed application prefix.
pub mod keys {
    /// Stored admin credentials.
    pub const USERS: &str = "petstore:users";

    /// The single active session.
    pub const SESSION: &str = "petstore:session";

    /// The full promotion collection.
    pub const PROMOTIONS: &str = "petstore:promotions";

    /// Accessibility preferences.
    pub const SETTINGS: &str = "petstore:settings";
}

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying backend failed to read or write.
    #[error("storage backend error: {0}")]
    Backend(#[from] std::io::Error),

    /// A stored value is present but not valid serialized data.
    #[error("corrupt value for key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw key-value capability the store writes through.
///
/// Injected rather than ambient so tests can substitute [`MemoryBackend`]
/// for the on-disk [`FileBackend`].
pub trait StorageBackend: Send + Sync {
    /// Read the raw value under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw value under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key` entirely. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Typed store adapter over a [`StorageBackend`].
pub struct Store {
    backend: Box<dyn StorageBackend>,
}

impl Store {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Create a store over a fresh in-memory backend (tests, ephemeral runs).
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// Open a store over a file backend rooted at `data_dir`, creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the directory cannot be created.
    pub fn open(data_dir: impl Into<std::path::PathBuf>) -> Result<Self, StoreError> {
        Ok(Self::new(Box::new(FileBackend::new(data_dir)?)))
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Load the stored admin credentials. Absent key yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored value does not parse.
    pub fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.get_value(keys::USERS)?.unwrap_or_default())
    }

    /// Replace the stored admin credentials.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the write fails.
    pub fn save_users(&self, users: &[User]) -> Result<(), StoreError> {
        self.set_value(keys::USERS, &users)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Load the active session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored value does not parse.
    pub fn session(&self) -> Result<Option<Session>, StoreError> {
        self.get_value(keys::SESSION)
    }

    /// Persist the active session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the write fails.
    pub fn save_session(&self, session: &Session) -> Result<(), StoreError> {
        self.set_value(keys::SESSION, session)
    }

    /// Remove the active session. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the removal fails.
    pub fn clear_session(&self) -> Result<(), StoreError> {
        self.backend.remove(keys::SESSION)
    }

    // =========================================================================
    // Promotions
    // =========================================================================

    /// Load the full promotion collection. Absent key yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored value does not parse.
    pub fn promotions(&self) -> Result<Vec<Promotion>, StoreError> {
        Ok(self.get_value(keys::PROMOTIONS)?.unwrap_or_default())
    }

    /// Replace the full promotion collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the write fails.
    pub fn save_promotions(&self, promotions: &[Promotion]) -> Result<(), StoreError> {
        self.set_value(keys::PROMOTIONS, &promotions)
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Load the accessibility settings, defaulting when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored value does not parse.
    pub fn settings(&self) -> Result<Settings, StoreError> {
        Ok(self.get_value(keys::SETTINGS)?.unwrap_or_default())
    }

    /// Replace the accessibility settings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the write fails.
    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.set_value(keys::SETTINGS, settings)
    }

    // =========================================================================
    // Bootstrap
    // =========================================================================

    /// Idempotent first-run bootstrap.
    ///
    /// Seeds the default administrator credential when no users exist and
    /// the sample promotion set when no promotions exist. Never overwrites
    /// a non-empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if an existing value does not parse,
    /// or [`StoreError::Backend`] if a seed write fails.
    pub fn initialize_defaults(&self) -> Result<(), StoreError> {
        if self.users()?.is_empty() {
            self.save_users(&[seed::default_admin()])?;
            tracing::info!(email = seed::DEFAULT_ADMIN_EMAIL, "Seeded default administrator");
        }

        if self.promotions()?.is_empty() {
            let samples = seed::sample_promotions();
            self.save_promotions(&samples)?;
            tracing::info!(count = samples.len(), "Seeded sample promotions");
        }

        Ok(())
    }

    // =========================================================================
    // Raw access
    // =========================================================================

    fn get_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.read(key)? {
            None => Ok(None),
            // An empty stored string counts as absent, not as corruption.
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: key.to_owned(),
                    source,
                }),
        }
    }

    fn set_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Corrupt {
            key: key.to_owned(),
            source,
        })?;
        self.backend.write(key, &raw)
    }
}
