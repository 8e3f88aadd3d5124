//! Authentication state manager.
//!
//! Single-tier authentication against the locally stored credential list.
//! Bad credentials and duplicate registrations are reported through boolean
//! returns, never as errors; only store failures (corruption, backend I/O)
//! surface as `Err`.

use crate::models::{Session, User};
use crate::store::{Store, StoreError};

/// Authentication state over the local credential store.
pub struct AuthManager<'a> {
    store: &'a Store,
    user: Option<Session>,
    loading: bool,
}

impl<'a> AuthManager<'a> {
    /// Create an uninitialized manager. `loading` stays `true` and no
    /// session is visible until [`initialize`](Self::initialize) runs.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            store,
            user: None,
            loading: true,
        }
    }

    /// Bootstrap defaults, load any persisted session, and clear the
    /// loading flag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read or seeded.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        self.store.initialize_defaults()?;
        self.user = self.store.session()?;
        self.loading = false;
        Ok(())
    }

    /// The active session, if an admin is logged in.
    #[must_use]
    pub const fn user(&self) -> Option<&Session> {
        self.user.as_ref()
    }

    /// Whether [`initialize`](Self::initialize) has not completed yet.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Log in with an email/password pair.
    ///
    /// Both fields are compared case-sensitively against the stored
    /// credential list. On a match, a fresh authenticated session is
    /// persisted and returned state updated; otherwise nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the credential list cannot be read or the
    /// session cannot be written.
    pub fn login(&mut self, email: &str, password: &str) -> Result<bool, StoreError> {
        let users = self.store.users()?;
        let matched = users
            .iter()
            .any(|u| u.email == email && u.password == password);

        if !matched {
            tracing::debug!(email, "Login rejected");
            return Ok(false);
        }

        let session = Session::authenticated(email);
        self.store.save_session(&session)?;
        self.user = Some(session);
        tracing::info!(email, "Admin logged in");
        Ok(true)
    }

    /// Log out, clearing the persisted session. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the session cannot be removed.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.store.clear_session()?;
        self.user = None;
        tracing::info!("Admin logged out");
        Ok(())
    }

    /// Register a new credential.
    ///
    /// Returns `Ok(false)` without changes when the exact email is already
    /// registered. Does not log the new credential in.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the credential list cannot be read or
    /// written.
    pub fn register(&self, email: &str, password: &str) -> Result<bool, StoreError> {
        let mut users = self.store.users()?;
        if users.iter().any(|u| u.email == email) {
            tracing::debug!(email, "Registration rejected: email already exists");
            return Ok(false);
        }

        users.push(User::new(email, password));
        self.store.save_users(&users)?;
        tracing::info!(email, "Admin registered");
        Ok(true)
    }
}
