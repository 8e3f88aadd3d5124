//! Admin credential record.

use serde::{Deserialize, Serialize};

/// A stored admin credential.
///
/// Credentials are compared byte-for-byte: email matching is case-sensitive
/// and the password is stored and checked as plaintext. Hardening the
/// credential store is an explicit non-goal of this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login email. Unique within the stored user list (exact match).
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl User {
    /// Create a new credential record.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
