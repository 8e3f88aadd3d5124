//! Session record for admin authentication.

use serde::{Deserialize, Serialize};

/// The single persisted session denoting the currently authenticated admin.
///
/// Created on successful login, destroyed on logout. Not an expiring token:
/// it persists indefinitely until explicit logout or external clearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Email of the logged-in admin.
    pub email: String,
    /// Always `true` for a session written by login; kept in the record
    /// because the storage format carries it.
    pub is_authenticated: bool,
}

impl Session {
    /// Create an authenticated session for the given email.
    #[must_use]
    pub fn authenticated(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_authenticated: true,
        }
    }
}
