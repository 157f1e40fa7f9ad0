//! Authentication types for JWT tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role for an event organizer account.
pub const ROLE_ORGANIZER: &str = "organizer";
/// Role for a solution provider account.
pub const ROLE_PROVIDER: &str = "provider";
/// Role for an administrator account.
pub const ROLE_ADMIN: &str = "admin";

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// User's role.
    pub role: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, role: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns true if the claims carry the organizer role.
    #[must_use]
    pub fn is_organizer(&self) -> bool {
        self.role == ROLE_ORGANIZER
    }

    /// Returns true if the claims carry the provider role.
    #[must_use]
    pub fn is_provider(&self) -> bool {
        self.role == ROLE_PROVIDER
    }

    /// Returns true if the claims carry the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}
