//! Derived identity and roles

use serde::{Deserialize, Serialize};
use std::fmt;

use super::token::TokenPayload;

/// User roles for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator - passes every role gate
    Admin,
    /// Regular shopper
    User,
}

impl Role {
    /// Map a role claim onto a role. Anything other than the admin
    /// marker counts as a regular user, including an absent claim.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim {
            Some("admin") => Role::Admin,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

/// Identity derived from the stored token.
///
/// Never persisted - recomputed from the token on every query, so a
/// swapped or removed token is reflected immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    /// Expiration time (Unix seconds)
    pub exp: Option<i64>,
}

impl Identity {
    /// Build an identity from a decoded payload, applying the
    /// defaulting rules. `fallback_image_url` comes from the separate
    /// storage key the UI writes avatars under.
    pub fn from_payload(payload: &TokenPayload, fallback_image_url: Option<String>) -> Self {
        Self {
            id: payload.subject().unwrap_or_default().to_string(),
            email: payload.email.clone(),
            role: Role::from_claim(payload.role.as_deref()),
            first_name: payload.first_name.clone(),
            last_name: payload.last_name.clone(),
            image_url: payload.image_url.clone().or(fallback_image_url),
            exp: payload.exp,
        }
    }

    /// Check if this identity is an admin
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name to show in the nav bar: "First Last" when both names are
    /// present, the email otherwise, `None` when neither is known.
    pub fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => self.email.clone(),
        }
    }
}
