//! Session service

use chrono::Utc;

use crate::error::{Error, Result};
use crate::store::{TokenStore, IMAGE_URL_KEY, TOKEN_KEY};

use super::identity::{Identity, Role};
use super::token::decode_token;

/// Seconds before expiry at which a refresh becomes advisable.
pub const REFRESH_WARNING_SECS: i64 = 300;

/// Navigation command emitted by operations that must move the user.
///
/// Replace semantics: back-navigation must not return to the page the
/// user was sent away from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target: String,
    pub replace: bool,
}

impl Navigation {
    pub fn replace(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            replace: true,
        }
    }
}

/// Single source of truth for "who is the current user" and "what are
/// they allowed to do", derived from the token in storage.
///
/// Stateless apart from the store: every query re-reads and re-decodes
/// the token. A token that cannot be used (malformed or expired) is
/// purged on the spot so it never survives past one failed query.
///
/// Advisory only. The payload is decoded without signature
/// verification; real authorization happens server-side on every API
/// call, and nothing here is a security boundary.
pub struct SessionService<S: TokenStore> {
    store: S,
    login_path: String,
    refresh_warning_secs: i64,
}

impl<S: TokenStore> SessionService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            login_path: "/login".to_string(),
            refresh_warning_secs: REFRESH_WARNING_SECS,
        }
    }

    /// Override the login path logout navigates to.
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Override the expiry warning threshold.
    pub fn with_refresh_warning_secs(mut self, secs: i64) -> Self {
        self.refresh_warning_secs = secs;
        self
    }

    /// The raw bearer token, if any. Used for Authorization headers.
    pub fn bearer_token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Derive the current identity from the stored token.
    ///
    /// Distinguishes missing, malformed and expired tokens for callers
    /// that care; the boolean predicates collapse all three to "no
    /// session". Malformed and expired tokens are removed from storage
    /// before the error is returned.
    pub fn current_user(&self) -> Result<Identity> {
        let token = self.store.get(TOKEN_KEY).ok_or(Error::TokenMissing)?;

        let payload = match decode_token(&token) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!("Purging undecodable token: {}", err);
                self.store.remove(TOKEN_KEY);
                return Err(err);
            }
        };

        if payload.is_expired(Utc::now().timestamp()) {
            tracing::debug!("Purging expired token");
            self.store.remove(TOKEN_KEY);
            return Err(Error::TokenExpired);
        }

        let fallback_image = self.store.get(IMAGE_URL_KEY);
        Ok(Identity::from_payload(&payload, fallback_image))
    }

    /// True iff a valid, unexpired session exists.
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_ok()
    }

    /// True iff the current user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.current_user()
            .map(|user| user.role == Role::Admin)
            .unwrap_or(false)
    }

    /// True iff the current user holds the regular user role.
    pub fn is_user(&self) -> bool {
        self.current_user()
            .map(|user| user.role == Role::User)
            .unwrap_or(false)
    }

    /// Role gate: no session fails closed, admin passes every check,
    /// everyone else needs an exact match.
    pub fn has_permission(&self, required: Role) -> bool {
        match self.current_user() {
            Ok(user) => user.role == Role::Admin || user.role == required,
            Err(_) => false,
        }
    }

    /// Name to greet the user with; "Guest" when there is no session.
    pub fn display_name(&self) -> String {
        self.current_user()
            .ok()
            .and_then(|user| user.display_name())
            .unwrap_or_else(|| "Guest".to_string())
    }

    /// True while a valid session is within the warning window of its
    /// expiry but not yet past it.
    ///
    /// Hook point for proactive refresh; today it only logs.
    pub fn is_token_expiring_soon(&self) -> bool {
        let Ok(user) = self.current_user() else {
            return false;
        };
        let Some(exp) = user.exp else {
            return false;
        };

        let remaining = exp - Utc::now().timestamp();
        let expiring = remaining > 0 && remaining < self.refresh_warning_secs;
        if expiring {
            tracing::warn!("Session token expires in {}s", remaining);
        }
        expiring
    }

    /// Clear the session and hand back the navigation that sends the
    /// user to the login page. The full-redirect contract guarantees
    /// any in-memory state is discarded by the navigation itself.
    pub fn logout(&self) -> Navigation {
        self.store.remove(TOKEN_KEY);
        tracing::info!("Session cleared");
        Navigation::replace(self.login_path.clone())
    }
}
