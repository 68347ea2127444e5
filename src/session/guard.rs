//! Route guard

use crate::store::TokenStore;

use super::service::SessionService;

/// Guard configuration for a protected route.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    /// Restrict the route to admins.
    pub admin_only: bool,
    /// Where unauthenticated visitors are sent.
    pub redirect_to: String,
    /// Where authenticated non-admins are sent from admin-only routes.
    pub fallback: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self {
            admin_only: false,
            redirect_to: "/login".to_string(),
            fallback: "/".to_string(),
        }
    }
}

/// Outcome of evaluating a guard.
///
/// Redirects carry replace semantics so back-navigation does not land
/// on the guarded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected content.
    Render,
    /// Client-side redirect (replace, not push).
    Redirect(String),
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admin_only(mut self) -> Self {
        self.admin_only = true;
        self
    }

    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }

    pub fn fallback(mut self, path: impl Into<String>) -> Self {
        self.fallback = path.into();
        self
    }

    /// Decide what navigating to the guarded route should do.
    ///
    /// Re-derived from the token on every call; there is no cached
    /// session state to invalidate.
    pub fn evaluate<S: TokenStore>(&self, session: &SessionService<S>) -> GuardOutcome {
        if !session.is_authenticated() {
            return GuardOutcome::Redirect(self.redirect_to.clone());
        }

        if self.admin_only && !session.is_admin() {
            return GuardOutcome::Redirect(self.fallback.clone());
        }

        GuardOutcome::Render
    }
}
