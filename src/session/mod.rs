//! Session derivation and authorization

pub mod guard;
pub mod identity;
pub mod service;
pub mod token;

pub use guard::{GuardOutcome, RouteGuard};
pub use identity::{Identity, Role};
pub use service::{Navigation, SessionService};
pub use token::{decode_token, TokenPayload};
