//! Storefront - client-side session and authorization core
//!
//! Decodes the bearer token the storefront UI keeps in persistent
//! storage, derives the current identity, and answers the
//! authorization questions route guards and pages ask. Decoding is
//! advisory only: no signature is verified here, the backend
//! re-checks the token on every API call.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod poll;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::Error;
pub use session::{Identity, Role, RouteGuard, SessionService};
