//! Persistent key-value storage backing the session layer
//!
//! Stands in for the browser's local storage: a flat string map the
//! login flow writes and the session service reads. The service only
//! ever mutates it to purge a token it could not use.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

/// Storage key the login/signup flow writes the bearer token under.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the avatar URL fallback.
pub const IMAGE_URL_KEY: &str = "userImageUrl";

/// Key-value storage for session state.
///
/// Writes are fire-and-forget: a failing backend degrades to an empty
/// store on the next read rather than surfacing errors through the
/// session predicates.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
