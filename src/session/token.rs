//! Bearer token decoding
//!
//! Reads the payload segment of a three-segment dot-separated token.
//! No signature verification happens here: this establishes the shape
//! of a token, not trust in it. The backend verifies the signature on
//! every API call; the client only decides what to render.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Claims read from the token payload. Every field the backend might
/// omit is optional; defaulting happens when the identity is derived.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPayload {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,

    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    #[serde(default, rename = "firstName")]
    pub first_name: Option<String>,

    #[serde(default, rename = "lastName")]
    pub last_name: Option<String>,

    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,

    /// Expiration time (Unix seconds)
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenPayload {
    /// Subject identifier, trying `id`, `userId` and `sub` in that order.
    pub fn subject(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.user_id.as_deref())
            .or(self.sub.as_deref())
    }

    /// Whether the payload carries an expiry in the past.
    pub fn is_expired(&self, now: i64) -> bool {
        matches!(self.exp, Some(exp) if now > exp)
    }
}

/// Decode the payload segment of a bearer token.
///
/// Tokens stored via a JSON round trip sometimes arrive wrapped in
/// literal quote characters; those are stripped before splitting.
pub fn decode_token(token: &str) -> Result<TokenPayload> {
    let token = strip_quotes(token.trim());

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(Error::TokenMalformed(format!(
            "expected 3 segments, got {}",
            segments.len()
        )));
    }

    let bytes = URL_SAFE
        .decode(pad_base64(segments[1]))
        .map_err(|e| Error::TokenMalformed(format!("payload is not base64: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| Error::TokenMalformed(format!("payload is not valid JSON: {}", e)))
}

fn strip_quotes(token: &str) -> &str {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

/// Restore stripped base64 padding to a multiple of 4 characters.
fn pad_base64(segment: &str) -> String {
    let mut padded = segment.to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }
    padded
}
