//! Authenticated JSON client
//!
//! Every call attaches `Authorization: Bearer <token>` from the shared
//! store when a token is present. The header is a courtesy to the
//! backend, which verifies the token itself; nothing client-side
//! depends on the request being accepted.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::Result;
use crate::store::{TokenStore, TOKEN_KEY};

/// JSON client for `<base_url>/api/...` endpoints.
pub struct ApiClient<S: TokenStore> {
    http: Client,
    base_url: String,
    store: S,
}

impl<S: TokenStore> ApiClient<S> {
    pub fn new(config: &ApiConfig, store: S) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/api/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.http.request(method, url);
        if let Some(token) = self.store.get(TOKEN_KEY) {
            request = request.bearer_auth(token);
        }
        request
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// POST a JSON body and parse the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
