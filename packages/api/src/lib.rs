//! # API crate: HTTP client for the activities backend
//!
//! [`HttpActivityApi`] implements [`catalog::ActivityApi`] with `reqwest`,
//! which compiles to the browser's `fetch` on wasm32 and to a native client
//! elsewhere. There is no timeout and no retry: a request that hangs keeps the
//! calling task suspended, and a failed one is reported once.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`endpoints`] | Builds the encoded URLs for list, signup and unregister. |
//! | `response` | Maps status code and body to the catalog, the success message, or a [`ClientError`]. |
//!
//! ## Endpoints consumed
//!
//! | Call | Method | Path | Success body | Failure body |
//! |------|--------|------|--------------|--------------|
//! | list | `GET` | `/activities` | name → activity | none |
//! | signup | `POST` | `/activities/{name}/signup?email=` | `{message}` | `{detail}` |
//! | unregister | `DELETE` | `/activities/{name}/unregister?email=` | `{message}` | `{detail}` |

use catalog::{ActivityApi, Catalog, ClientConfig, ClientError};
use reqwest::{Client, Method, Url};
use thiserror::Error;
use tracing::debug;

pub mod endpoints;
mod response;

pub use endpoints::Endpoints;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid backend URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Backend address used when the configuration leaves it empty.
#[cfg(target_arch = "wasm32")]
pub fn default_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| "http://localhost".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

#[derive(Clone, Debug)]
pub struct HttpActivityApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpActivityApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base = match config.server.base_url.trim() {
            "" => default_base_url(),
            url => url.to_string(),
        };
        Ok(Self {
            client: Client::new(),
            endpoints: Endpoints::new(&base)?,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Send a bodyless request and return the status code and body text.
    async fn send(&self, method: Method, url: Url) -> Result<(u16, String), ClientError> {
        debug!("{} {}", method, url);
        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok((status, body))
    }
}

impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> Result<Catalog, ClientError> {
        let (status, body) = self.send(Method::GET, self.endpoints.activities()).await?;
        response::catalog_from(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        let url = self.endpoints.signup(activity, email);
        let (status, body) = self.send(Method::POST, url).await?;
        response::message_from(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        let url = self.endpoints.unregister(activity, email);
        let (status, body) = self.send(Method::DELETE, url).await?;
        response::message_from(status, &body)
    }
}
