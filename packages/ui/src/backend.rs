//! Backend selection for the running app.

use api::HttpActivityApi;
use catalog::{ActivityApi, Catalog, ClientConfig, ClientError, MemoryBackend};

#[derive(Clone, Debug)]
pub enum Backend {
    Http(HttpActivityApi),
    /// Seeded in-memory catalog, no network.
    Memory(MemoryBackend),
    /// The configured backend could not be set up; every call fails with this reason.
    Unavailable(String),
}

impl Backend {
    pub fn from_config(config: &ClientConfig) -> Self {
        match HttpActivityApi::new(config) {
            Ok(api) => Backend::Http(api),
            Err(e) => {
                tracing::error!("Backend unavailable: {}", e);
                Backend::Unavailable(e.to_string())
            }
        }
    }

    pub fn demo() -> Self {
        Backend::Memory(MemoryBackend::mergington())
    }
}

impl ActivityApi for Backend {
    async fn list_activities(&self) -> Result<Catalog, ClientError> {
        match self {
            Backend::Http(api) => api.list_activities().await,
            Backend::Memory(memory) => memory.list_activities().await,
            Backend::Unavailable(reason) => Err(ClientError::Transport(reason.clone())),
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        match self {
            Backend::Http(api) => api.signup(activity, email).await,
            Backend::Memory(memory) => memory.signup(activity, email).await,
            Backend::Unavailable(reason) => Err(ClientError::Transport(reason.clone())),
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        match self {
            Backend::Http(api) => api.unregister(activity, email).await,
            Backend::Memory(memory) => memory.unregister(activity, email).await,
            Backend::Unavailable(reason) => Err(ClientError::Transport(reason.clone())),
        }
    }
}
