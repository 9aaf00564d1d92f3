use crate::error::ClientError;
use crate::models::Catalog;

/// Async access to the activities backend.
///
/// `signup` and `unregister` resolve to the server's success message.
pub trait ActivityApi {
    fn list_activities(&self) -> impl std::future::Future<Output = Result<Catalog, ClientError>>;
    fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> impl std::future::Future<Output = Result<String, ClientError>>;
    fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> impl std::future::Future<Output = Result<String, ClientError>>;
}
