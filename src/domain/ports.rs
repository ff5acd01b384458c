//! Port traits implemented by the platform adapters

use async_trait::async_trait;
use uuid::Uuid;

use super::errors::ClientResult;
use super::models::Platform;

/// A configured handle to a remote platform API.
///
/// Constructing a handle never touches the network. Callers that want to
/// fail fast on bad credentials call [`PlatformClient::verify`] right after
/// construction; otherwise bad credentials surface on the first real
/// request.
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Platform this handle talks to
    fn platform(&self) -> Platform;

    /// Unique identifier of this handle instance
    fn handle_id(&self) -> Uuid;

    /// Endpoint the handle issues requests against
    fn endpoint(&self) -> String;

    /// Perform one lightweight authenticated call to confirm the
    /// credentials are accepted by the platform
    async fn verify(&self) -> ClientResult<()>;
}
