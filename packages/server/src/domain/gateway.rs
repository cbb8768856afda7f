//! Push gateway trait.
//!
//! Delivers a comment to a single live connection addressed by its id. The
//! wire encoding belongs to the implementation.

use async_trait::async_trait;

use super::{Comment, ConnectionId, PushError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionGateway: Send + Sync {
    /// Push `comment` to the connection.
    ///
    /// # Errors
    ///
    /// * `PushError::Gone` - the connection no longer exists
    /// * `PushError::Transport` - any other delivery failure
    async fn push(&self, connection_id: &ConnectionId, comment: &Comment) -> Result<(), PushError>;
}
