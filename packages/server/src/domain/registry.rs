//! User registry trait: who is currently present in the bar.

use async_trait::async_trait;

use super::entity::User;
use super::value_object::ConnectionId;

/// Registry of currently-joined participants, keyed by connection id.
///
/// All mutators are the sole sanctioned entry points for presence
/// state; operations on an absent id are no-ops, never errors.
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Insert or overwrite a user. Ids are freshly generated per
    /// connection, so an overwrite only happens in tests.
    async fn add(&self, user: User);

    async fn get(&self, id: &ConnectionId) -> Option<User>;

    /// Idempotent removal.
    async fn remove(&self, id: &ConnectionId);

    /// Snapshot of all present users. Iteration order is not
    /// contractual.
    async fn list(&self) -> Vec<User>;

    /// Mutate the seated flag in place; no-op for an absent id.
    async fn set_seated(&self, id: &ConnectionId, seated: bool);

    async fn count(&self) -> usize;

    /// Empty the registry. Used by the closing sweep.
    async fn clear(&self);
}
