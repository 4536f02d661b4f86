//! User store trait definition.

use std::future::Future;

use rolodex_types::error::StoreError;
use rolodex_types::user::User;

/// Store capability for user records.
///
/// Implementations must be safe to call concurrently; the directory service
/// adds no locking of its own. A missing user is reported as an error like
/// any other failure.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait UserStore: Send + Sync {
    /// Insert a user record.
    fn add_user(&self, user: &User) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Look up a user by identifier.
    fn find_user(&self, id: &str) -> impl Future<Output = Result<User, StoreError>> + Send;
}
