//! Directory service.
//!
//! Mediates user creation, duplication, and business card rendering against a
//! [`UserStore`] and a [`CardRenderer`]. Each operation has its own failure
//! policy:
//!
//! - `create_user` never reports store failures. It hands the record to a
//!   detached task that retries `add_user` until it succeeds, pausing between
//!   attempts according to the [`RetryPolicy`].
//! - `duplicate_user` and `make_business_card` run on the caller's task and
//!   surface every error immediately, without retrying.

use std::sync::Arc;

use tokio::runtime::Handle;

use rolodex_types::error::DirectoryError;
use rolodex_types::user::User;

use crate::render::{BusinessCard, CardRenderer};
use crate::repository::user::UserStore;
use crate::retry::{FixedDelay, RetryPolicy};

/// Appended to a user's id to form the id of its duplicate.
pub const DUPLICATE_SUFFIX: &str = "_";

/// Service orchestrating the user directory use cases.
///
/// Generic over the store, renderer, and retry policy so that tests can
/// substitute each of them. The store and renderer are shared as-is; the
/// service adds no locking around them.
pub struct DirectoryService<S: UserStore, R: CardRenderer, P: RetryPolicy = FixedDelay> {
    store: Arc<S>,
    renderer: R,
    retry: Arc<P>,
    runtime: Option<Handle>,
}

impl<S: UserStore, R: CardRenderer> DirectoryService<S, R, FixedDelay> {
    /// Create a service that retries background creation every 5 seconds.
    ///
    /// The renderer is built once by the caller and held for the life of
    /// the service.
    pub fn new(store: Arc<S>, renderer: R) -> Self {
        Self {
            store,
            renderer,
            retry: Arc::new(FixedDelay::default()),
            runtime: None,
        }
    }
}

impl<S: UserStore, R: CardRenderer, P: RetryPolicy> DirectoryService<S, R, P> {
    /// Replace the pause used between background creation attempts.
    pub fn with_retry_policy<Q: RetryPolicy>(self, retry: Q) -> DirectoryService<S, R, Q> {
        DirectoryService {
            store: self.store,
            renderer: self.renderer,
            retry: Arc::new(retry),
            runtime: self.runtime,
        }
    }

    /// Spawn background creation tasks onto `runtime` instead of the runtime
    /// the caller is running on.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Create a user in the background, retrying until the store accepts it.
    ///
    /// Exactly one detached task is spawned per call. There is no handle to
    /// cancel it and no bound on attempts: if the store never recovers, the
    /// task never finishes. Concurrent calls for the same id are not
    /// coordinated.
    ///
    /// Only an empty id, or a call made outside any tokio runtime without
    /// [`with_runtime`](Self::with_runtime), is rejected up front. Store
    /// failures are logged, never returned.
    pub fn create_user(&self, user: User) -> Result<(), DirectoryError>
    where
        S: 'static,
        P: 'static,
    {
        if !user.has_id() {
            return Err(DirectoryError::MissingId);
        }

        let runtime = match &self.runtime {
            Some(runtime) => runtime.clone(),
            None => Handle::try_current().map_err(|_| DirectoryError::NoRuntime)?,
        };

        tracing::debug!(user_id = %user.id, "scheduling background user creation");

        runtime.spawn(add_until_stored(
            Arc::clone(&self.store),
            Arc::clone(&self.retry),
            user,
        ));

        Ok(())
    }

    /// Copy a user under a new id and return that id.
    ///
    /// The new id is the original with [`DUPLICATE_SUFFIX`] appended, so
    /// duplicating a duplicate appends it again. Every other field is copied
    /// unchanged. A lookup failure is wrapped with "find user" context; a
    /// write failure is returned as the store reported it.
    pub async fn duplicate_user(&self, user_id: &str) -> Result<String, DirectoryError> {
        let mut user = self.find_user(user_id).await?;
        user.id.push_str(DUPLICATE_SUFFIX);

        self.store.add_user(&user).await?;

        tracing::debug!(source_id = %user_id, user_id = %user.id, "duplicated user");
        Ok(user.id)
    }

    /// Render the business card of an existing user.
    pub async fn make_business_card(&self, user_id: &str) -> Result<String, DirectoryError> {
        let user = self.find_user(user_id).await?;

        self.renderer
            .render(&BusinessCard::from(&user))
            .map_err(DirectoryError::Render)
    }

    async fn find_user(&self, user_id: &str) -> Result<User, DirectoryError> {
        if user_id.is_empty() {
            return Err(DirectoryError::MissingId);
        }

        self.store
            .find_user(user_id)
            .await
            .map_err(DirectoryError::FindUser)
    }
}

/// Retry `add_user` until it succeeds.
async fn add_until_stored<S: UserStore, P: RetryPolicy>(store: Arc<S>, retry: Arc<P>, user: User) {
    let mut attempt: u32 = 1;
    loop {
        match store.add_user(&user).await {
            Ok(()) => {
                tracing::info!(user_id = %user.id, attempts = attempt, "user created");
                return;
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %user.id,
                    attempt,
                    error = %e,
                    "failed to add user, retrying"
                );
                retry.wait(attempt).await;
                attempt = attempt.saturating_add(1);
            }
        }
    }
}
