use thiserror::Error;

/// Errors returned by user store adapters.
///
/// The directory service treats every variant the same way: retried forever
/// on the background creation path, surfaced as-is everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("user '{0}' not found")]
    NotFound(String),

    #[error("user '{0}' already exists")]
    Conflict(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors from business card rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid template: {0}")]
    Template(String),

    #[error("render failed: {0}")]
    Render(String),
}

/// Errors surfaced by the directory service's synchronous operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("user id is empty")]
    MissingId,

    #[error("no tokio runtime available to run background creation")]
    NoRuntime,

    #[error("find user: {0}")]
    FindUser(#[source] StoreError),

    /// The store's write error, passed through without extra context.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("execute template: {0}")]
    Render(#[source] RenderError),
}

impl DirectoryError {
    /// The store error this error was caused by, if any.
    pub fn store_cause(&self) -> Option<&StoreError> {
        match self {
            DirectoryError::FindUser(e) | DirectoryError::Store(e) => Some(e),
            DirectoryError::MissingId | DirectoryError::NoRuntime | DirectoryError::Render(_) => None,
        }
    }

    /// Whether `err` is the store error this error was caused by.
    pub fn is_caused_by(&self, err: &StoreError) -> bool {
        self.store_cause() == Some(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("frog".to_string());
        assert_eq!(err.to_string(), "user 'frog' not found");
    }

    #[test]
    fn test_find_user_error_keeps_context_and_source() {
        let cause = StoreError::Unavailable("connection reset".to_string());
        let err = DirectoryError::FindUser(cause.clone());

        assert_eq!(err.to_string(), "find user: store unavailable: connection reset");
        let source = err.source().and_then(|s| s.downcast_ref::<StoreError>());
        assert_eq!(source, Some(&cause));
        assert!(err.is_caused_by(&cause));
    }

    #[test]
    fn test_store_error_is_transparent() {
        let cause = StoreError::Conflict("frog_".to_string());
        let err: DirectoryError = cause.clone().into();

        assert_eq!(err.to_string(), cause.to_string());
        assert!(err.is_caused_by(&cause));
    }

    #[test]
    fn test_render_error_has_no_store_cause() {
        let err = DirectoryError::Render(RenderError::Render("boom".to_string()));
        assert_eq!(err.to_string(), "execute template: render failed: boom");
        assert!(err.store_cause().is_none());
        assert!(DirectoryError::MissingId.store_cause().is_none());
        assert!(DirectoryError::NoRuntime.store_cause().is_none());
    }
}
