//! Shared-secret gate for mutating requests
//!
//! Built once at startup from configuration and carried in [`AppState`].
//! The store layer never sees it.
//!
//! [`AppState`]: crate::state::AppState

use std::fmt;
use std::sync::Arc;

use crate::models::ValidationError;

/// The configured shared secret.
#[derive(Clone)]
pub struct AuthContext {
    secret: Arc<str>,
}

impl AuthContext {
    /// Empty secrets are refused: they would let any request without a
    /// `secret_key` through.
    pub fn new(secret: impl Into<String>) -> Result<Self, ValidationError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ValidationError::Empty { field: "secret key" });
        }
        Ok(Self {
            secret: Arc::from(secret),
        })
    }

    /// Exact string equality against the configured secret.
    pub fn verify(&self, provided: Option<&str>) -> bool {
        provided.is_some_and(|key| key == &*self.secret)
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_match_only() {
        let auth = AuthContext::new("s3cret").unwrap();
        assert!(auth.verify(Some("s3cret")));
        assert!(!auth.verify(Some("S3CRET")));
        assert!(!auth.verify(Some("s3cret ")));
        assert!(!auth.verify(Some("")));
        assert!(!auth.verify(None));
    }

    #[test]
    fn rejects_empty_secret() {
        let err = AuthContext::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn debug_redacts_secret() {
        let auth = AuthContext::new("s3cret").unwrap();
        assert!(!format!("{:?}", auth).contains("s3cret"));
    }
}
