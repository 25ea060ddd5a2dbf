//! Admin authorization policy.
//!
//! Operations that mutate candidates or inject synthetic votes go through
//! this seam instead of comparing strings inline, so the static shared key
//! can later be replaced by a real credential scheme without touching the
//! operation logic.

use crate::error::AppError;

/// Decides whether a presented credential may perform admin operations.
#[cfg_attr(test, mockall::automock)]
pub trait AdminPolicy: Send + Sync {
    /// Validates the credential.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the credential is absent or
    /// does not match. The check runs before any field validation, so a
    /// bad credential is rejected regardless of the rest of the request.
    fn authorize<'a>(&self, credential: Option<&'a str>) -> Result<(), AppError>;
}

/// Policy comparing the credential against a fixed key from configuration.
///
/// Not a cryptographic credential; a placeholder trust anchor for a
/// single-community deployment.
pub struct StaticKeyPolicy {
    key: String,
}

impl StaticKeyPolicy {
    pub fn new(key: String) -> Self {
        Self { key }
    }
}

impl AdminPolicy for StaticKeyPolicy {
    fn authorize(&self, credential: Option<&str>) -> Result<(), AppError> {
        match credential {
            Some(c) if c == self.key => Ok(()),
            _ => Err(AppError::forbidden("Forbidden: Wrong Auth Key")),
        }
    }
}
