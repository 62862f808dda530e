//! Login use case implementation.

use tracing::{debug, info, warn};

use crate::application::dto::{AuthMethod, AuthResponse, LoginRequest};
use crate::domain::entities::UserProfile;
use crate::domain::errors::ValidationError;

/// Handles the login form submission.
///
/// There is no credential store: any pair of non-empty fields opens a session.
#[derive(Debug, Clone)]
pub struct LoginUseCase {
    fallback_display_name: String,
}

impl LoginUseCase {
    /// Creates new login use case. `fallback_display_name` is used when the
    /// email has no local part to derive a name from.
    #[must_use]
    pub fn new(fallback_display_name: impl Into<String>) -> Self {
        Self {
            fallback_display_name: fallback_display_name.into(),
        }
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] if email or password is empty.
    pub fn execute(&self, request: &LoginRequest) -> Result<AuthResponse, ValidationError> {
        debug!("Attempting login");

        request.credentials.validate().inspect_err(|e| {
            warn!(error = %e, "Login form rejected");
        })?;

        let profile =
            UserProfile::from_email(&request.credentials.email, &self.fallback_display_name);

        info!(user = %profile.full_name(), "Login accepted");

        Ok(AuthResponse::new(profile, AuthMethod::Login))
    }
}
