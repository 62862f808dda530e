//! Registration use case implementation.

use tracing::{debug, info, warn};

use crate::application::dto::{AuthMethod, AuthResponse, RegisterRequest};
use crate::domain::entities::UserProfile;
use crate::domain::errors::ValidationError;

/// Handles the registration form submission. Nothing is stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterUseCase;

impl RegisterUseCase {
    /// Creates new registration use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes registration with provided request.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] if any field is empty, or
    /// [`ValidationError::PasswordMismatch`] if the passwords differ.
    pub fn execute(&self, request: &RegisterRequest) -> Result<AuthResponse, ValidationError> {
        debug!("Attempting registration");

        let credentials = &request.credentials;
        credentials.validate().inspect_err(|e| {
            warn!(error = %e, "Registration form rejected");
        })?;

        let profile = UserProfile::new(&credentials.full_name, &credentials.email);

        info!(user = %profile.full_name(), "Registration accepted");

        Ok(AuthResponse::new(profile, AuthMethod::Register))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_registration() {
        let response = RegisterUseCase::new()
            .execute(&RegisterRequest::new("Ann", "a@b.com", "pw1", "pw1"))
            .unwrap();

        assert_eq!(response.method, AuthMethod::Register);
        assert_eq!(response.profile.full_name(), "Ann");
        assert_eq!(response.profile.email(), "a@b.com");
        assert_eq!(response.method.success_message(), "Registration successful!");
    }

    #[test]
    fn test_password_mismatch() {
        let result =
            RegisterUseCase::new().execute(&RegisterRequest::new("Ann", "a@b.com", "pw1", "pw2"));

        let err = result.unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords don't match!");
    }

    #[test]
    fn test_empty_field() {
        let result =
            RegisterUseCase::new().execute(&RegisterRequest::new("Ann", "", "pw1", "pw1"));

        assert!(matches!(result, Err(ValidationError::EmptyField)));
    }
}
