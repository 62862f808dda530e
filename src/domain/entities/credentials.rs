//! Credential drafts for the login and registration forms.

use crate::domain::errors::ValidationError;

/// Login form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

impl LoginCredentials {
    /// Creates login credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks that both fields are non-empty.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] if any field is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::EmptyField);
        }
        Ok(())
    }
}

/// Registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterCredentials {
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
}

impl RegisterCredentials {
    /// Creates registration credentials.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Checks that all fields are non-empty and that the passwords match.
    /// Empty fields are reported before a mismatch.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] or
    /// [`ValidationError::PasswordMismatch`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            &self.full_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::EmptyField);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("a@b.com", "x", true ; "both_filled")]
    #[test_case("", "x", false ; "empty_email")]
    #[test_case("a@b.com", "", false ; "empty_password")]
    #[test_case("", "", false ; "both_empty")]
    fn test_login_validation(email: &str, password: &str, ok: bool) {
        let result = LoginCredentials::new(email, password).validate();
        if ok {
            assert!(result.is_ok());
        } else {
            assert_eq!(result, Err(ValidationError::EmptyField));
        }
    }

    #[test]
    fn test_register_matching_passwords() {
        let creds = RegisterCredentials::new("Ann", "a@b.com", "pw1", "pw1");
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_register_mismatch() {
        let creds = RegisterCredentials::new("Ann", "a@b.com", "pw1", "pw2");
        assert_eq!(creds.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_register_empty_takes_precedence_over_mismatch() {
        let creds = RegisterCredentials::new("", "a@b.com", "pw1", "pw2");
        assert_eq!(creds.validate(), Err(ValidationError::EmptyField));
    }
}
