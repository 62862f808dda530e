//! Authentication DTOs.

use crate::domain::entities::{LoginCredentials, RegisterCredentials, UserProfile};

/// How the session was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// Existing account login.
    Login,
    /// New account registration.
    Register,
}

impl AuthMethod {
    /// Returns the confirmation shown after success.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Login successful!",
            Self::Register => "Registration successful!",
        }
    }

    /// Returns the toast title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

impl std::fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}

/// Login request data.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Entered credentials.
    pub credentials: LoginCredentials,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: LoginCredentials::new(email, password),
        }
    }
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Entered credentials.
    pub credentials: RegisterCredentials,
}

impl RegisterRequest {
    /// Creates new registration request.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            credentials: RegisterCredentials::new(full_name, email, password, confirm_password),
        }
    }
}

/// Successful authentication result.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    /// Profile for the new session.
    pub profile: UserProfile,
    /// How the session was opened.
    pub method: AuthMethod,
}

impl AuthResponse {
    /// Creates new response.
    #[must_use]
    pub const fn new(profile: UserProfile, method: AuthMethod) -> Self {
        Self { profile, method }
    }
}
