//! Session-scoped user profile.

/// Profile of the signed-in user, alive for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    full_name: String,
    email: String,
}

impl UserProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
        }
    }

    /// Builds a profile from an email alone, using the local part as the
    /// display name and `fallback_name` when the local part is empty.
    #[must_use]
    pub fn from_email(email: &str, fallback_name: &str) -> Self {
        let local = email.split('@').next().unwrap_or_default().trim();
        let full_name = if local.is_empty() {
            fallback_name.to_string()
        } else {
            local.to_string()
        };
        Self::new(full_name, email)
    }

    /// Display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email_uses_local_part() {
        let profile = UserProfile::from_email("nabilah@its.ac.id", "Guest");
        assert_eq!(profile.full_name(), "nabilah");
        assert_eq!(profile.email(), "nabilah@its.ac.id");
    }

    #[test]
    fn test_from_email_falls_back() {
        let profile = UserProfile::from_email("@its.ac.id", "Guest");
        assert_eq!(profile.full_name(), "Guest");
    }

    #[test]
    fn test_from_email_without_at() {
        let profile = UserProfile::from_email("ann", "Guest");
        assert_eq!(profile.full_name(), "ann");
    }
}
