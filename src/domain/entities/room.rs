//! Bookable room entity.

/// Technician assigned to rooms without a dedicated contact.
pub const DEFAULT_TECHNICIAN: &str = "Junaidy Abdillah";

/// Contact number used with [`DEFAULT_TECHNICIAN`].
pub const DEFAULT_PHONE: &str = "087855224496";

/// A room in the department catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    code: String,
    name: String,
    technician: String,
    phone: String,
}

impl RoomDetail {
    /// Creates a room handled by the default technician.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            technician: DEFAULT_TECHNICIAN.to_string(),
            phone: DEFAULT_PHONE.to_string(),
        }
    }

    /// Overrides the responsible technician and their phone number.
    #[must_use]
    pub fn with_contact(mut self, technician: impl Into<String>, phone: impl Into<String>) -> Self {
        self.technician = technician.into();
        self.phone = phone.into();
        self
    }

    /// Short unique identifier, e.g. `IF-104`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Descriptive name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Responsible technician.
    #[must_use]
    pub fn technician(&self) -> &str {
        &self.technician
    }

    /// Technician phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl std::fmt::Display for RoomDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contact() {
        let room = RoomDetail::new("IF-104", "Ruang Kelas");
        assert_eq!(room.technician(), DEFAULT_TECHNICIAN);
        assert_eq!(room.phone(), DEFAULT_PHONE);
        assert_eq!(room.to_string(), "IF-104 - Ruang Kelas");
    }

    #[test]
    fn test_with_contact() {
        let room = RoomDetail::new("AULA", "Aula").with_contact("Jumali", "0811");
        assert_eq!(room.technician(), "Jumali");
        assert_eq!(room.phone(), "0811");
    }
}
