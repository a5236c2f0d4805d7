//! User-related DTOs.

use roster_core::NewUser;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub name: String,

    pub email: String,

    #[validate(range(min = 18, message = "O usuário deve ser maior de idade."))]
    pub age: u32,

    #[serde(default)]
    pub is_admin: bool,
}

impl CreateUserRequest {
    /// Creates a request for a regular (non-administrator) user.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
            is_admin: false,
        }
    }

    /// Marks the requested user as an administrator.
    #[must_use]
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            age: request.age,
            is_admin: request.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{RosterError, ValidateExt, ADULT_REQUIRED_MESSAGE, MINIMUM_AGE};

    #[test]
    fn test_new_request_is_not_admin() {
        let request = CreateUserRequest::new("Fulano de Tal", "fulano@teste.com", 25);
        assert_eq!(request.name, "Fulano de Tal");
        assert_eq!(request.email, "fulano@teste.com");
        assert_eq!(request.age, 25);
        assert!(!request.is_admin);
    }

    #[test]
    fn test_admin_builder() {
        let request = CreateUserRequest::new("Admin", "admin@teste.com", 40).admin();
        assert!(request.is_admin);
    }

    #[test]
    fn test_minimum_age_is_accepted() {
        let request = CreateUserRequest::new("Adulto", "adulto@teste.com", MINIMUM_AGE);
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_underage_is_rejected_with_adult_message() {
        let request = CreateUserRequest::new("Menor", "menor@email.com", MINIMUM_AGE - 1);
        match request.validate_request() {
            Err(RosterError::Validation(msg)) => assert_eq!(msg, ADULT_REQUIRED_MESSAGE),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_email_is_not_format_checked() {
        let request = CreateUserRequest::new("Sem Email", "not-an-email", 30);
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_into_new_user() {
        let request = CreateUserRequest::new("Admin", "admin@teste.com", 40).admin();
        let new_user = NewUser::from(request);
        assert_eq!(new_user.name, "Admin");
        assert_eq!(new_user.email, "admin@teste.com");
        assert_eq!(new_user.age, 40);
        assert!(new_user.is_admin);
    }

    #[test]
    fn test_is_admin_defaults_when_deserialized() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"name":"Comum","email":"comum@teste.com","age":30}"#).unwrap();
        assert!(!request.is_admin);
    }
}
