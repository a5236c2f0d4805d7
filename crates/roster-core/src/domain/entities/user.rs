//! User entity.

use crate::{UserId, UserStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Youngest age accepted when creating a user.
pub const MINIMUM_AGE: u32 = 18;

/// Message carried by the validation error for underage users.
pub const ADULT_REQUIRED_MESSAGE: &str = "O usuário deve ser maior de idade.";

/// User entity managed by the roster.
///
/// Everything except `status` (and its `updated_at` stamp) is fixed at
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned on creation.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Contact email. Stored as given.
    pub email: String,

    /// Age in years at creation.
    pub age: u32,

    /// Whether the user is an administrator.
    pub is_admin: bool,

    /// User's status.
    pub status: UserStatus,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last status change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user.
    #[must_use]
    pub fn new(id: UserId, name: String, email: String, age: u32, is_admin: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            age,
            is_admin,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the user is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Checks if the user can be deactivated.
    ///
    /// Administrators are never deactivated, and deactivation happens once.
    #[must_use]
    pub const fn can_deactivate(&self) -> bool {
        !self.is_admin && self.is_active()
    }

    /// Deactivates the user account.
    ///
    /// Returns `false` and leaves the user untouched when
    /// [`can_deactivate`](Self::can_deactivate) does not hold.
    pub fn deactivate(&mut self) -> bool {
        if !self.can_deactivate() {
            return false;
        }
        self.status = UserStatus::Inactive;
        self.updated_at = Utc::now();
        true
    }
}

/// Validated data for a user that has not been stored yet.
///
/// The repository turns it into a [`User`] once it has allocated an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub is_admin: bool,
}

impl NewUser {
    /// Builds the stored record under the given ID.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.name, self.email, self.age, self.is_admin)
    }
}
