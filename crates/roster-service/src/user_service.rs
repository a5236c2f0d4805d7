//! User service trait definition.

use crate::dto::CreateUserRequest;
use roster_core::{Interface, RosterResult, User, UserId};

/// User service trait.
pub trait UserService: Interface + Send + Sync {
    /// Creates a new active user.
    ///
    /// Fails with `RosterError::Validation` when the user is under age.
    fn create_user(&self, request: CreateUserRequest) -> RosterResult<User>;

    /// Gets a user by ID, or `None` if no such user exists.
    fn get_user(&self, id: UserId) -> Option<User>;

    /// Deactivates a user.
    ///
    /// Returns `Ok(false)` without changing anything for administrators and
    /// for users that are already inactive. Fails with
    /// `RosterError::NotFound` if the ID is unknown.
    fn deactivate_user(&self, id: UserId) -> RosterResult<bool>;

    /// Lists all users in creation order.
    fn list_users(&self) -> Vec<User>;

    /// Counts all users.
    fn count_users(&self) -> usize;

    /// Renders the plain-text user report.
    fn generate_user_report(&self) -> String;

    /// Removes every user and restarts ID allocation.
    ///
    /// Administrative reset, meant for isolating test scenarios.
    fn reset(&self);
}
