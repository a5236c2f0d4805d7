//! Repository trait definitions.

use roster_core::{Interface, NewUser, RosterResult, User, UserId};

/// User repository trait.
///
/// Every method is atomic with respect to the others. Implementations must
/// return users from [`find_all`](Self::find_all) in insertion order.
pub trait UserRepository: Interface + Send + Sync {
    /// Allocates the next ID and stores the user under it.
    fn insert(&self, new_user: NewUser) -> User;

    /// Finds a user by ID.
    fn find_by_id(&self, id: UserId) -> Option<User>;

    /// Returns every user in insertion order.
    fn find_all(&self) -> Vec<User>;

    /// Applies [`User::deactivate`] to the stored user.
    ///
    /// Returns whether the status changed. Fails with `NotFound` if the ID
    /// is unknown.
    fn deactivate(&self, id: UserId) -> RosterResult<bool>;

    /// Counts all users.
    fn count(&self) -> usize;

    /// Removes every user and restarts ID allocation.
    fn clear(&self);
}
