//! In-memory user repository.

use crate::UserRepository;
use parking_lot::RwLock;
use roster_core::{NewUser, RosterError, RosterResult, User, UserId};
use shaku::Component;
use std::collections::BTreeMap;
use tracing::debug;

/// Users plus the ID counter, guarded together.
///
/// IDs only grow, so iterating `users` by key yields insertion order.
#[derive(Debug)]
pub struct UserStore {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: UserId::FIRST,
        }
    }
}

/// In-memory user repository.
#[derive(Component, Default)]
#[shaku(interface = UserRepository)]
pub struct InMemoryUserRepository {
    #[shaku(default)]
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&self, new_user: NewUser) -> User {
        let mut store = self.store.write();
        let id = store.next_id;
        store.next_id = id.next();

        let user = new_user.into_user(id);
        store.users.insert(id, user.clone());
        debug!(user_id = %id, "User stored");
        user
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.store.read().users.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<User> {
        self.store.read().users.values().cloned().collect()
    }

    fn deactivate(&self, id: UserId) -> RosterResult<bool> {
        let mut store = self.store.write();
        let user = store
            .users
            .get_mut(&id)
            .ok_or_else(|| RosterError::not_found("User", id))?;
        Ok(user.deactivate())
    }

    fn count(&self) -> usize {
        self.store.read().users.len()
    }

    fn clear(&self) {
        *self.store.write() = UserStore::default();
        debug!("User store cleared");
    }
}

impl std::fmt::Debug for InMemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserRepository")
            .field("store", &*self.store.read())
            .finish()
    }
}
