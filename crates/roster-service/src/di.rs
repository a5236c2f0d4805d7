//! Dependency injection module using Shaku.

use crate::{UserService, UserServiceImpl};
use roster_repository::InMemoryUserRepository;
use shaku::{module, HasComponent};
use std::sync::Arc;

// Single-process module: in-memory repository plus the user service.
module! {
    pub RosterModule {
        components = [
            InMemoryUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

impl std::fmt::Debug for RosterModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterModule").finish_non_exhaustive()
    }
}

/// Builds the module with an empty repository.
#[must_use]
pub fn build_roster_module() -> Arc<RosterModule> {
    Arc::new(RosterModule::builder().build())
}

/// Resolves the user service from a module.
#[must_use]
pub fn resolve_user_service(module: &RosterModule) -> Arc<dyn UserService> {
    module.resolve()
}
