//! User service implementation.

use crate::dto::CreateUserRequest;
use crate::report::UserReport;
use crate::user_service::UserService;
use roster_core::{RosterResult, User, UserId, ValidateExt};
use roster_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User service component.
///
/// Wired through Shaku in [`RosterModule`](crate::RosterModule), or built
/// directly with [`UserServiceImpl::new`].
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service over the given repository.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

impl UserService for UserServiceImpl {
    fn create_user(&self, request: CreateUserRequest) -> RosterResult<User> {
        debug!("Creating user: {}", request.name);

        if let Err(err) = request.validate_request() {
            warn!(error_code = err.error_code(), "Rejected user: {}", err);
            return Err(err);
        }

        let user = self.user_repository.insert(request.into());

        info!(user_id = %user.id, is_admin = user.is_admin, "User created");
        Ok(user)
    }

    fn get_user(&self, id: UserId) -> Option<User> {
        debug!("Getting user: {}", id);

        self.user_repository.find_by_id(id)
    }

    fn deactivate_user(&self, id: UserId) -> RosterResult<bool> {
        debug!("Deactivating user: {}", id);

        let deactivated = self.user_repository.deactivate(id)?;
        if deactivated {
            info!(user_id = %id, "User deactivated");
        } else {
            warn!(user_id = %id, "User left active or already inactive");
        }
        Ok(deactivated)
    }

    fn list_users(&self) -> Vec<User> {
        debug!("Listing users");

        self.user_repository.find_all()
    }

    fn count_users(&self) -> usize {
        self.user_repository.count()
    }

    fn generate_user_report(&self) -> String {
        let users = self.user_repository.find_all();
        debug!(user_count = users.len(), "Generating user report");

        UserReport::new(&users).to_string()
    }

    fn reset(&self) {
        self.user_repository.clear();
        info!("User store reset");
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;
    use roster_core::{NewUser, RosterError, ADULT_REQUIRED_MESSAGE};

    mock! {
        pub Repo {}

        impl UserRepository for Repo {
            fn insert(&self, new_user: NewUser) -> User;
            fn find_by_id(&self, id: UserId) -> Option<User>;
            fn find_all(&self) -> Vec<User>;
            fn deactivate(&self, id: UserId) -> RosterResult<bool>;
            fn count(&self) -> usize;
            fn clear(&self);
        }
    }

    fn create_user_service(repo: MockRepo) -> UserServiceImpl {
        UserServiceImpl::new(Arc::new(repo))
    }

    fn stored_user(id: UserId, is_admin: bool) -> User {
        User::new(
            id,
            "Stored".to_string(),
            "stored@teste.com".to_string(),
            30,
            is_admin,
        )
    }

    #[test]
    fn test_create_user_success() {
        let mut repo = MockRepo::new();
        repo.expect_insert()
            .withf(|new_user: &NewUser| new_user.name == "Fulano de Tal" && !new_user.is_admin)
            .times(1)
            .returning(|new_user| new_user.into_user(UserId::FIRST));
        let service = create_user_service(repo);

        let user = service
            .create_user(CreateUserRequest::new("Fulano de Tal", "fulano@teste.com", 25))
            .unwrap();

        assert_eq!(user.id, UserId::FIRST);
        assert_eq!(user.name, "Fulano de Tal");
        assert!(user.is_active());
    }

    #[test]
    fn test_create_underage_user_touches_nothing() {
        let mut repo = MockRepo::new();
        repo.expect_insert().never();
        let service = create_user_service(repo);

        let err = service
            .create_user(CreateUserRequest::new("Menor", "menor@email.com", 17))
            .unwrap_err();

        assert!(matches!(err, RosterError::Validation(_)));
        assert_eq!(err.to_string(), ADULT_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_deactivate_delegates_to_repository() {
        let mut repo = MockRepo::new();
        repo.expect_deactivate()
            .with(eq(UserId::new(2)))
            .times(1)
            .returning(|_| Ok(true));
        let service = create_user_service(repo);

        assert!(service.deactivate_user(UserId::new(2)).unwrap());
    }

    #[test]
    fn test_deactivate_rejection_is_false() {
        let mut repo = MockRepo::new();
        repo.expect_deactivate().returning(|_| Ok(false));
        let service = create_user_service(repo);

        assert!(!service.deactivate_user(UserId::new(1)).unwrap());
    }

    #[test]
    fn test_deactivate_missing_user_is_not_found() {
        let mut repo = MockRepo::new();
        repo.expect_deactivate()
            .returning(|id| Err(RosterError::not_found("User", id)));
        let service = create_user_service(repo);

        let err = service.deactivate_user(UserId::new(42)).unwrap_err();
        match err {
            RosterError::NotFound { resource_type, id } => {
                assert_eq!(resource_type, "User");
                assert_eq!(id, "42");
            }
            other => panic!("Expected NotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_get_missing_user_is_none() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_id().returning(|_| None);
        let service = create_user_service(repo);

        assert!(service.get_user(UserId::new(5)).is_none());
    }

    #[test]
    fn test_reset_clears_repository() {
        let mut repo = MockRepo::new();
        repo.expect_clear().times(1).return_const(());
        let service = create_user_service(repo);

        service.reset();
    }

    #[test]
    fn test_report_reads_all_users() {
        let mut repo = MockRepo::new();
        repo.expect_find_all().times(1).returning(|| {
            vec![
                stored_user(UserId::new(1), false),
                stored_user(UserId::new(2), true),
            ]
        });
        let service = create_user_service(repo);

        let report = service.generate_user_report();
        assert_eq!(report.lines().count(), 3);
    }
}
