use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{CreateUserInput, NewUser, User};
use super::repository::UserRepository;
use crate::errors::ServiceError;

/// User business service independent of the web framework.
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// List every stored user in storage order.
    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        self.repo.list().await
    }

    /// Register a user. Both fields must be present; no further checks
    /// are applied, so duplicate emails pass through untouched.
    ///
    /// # Examples
    /// ```
    /// use service::users::{service::UserService, repository::mock::MockUserRepository};
    /// use service::users::domain::CreateUserInput;
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockUserRepository::default()));
    /// let input = CreateUserInput { name: Some("Alice".into()), email: Some("alice@example.com".into()) };
    /// let user = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(user.email, "alice@example.com");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateUserInput) -> Result<User, ServiceError> {
        let new = NewUser {
            name: input.name.ok_or_else(|| ServiceError::missing_field("name"))?,
            email: input.email.ok_or_else(|| ServiceError::missing_field("email"))?,
        };
        let created = self.repo.insert(new).await?;
        info!(user_id = created.id, "user_registered");
        Ok(created)
    }
}
