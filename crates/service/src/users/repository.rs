use async_trait::async_trait;

use super::domain::{NewUser, User};
use crate::errors::ServiceError;

/// Repository abstraction for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ServiceError>;
    async fn insert(&self, new: NewUser) -> Result<User, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        state: Mutex<State>,
    }

    #[derive(Default)]
    struct State {
        next_id: i32,
        rows: BTreeMap<i32, User>, // keyed by id; iteration mirrors the backend's id order
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn list(&self) -> Result<Vec<User>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.values().cloned().collect())
        }

        async fn insert(&self, new: NewUser) -> Result<User, ServiceError> {
            let mut state = self.state.lock().unwrap();
            // Monotonic counter, like the backend's auto-increment sequence
            state.next_id += 1;
            let user = User { id: state.next_id, name: new.name, email: new.email };
            state.rows.insert(user.id, user.clone());
            Ok(user)
        }
    }
}
