use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::errors::ServiceError;
use crate::users::domain::{NewUser, User};
use crate::users::repository::UserRepository;

/// SeaORM-backed repository implementation.
///
/// Reads run on the pooled connection; every mutation runs inside its
/// own transaction. A failure to open the transaction means the backend
/// is unreachable; a failed statement rolls the transaction back.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: models::users::Model) -> User {
    User { id: m.id, name: m.name, email: m.email }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let rows = models::users::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn insert(&self, new: NewUser) -> Result<User, ServiceError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        let am = models::users::ActiveModel {
            name: Set(new.name),
            email: Set(new.email),
            ..Default::default()
        };
        let created = match am.insert(&txn).await {
            Ok(m) => m,
            Err(e) => {
                txn.rollback().await.ok();
                return Err(ServiceError::Persistence(e.to_string()));
            }
        };
        txn.commit()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;
        Ok(to_domain(created))
    }
}
