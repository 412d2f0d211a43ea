use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};

use crate::books::domain::{Book, NewBook, UpdateBookInput};
use crate::books::repository::BookRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
///
/// Reads run on the pooled connection; every mutation runs inside its
/// own transaction. A failure to open the transaction means the backend
/// is unreachable; a failed statement rolls the transaction back.
pub struct SeaOrmBookRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: models::books::Model) -> Book {
    Book { id: m.id, title: m.title, author: m.author }
}

#[async_trait::async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        let rows = models::books::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Book>, ServiceError> {
        let row = models::books::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        Ok(row.map(to_domain))
    }

    async fn insert(&self, new: NewBook) -> Result<Book, ServiceError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        let am = models::books::ActiveModel {
            title: Set(new.title),
            author: Set(new.author),
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

    async fn update(&self, id: i32, changes: UpdateBookInput) -> Result<Option<Book>, ServiceError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        let model = match models::books::Entity::find_by_id(id).one(&txn).await {
            Ok(Some(m)) => m,
            Ok(None) => {
                txn.rollback().await.ok();
                return Ok(None);
            }
            Err(e) => {
                txn.rollback().await.ok();
                return Err(ServiceError::Persistence(e.to_string()));
            }
        };

        let mut desired = model.clone();
        if let Some(title) = changes.title {
            desired.title = title;
        }
        if let Some(author) = changes.author {
            desired.author = author;
        }
        if desired == model {
            // Empty or same-value patch: skip the UPDATE entirely and
            // report the current row.
            txn.commit()
                .await
                .map_err(|e| ServiceError::Persistence(e.to_string()))?;
            return Ok(Some(to_domain(desired)));
        }

        let mut am: models::books::ActiveModel = model.into();
        am.title = Set(desired.title.clone());
        am.author = Set(desired.author.clone());
        let updated = match am.update(&txn).await {
            Ok(m) => m,
            Err(DbErr::RecordNotUpdated) => {
                // The row vanished between the find and the update;
                // report it as absent.
                txn.rollback().await.ok();
                return Ok(None);
            }
            Err(e) => {
                txn.rollback().await.ok();
                return Err(ServiceError::Persistence(e.to_string()));
            }
        };
        txn.commit()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;
        Ok(Some(to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;
        let res = match models::books::Entity::delete_by_id(id).exec(&txn).await {
            Ok(r) => r,
            Err(e) => {
                txn.rollback().await.ok();
                return Err(ServiceError::Persistence(e.to_string()));
            }
        };
        if res.rows_affected == 0 {
            txn.rollback().await.ok();
            return Ok(false);
        }
        txn.commit()
            .await
            .map_err(|e| ServiceError::Persistence(e.to_string()))?;
        Ok(true)
    }
}
