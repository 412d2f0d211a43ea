use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Book, CreateBookInput, NewBook, UpdateBookInput};
use super::repository::BookRepository;
use crate::errors::ServiceError;

/// Book business service independent of the web framework.
pub struct BookService<R: BookRepository> {
    repo: Arc<R>,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// List every stored book in storage order.
    pub async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        self.repo.list().await
    }

    /// Fetch a single book by id.
    pub async fn get(&self, id: i32) -> Result<Book, ServiceError> {
        self.repo
            .find(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("book"))
    }

    /// Create a book. Both fields must be present; lengths are enforced
    /// by the storage schema, not here.
    ///
    /// # Examples
    /// ```
    /// use service::books::{service::BookService, repository::mock::MockBookRepository};
    /// use service::books::domain::CreateBookInput;
    /// use std::sync::Arc;
    /// let svc = BookService::new(Arc::new(MockBookRepository::default()));
    /// let input = CreateBookInput { title: Some("Dune".into()), author: Some("Frank Herbert".into()) };
    /// let book = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(book.id, 1);
    /// assert_eq!(book.title, "Dune");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateBookInput) -> Result<Book, ServiceError> {
        let new = NewBook {
            title: input.title.ok_or_else(|| ServiceError::missing_field("title"))?,
            author: input.author.ok_or_else(|| ServiceError::missing_field("author"))?,
        };
        let created = self.repo.insert(new).await?;
        info!(book_id = created.id, "book_created");
        Ok(created)
    }

    /// Apply a partial update to an existing book.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: UpdateBookInput) -> Result<Book, ServiceError> {
        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("book"))?;
        info!(book_id = updated.id, "book_updated");
        Ok(updated)
    }

    /// Remove a book by id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("book"));
        }
        info!(book_id = id, "book_deleted");
        Ok(())
    }
}
