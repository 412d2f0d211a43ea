use async_trait::async_trait;

use super::domain::{Book, NewBook, UpdateBookInput};
use crate::errors::ServiceError;

/// Repository abstraction for book persistence.
///
/// `update` and `delete` report a missing row through their return
/// value (`None` / `false`) rather than an error; the service decides
/// what a missing row means.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Book>, ServiceError>;
    async fn find(&self, id: i32) -> Result<Option<Book>, ServiceError>;
    async fn insert(&self, new: NewBook) -> Result<Book, ServiceError>;
    async fn update(&self, id: i32, changes: UpdateBookInput) -> Result<Option<Book>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBookRepository {
        state: Mutex<State>,
    }

    #[derive(Default)]
    struct State {
        next_id: i32,
        rows: BTreeMap<i32, Book>, // keyed by id; iteration mirrors the backend's id order
    }

    #[async_trait]
    impl BookRepository for MockBookRepository {
        async fn list(&self) -> Result<Vec<Book>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.values().cloned().collect())
        }

        async fn find(&self, id: i32) -> Result<Option<Book>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.get(&id).cloned())
        }

        async fn insert(&self, new: NewBook) -> Result<Book, ServiceError> {
            let mut state = self.state.lock().unwrap();
            // Monotonic counter, like the backend's auto-increment sequence;
            // ids of deleted rows are never handed out again
            state.next_id += 1;
            let book = Book { id: state.next_id, title: new.title, author: new.author };
            state.rows.insert(book.id, book.clone());
            Ok(book)
        }

        async fn update(&self, id: i32, changes: UpdateBookInput) -> Result<Option<Book>, ServiceError> {
            let mut state = self.state.lock().unwrap();
            match state.rows.get_mut(&id) {
                Some(book) => {
                    if let Some(title) = changes.title {
                        book.title = title;
                    }
                    if let Some(author) = changes.author {
                        book.author = author;
                    }
                    Ok(Some(book.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut state = self.state.lock().unwrap();
            Ok(state.rows.remove(&id).is_some())
        }
    }
}
