//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access behind repository traits.
//! - Required-field checks live here, not in the HTTP layer.
//! - Provides a clear error taxonomy shared by both resource families.

pub mod errors;
pub mod books;
pub mod users;
#[cfg(test)]
pub mod test_support;
