use thiserror::Error;

/// Failure taxonomy for resource operations. The HTTP layer maps each
/// variant onto a status code; everything below it stays framework-free.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client payload is missing a required field.
    #[error("validation error: {0}")]
    Validation(String),
    /// The addressed row does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// A write was refused by the backend; the transaction was rolled back.
    #[error("persistence error: {0}")]
    Persistence(String),
    /// The storage backend could not be reached or queried.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("{} is required", field))
    }
}
