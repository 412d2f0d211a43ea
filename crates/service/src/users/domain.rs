use serde::{Deserialize, Serialize};

/// Domain user (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Registration input. Fields are optional so a missing one surfaces as
/// a validation error from the service instead of a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Validated column set for an insert
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
