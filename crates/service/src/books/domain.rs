use serde::{Deserialize, Serialize};

/// Domain book (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
}

/// Create input. Fields are optional so a missing one surfaces as a
/// validation error from the service instead of a body rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookInput {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Partial update: absent fields keep their stored values. An entirely
/// empty patch is a no-op that still reports the current row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookInput {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Validated column set for an insert
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}
