/// CRUD operations tests for all entities
pub mod crud_tests;

/// Transaction handling tests
pub mod transaction_tests;
