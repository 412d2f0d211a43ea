//! Books module: three-layer architecture (domain, repository, service).
//!
//! The full CRUD surface lives here, including partial updates where
//! absent fields keep their stored values.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::BookService;
