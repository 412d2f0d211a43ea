//! Users module: three-layer architecture (domain, repository, service).
//!
//! Registration is write-only from the client's point of view: the API
//! returns 201 with an empty body and exposes no per-user lookup.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::UserService;
