//! # Blogger Core
//!
//! The domain layer of the blogging backend: entities, ports, the pagination
//! helper, read-side query repositories and the write-side domain services.
//! This crate has no infrastructure dependencies; adapters live in `blogger-infra`.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod query;
pub mod services;
pub mod validation;

pub use error::{DomainError, FieldError, RepoError};
pub use validation::ValidationService;
