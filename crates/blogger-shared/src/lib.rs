//! # Blogger Shared
//!
//! Request and response types exchanged over the HTTP API.
//! Request DTOs carry their validation rules; response DTOs are the only shapes
//! that ever leave the service.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, FieldErrorResponse, Paginated};
