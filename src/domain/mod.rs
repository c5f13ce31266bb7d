//! Domain layer - Pure business abstractions
//!
//! Trait definitions, the request actor, and domain error types.

pub mod actor;
pub mod errors;
pub mod repositories;

pub use actor::Actor;
pub use errors::{DomainError, FieldErrors};
pub use repositories::*;
