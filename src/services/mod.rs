//! Resource managers - validation and authorization around the repositories
//!
//! Handlers call these; they know nothing about HTTP.

pub mod book_service;
pub mod category_service;
