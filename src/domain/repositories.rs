//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

use super::DomainError;

/// Category data for views and admin responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Validated input for creating a category
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

/// Validated edit of a category. The name is fixed at creation, so it has no
/// field here.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChanges {
    pub description: Option<String>,
}

/// Filter criteria for category queries
#[derive(Debug, Default, Clone)]
pub struct CategoryFilter {
    /// Substring match on name or description
    pub query: Option<String>,
}

/// Repository trait for Category entity
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find categories matching the filter, ordered by id
    async fn find_all(&self, filter: CategoryFilter) -> Result<Vec<Category>, DomainError>;

    /// Find a category by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DomainError>;

    /// Find a category by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    /// Create a new category
    async fn create(&self, input: NewCategory) -> Result<Category, DomainError>;

    /// Update an existing category
    async fn update(&self, id: i32, changes: CategoryChanges) -> Result<Category, DomainError>;

    /// Delete a category by ID. Its books go with it.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Book data joined with its category name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: i32,
    pub category_id: i32,
    pub category_name: String,
    pub published_date: NaiveDate,
    pub title: String,
    pub hepburn: String,
    pub author: String,
    pub release: String,
    pub url: String,
    pub summary: Option<String>,
}

/// Validated input for creating or updating a book
#[derive(Debug, Clone, PartialEq)]
pub struct BookInput {
    pub category_id: i32,
    pub published_date: NaiveDate,
    pub title: String,
    pub hepburn: String,
    pub author: String,
    pub release: String,
    pub url: String,
    pub summary: Option<String>,
}

/// Filter criteria for book queries
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    /// Substring match on title, hepburn, author or release
    pub query: Option<String>,
    pub category_id: Option<i32>,
    pub published_date: Option<NaiveDate>,
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find books matching the filter, ordered by id
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Create a new book
    async fn create(&self, input: BookInput) -> Result<Book, DomainError>;

    /// Update an existing book
    async fn update(&self, id: i32, input: BookInput) -> Result<Book, DomainError>;

    /// Delete a book by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Stored account used for login
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// Repository trait for User entity
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Create a user, or update the hash and role of an existing one
    async fn upsert(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, DomainError>;
}
