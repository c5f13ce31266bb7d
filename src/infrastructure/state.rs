//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{BookRepository, CategoryRepository, UserRepository};
use crate::infrastructure::auth::SessionKeys;
use crate::infrastructure::{SeaOrmBookRepository, SeaOrmCategoryRepository, SeaOrmUserRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    session_keys: Arc<SessionKeys>,
    /// Category repository
    pub category_repo: Arc<dyn CategoryRepository>,
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
    /// User repository
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection, session_keys: SessionKeys) -> Self {
        let category_repo = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let user_repo = Arc::new(SeaOrmUserRepository::new(db));

        Self {
            session_keys: Arc::new(session_keys),
            category_repo,
            book_repo,
            user_repo,
        }
    }

    pub fn session_keys(&self) -> &SessionKeys {
        &self.session_keys
    }
}
