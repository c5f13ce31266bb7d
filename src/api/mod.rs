pub mod admin;
pub mod auth;
pub mod books;
pub mod categories;
pub mod health;
pub mod response;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books (site root). GET on a delete route only renders a confirmation.
        .route("/", get(books::list))
        .route("/add/", get(books::add_form).post(books::add))
        .route("/view/:id/", get(books::view))
        .route("/edit/:id/", get(books::edit_form).post(books::edit))
        .route("/delete/:id/", get(books::confirm_delete).post(books::delete))
        // Categories
        .route("/categories/", get(categories::list))
        .route(
            "/categories/add/",
            get(categories::add_form).post(categories::add),
        )
        .route("/categories/view/:id/", get(categories::view))
        .route(
            "/categories/edit/:id/",
            get(categories::edit_form).post(categories::edit),
        )
        .route(
            "/categories/delete/:id/",
            get(categories::confirm_delete).post(categories::delete),
        )
        // Session
        .route("/login/", get(auth::login_form).post(auth::login))
        .route("/logout/", get(auth::logout).post(auth::logout))
        // Management
        .route("/admin/categories/", get(admin::list_categories))
        .route("/admin/books/", get(admin::list_books))
        .with_state(state)
}
