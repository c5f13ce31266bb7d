//! Management endpoints: superuser-only list, search and filter over both
//! tables, as JSON.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{Actor, BookFilter, CategoryFilter, DomainError};
use crate::forms::parse_date;
use crate::infrastructure::AppState;

pub const ADMIN_FORBIDDEN: &str = "Superuser privileges are required.";

#[derive(Debug, Default, Deserialize)]
pub struct CategorySearch {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookSearch {
    pub q: Option<String>,
    pub category: Option<String>,
    pub published_date: Option<String>,
}

fn require_superuser(actor: &Actor) -> Result<(), DomainError> {
    if actor.is_superuser() {
        Ok(())
    } else {
        Err(DomainError::Forbidden(ADMIN_FORBIDDEN.to_owned()))
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

pub async fn list_categories(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<CategorySearch>,
) -> Result<Response, DomainError> {
    require_superuser(&actor)?;

    let categories = state
        .category_repo
        .find_all(CategoryFilter { query: params.q })
        .await?;
    let total = categories.len();

    Ok(Json(json!({
        "categories": categories,
        "total": total
    }))
    .into_response())
}

pub async fn list_books(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<BookSearch>,
) -> Result<Response, DomainError> {
    require_superuser(&actor)?;

    let category_id = match params.category.as_deref().filter(|c| !c.is_empty()) {
        Some(raw) => match raw.parse::<i32>() {
            Ok(id) => Some(id),
            Err(_) => return Ok(bad_request(format!("Invalid category id: {}", raw))),
        },
        None => None,
    };

    let published_date = match params.published_date.as_deref().filter(|d| !d.is_empty()) {
        Some(raw) => match parse_date(raw) {
            Some(date) => Some(date),
            None => return Ok(bad_request(format!("Invalid date: {}", raw))),
        },
        None => None,
    };

    let books = state
        .book_repo
        .find_all(BookFilter {
            query: params.q,
            category_id,
            published_date,
        })
        .await?;
    let total = books.len();

    Ok(Json(json!({
        "books": books,
        "total": total
    }))
    .into_response())
}
