//! Book page handlers. The book list is the site root.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::Markup;

use super::response::{RecordId, found};
use crate::domain::{Actor, DomainError, FieldErrors};
use crate::forms::BookForm;
use crate::infrastructure::AppState;
use crate::services::{book_service, category_service};
use crate::views;

pub const LIST_PATH: &str = "/";

pub async fn list(State(state): State<AppState>, actor: Actor) -> Result<Markup, DomainError> {
    let books = book_service::list(state.book_repo.as_ref()).await?;
    Ok(views::books::list_page(&actor, &books))
}

pub async fn view(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
) -> Result<Markup, DomainError> {
    let book = book_service::view(state.book_repo.as_ref(), id).await?;
    Ok(views::books::detail_page(&actor, &book))
}

pub async fn add_form(State(state): State<AppState>, actor: Actor) -> Result<Markup, DomainError> {
    let categories = category_service::list(state.category_repo.as_ref()).await?;
    Ok(views::books::add_page(
        &actor,
        &categories,
        &BookForm::default(),
        &FieldErrors::new(),
    ))
}

pub async fn add(
    State(state): State<AppState>,
    actor: Actor,
    Form(form): Form<BookForm>,
) -> Result<Response, DomainError> {
    let result = book_service::add(
        state.book_repo.as_ref(),
        state.category_repo.as_ref(),
        &form,
    )
    .await;

    match result {
        Ok(_) => Ok(found(LIST_PATH)),
        Err(DomainError::Validation(errors)) => {
            let categories = category_service::list(state.category_repo.as_ref()).await?;
            Ok(views::books::add_page(&actor, &categories, &form, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
) -> Result<Markup, DomainError> {
    let book = book_service::view(state.book_repo.as_ref(), id).await?;
    let categories = category_service::list(state.category_repo.as_ref()).await?;
    Ok(views::books::edit_page(
        &actor,
        &book,
        &categories,
        &BookForm::from_book(&book),
        &FieldErrors::new(),
    ))
}

pub async fn edit(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
    Form(form): Form<BookForm>,
) -> Result<Response, DomainError> {
    let result = book_service::edit(
        state.book_repo.as_ref(),
        state.category_repo.as_ref(),
        id,
        &form,
    )
    .await;

    match result {
        Ok(_) => Ok(found(LIST_PATH)),
        Err(DomainError::Validation(errors)) => {
            let book = book_service::view(state.book_repo.as_ref(), id).await?;
            let categories = category_service::list(state.category_repo.as_ref()).await?;
            Ok(views::books::edit_page(&actor, &book, &categories, &form, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn confirm_delete(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
) -> Result<Markup, DomainError> {
    let book = book_service::deletable(state.book_repo.as_ref(), &actor, id).await?;
    Ok(views::confirm_delete_page(
        &actor,
        &format!("Delete Book: {}", book.title),
        &format!("/delete/{}/", book.id),
        &format!("/view/{}/", book.id),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
) -> Result<Response, DomainError> {
    book_service::delete(state.book_repo.as_ref(), &actor, id).await?;
    Ok(found(LIST_PATH))
}
