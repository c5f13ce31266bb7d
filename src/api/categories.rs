//! Category page handlers

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::Markup;

use super::response::{RecordId, found};
use crate::domain::{Actor, DomainError, FieldErrors};
use crate::forms::CategoryForm;
use crate::infrastructure::AppState;
use crate::services::category_service;
use crate::views;

pub const LIST_PATH: &str = "/categories/";

pub async fn list(State(state): State<AppState>, actor: Actor) -> Result<Markup, DomainError> {
    let categories = category_service::list(state.category_repo.as_ref()).await?;
    Ok(views::categories::list_page(&actor, &categories))
}

pub async fn view(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
) -> Result<Markup, DomainError> {
    let category = category_service::view(state.category_repo.as_ref(), id).await?;
    Ok(views::categories::detail_page(&actor, &category))
}

pub async fn add_form(actor: Actor) -> Markup {
    views::categories::add_page(&actor, &CategoryForm::default(), &FieldErrors::new())
}

pub async fn add(
    State(state): State<AppState>,
    actor: Actor,
    Form(form): Form<CategoryForm>,
) -> Response {
    match category_service::add(state.category_repo.as_ref(), &form).await {
        Ok(_) => found(LIST_PATH),
        Err(DomainError::Validation(errors)) => {
            views::categories::add_page(&actor, &form, &errors).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
) -> Result<Markup, DomainError> {
    let category = category_service::view(state.category_repo.as_ref(), id).await?;
    let form = CategoryForm::from_category(&category);
    Ok(views::categories::edit_page(
        &actor,
        &category,
        &form,
        &FieldErrors::new(),
    ))
}

pub async fn edit(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
    Form(form): Form<CategoryForm>,
) -> Result<Response, DomainError> {
    let repo = state.category_repo.as_ref();
    match category_service::edit(repo, id, &form).await {
        Ok(_) => Ok(found(LIST_PATH)),
        Err(DomainError::Validation(errors)) => {
            let category = category_service::view(repo, id).await?;
            Ok(views::categories::edit_page(&actor, &category, &form, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn confirm_delete(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
) -> Result<Markup, DomainError> {
    let category = category_service::deletable(state.category_repo.as_ref(), &actor, id).await?;
    Ok(views::confirm_delete_page(
        &actor,
        &format!("Delete Category: {}", category.name),
        &format!("/categories/delete/{}/", category.id),
        &format!("/categories/view/{}/", category.id),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    RecordId(id): RecordId,
) -> Result<Response, DomainError> {
    category_service::delete(state.category_repo.as_ref(), &actor, id).await?;
    Ok(found(LIST_PATH))
}
