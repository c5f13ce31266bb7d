//! Category Service - list/view/add/edit/delete for categories

use crate::domain::{Actor, Category, CategoryFilter, CategoryRepository, DomainError, FieldErrors};
use crate::forms::CategoryForm;
use crate::forms::category::DUPLICATE_NAME;

pub const DELETE_FORBIDDEN: &str = "You do not have permission to delete this category.";

/// All categories ordered by id
pub async fn list(repo: &dyn CategoryRepository) -> Result<Vec<Category>, DomainError> {
    repo.find_all(CategoryFilter::default()).await
}

pub async fn view(repo: &dyn CategoryRepository, id: i32) -> Result<Category, DomainError> {
    repo.find_by_id(id).await?.ok_or(DomainError::NotFound)
}

/// Validate and persist a new category
pub async fn add(repo: &dyn CategoryRepository, form: &CategoryForm) -> Result<Category, DomainError> {
    let input = form.clean_for_add()?;

    if repo.find_by_name(&input.name).await?.is_some() {
        return Err(FieldErrors::single("name", DUPLICATE_NAME).into());
    }

    let category = repo.create(input).await?;
    tracing::info!("Created category {} '{}'", category.id, category.name);
    Ok(category)
}

/// Apply an edit. The stored name is kept whatever the form carries.
pub async fn edit(
    repo: &dyn CategoryRepository,
    id: i32,
    form: &CategoryForm,
) -> Result<Category, DomainError> {
    let existing = view(repo, id).await?;
    let changes = form.clean_for_edit()?;

    if let Some(submitted) = form.name.as_deref()
        && submitted.trim() != existing.name
    {
        tracing::debug!(
            "Ignoring submitted name '{}' for category {}",
            submitted,
            id
        );
    }

    let category = repo.update(id, changes).await?;
    tracing::info!("Updated category {}", category.id);
    Ok(category)
}

/// Load a category the actor is about to delete. Missing ids are
/// `NotFound` before any permission check.
pub async fn deletable(
    repo: &dyn CategoryRepository,
    actor: &Actor,
    id: i32,
) -> Result<Category, DomainError> {
    let category = view(repo, id).await?;

    if !actor.can_delete() {
        tracing::warn!(
            "Refused delete of category {} by {}",
            id,
            actor.username().unwrap_or("anonymous")
        );
        return Err(DomainError::Forbidden(DELETE_FORBIDDEN.to_owned()));
    }

    Ok(category)
}

/// Superuser-only delete; the category's books are removed with it.
pub async fn delete(repo: &dyn CategoryRepository, actor: &Actor, id: i32) -> Result<(), DomainError> {
    let category = deletable(repo, actor, id).await?;

    repo.delete(category.id).await?;
    tracing::info!(
        "Deleted category {} '{}' (by {})",
        category.id,
        category.name,
        actor.username().unwrap_or_default()
    );
    Ok(())
}
