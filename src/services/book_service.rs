//! Book Service - list/view/add/edit/delete for books

use crate::domain::{
    Actor, Book, BookFilter, BookInput, BookRepository, CategoryRepository, DomainError,
    FieldErrors,
};
use crate::forms::{BookForm, INVALID_CHOICE};

pub const DELETE_FORBIDDEN: &str = "You do not have permission to delete this book.";

/// All books ordered by id, with their category names
pub async fn list(repo: &dyn BookRepository) -> Result<Vec<Book>, DomainError> {
    repo.find_all(BookFilter::default()).await
}

pub async fn view(repo: &dyn BookRepository, id: i32) -> Result<Book, DomainError> {
    repo.find_by_id(id).await?.ok_or(DomainError::NotFound)
}

/// Clean the form and check the category it points at exists.
async fn validate(
    categories: &dyn CategoryRepository,
    form: &BookForm,
) -> Result<BookInput, DomainError> {
    let input = form.clean()?;

    if categories.find_by_id(input.category_id).await?.is_none() {
        return Err(FieldErrors::single("category", INVALID_CHOICE).into());
    }

    Ok(input)
}

pub async fn add(
    books: &dyn BookRepository,
    categories: &dyn CategoryRepository,
    form: &BookForm,
) -> Result<Book, DomainError> {
    let input = validate(categories, form).await?;
    let book = books.create(input).await?;
    tracing::info!("Created book {} '{}'", book.id, book.title);
    Ok(book)
}

/// Every field is editable, the category included.
pub async fn edit(
    books: &dyn BookRepository,
    categories: &dyn CategoryRepository,
    id: i32,
    form: &BookForm,
) -> Result<Book, DomainError> {
    view(books, id).await?;
    let input = validate(categories, form).await?;
    let book = books.update(id, input).await?;
    tracing::info!("Updated book {}", book.id);
    Ok(book)
}

pub async fn deletable(books: &dyn BookRepository, actor: &Actor, id: i32) -> Result<Book, DomainError> {
    let book = view(books, id).await?;

    if !actor.can_delete() {
        tracing::warn!(
            "Refused delete of book {} by {}",
            id,
            actor.username().unwrap_or("anonymous")
        );
        return Err(DomainError::Forbidden(DELETE_FORBIDDEN.to_owned()));
    }

    Ok(book)
}

/// Superuser-only delete
pub async fn delete(books: &dyn BookRepository, actor: &Actor, id: i32) -> Result<(), DomainError> {
    let book = deletable(books, actor, id).await?;

    books.delete(book.id).await?;
    tracing::info!(
        "Deleted book {} '{}' (by {})",
        book.id,
        book.title,
        actor.username().unwrap_or_default()
    );
    Ok(())
}
