//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use super::contains_literal;
use crate::domain::{Book, BookFilter, BookInput, BookRepository, DomainError, FieldErrors};
use crate::forms::INVALID_CHOICE;
use crate::models::book::{self, ActiveModel, Column, Entity as BookEntity};
use crate::models::category::{self, Entity as CategoryEntity};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_book(model: book::Model, category: Option<category::Model>) -> Book {
        Book {
            id: model.id,
            category_id: model.category_id,
            category_name: category.map(|c| c.name).unwrap_or_default(),
            published_date: model.published_date,
            title: model.title,
            hepburn: model.hepburn,
            author: model.author,
            release: model.release,
            url: model.url,
            summary: model.summary,
        }
    }

    async fn reload(&self, id: i32) -> Result<Book, DomainError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::Internal(format!("book {} vanished after write", id)))
    }
}

/// The category may be deleted between validation and the write.
fn map_write_error(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            FieldErrors::single("category", INVALID_CHOICE).into()
        }
        _ => e.into(),
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError> {
        let mut query = BookEntity::find();

        if let Some(q) = &filter.query
            && !q.is_empty()
        {
            let cond = Condition::any()
                .add(Column::Title.like(contains_literal(q)))
                .add(Column::Hepburn.like(contains_literal(q)))
                .add(Column::Author.like(contains_literal(q)))
                .add(Column::Release.like(contains_literal(q)));
            query = query.filter(cond);
        }

        if let Some(category_id) = filter.category_id {
            query = query.filter(Column::CategoryId.eq(category_id));
        }

        if let Some(date) = filter.published_date {
            query = query.filter(Column::PublishedDate.eq(date));
        }

        let rows = query
            .find_also_related(CategoryEntity)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(book, category)| Self::to_book(book, category))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        let row = BookEntity::find_by_id(id)
            .find_also_related(CategoryEntity)
            .one(&self.db)
            .await?;

        Ok(row.map(|(book, category)| Self::to_book(book, category)))
    }

    async fn create(&self, input: BookInput) -> Result<Book, DomainError> {
        let new_book = ActiveModel {
            category_id: Set(input.category_id),
            published_date: Set(input.published_date),
            title: Set(input.title),
            hepburn: Set(input.hepburn),
            author: Set(input.author),
            release: Set(input.release),
            url: Set(input.url),
            summary: Set(input.summary),
            ..Default::default()
        };

        let result = new_book.insert(&self.db).await.map_err(map_write_error)?;
        self.reload(result.id).await
    }

    async fn update(&self, id: i32, input: BookInput) -> Result<Book, DomainError> {
        let existing = BookEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.category_id = Set(input.category_id);
        active.published_date = Set(input.published_date);
        active.title = Set(input.title);
        active.hepburn = Set(input.hepburn);
        active.author = Set(input.author);
        active.release = Set(input.release);
        active.url = Set(input.url);
        active.summary = Set(input.summary);

        active.update(&self.db).await.map_err(map_write_error)?;
        self.reload(id).await
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = BookEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
