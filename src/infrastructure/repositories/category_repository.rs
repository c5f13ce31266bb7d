//! SeaORM implementation of CategoryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use super::contains_literal;
use crate::domain::{
    Category, CategoryChanges, CategoryFilter, CategoryRepository, DomainError, FieldErrors,
    NewCategory,
};
use crate::forms::category::DUPLICATE_NAME;
use crate::models::category::{ActiveModel, Column, Entity as CategoryEntity};

/// SeaORM-based implementation of CategoryRepository
pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// The UNIQUE constraint on name is the final word when two adds race.
fn map_write_error(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            FieldErrors::single("name", DUPLICATE_NAME).into()
        }
        _ => e.into(),
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_all(&self, filter: CategoryFilter) -> Result<Vec<Category>, DomainError> {
        let mut query = CategoryEntity::find();

        if let Some(q) = &filter.query
            && !q.is_empty()
        {
            let cond = Condition::any()
                .add(Column::Name.like(contains_literal(q)))
                .add(Column::Description.like(contains_literal(q)));
            query = query.filter(cond);
        }

        let categories = query.order_by_asc(Column::Id).all(&self.db).await?;
        Ok(categories.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DomainError> {
        let category = CategoryEntity::find_by_id(id).one(&self.db).await?;
        Ok(category.map(Category::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let category = CategoryEntity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(category.map(Category::from))
    }

    async fn create(&self, input: NewCategory) -> Result<Category, DomainError> {
        let category = ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            ..Default::default()
        };

        let result = category.insert(&self.db).await.map_err(map_write_error)?;
        Ok(Category::from(result))
    }

    async fn update(&self, id: i32, changes: CategoryChanges) -> Result<Category, DomainError> {
        let existing = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.description = Set(changes.description);

        let result = active.update(&self.db).await.map_err(map_write_error)?;
        Ok(Category::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        // books go with it through ON DELETE CASCADE
        let result = CategoryEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
