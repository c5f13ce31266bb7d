//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{DomainError, User, UserRepository};
use crate::models::user::{ActiveModel, Column, Entity as UserEntity};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(user.map(User::from))
    }

    async fn upsert(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let existing = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?;

        let result = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.password_hash = Set(password_hash.to_owned());
                active.role = Set(role.to_owned());
                active.updated_at = Set(now);
                active.update(&self.db).await?
            }
            None => {
                let user = ActiveModel {
                    username: Set(username.to_owned()),
                    password_hash: Set(password_hash.to_owned()),
                    role: Set(role.to_owned()),
                    created_at: Set(now.clone()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                user.insert(&self.db).await?
            }
        };

        Ok(User::from(result))
    }
}
