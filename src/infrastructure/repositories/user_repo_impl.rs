// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{NewUser, User};
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::user;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use validator::Validate;

/// 用户仓库实现
#[derive(Clone)]
pub struct UserRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            role: model.role,
            username: model.username,
            password: model.password,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        new_user.validate()?;

        let model = user::ActiveModel {
            role: Set(new_user.role),
            username: Set(new_user.username.clone()),
            password: Set(new_user.password.clone()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        tracing::info!(user_id = model.id, username = %model.username, "User created");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let model = user::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn login_role(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<(i32, i32)>, RepositoryError> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .filter(user::Column::Password.eq(password))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(|m| (m.id, m.role)))
    }
}
