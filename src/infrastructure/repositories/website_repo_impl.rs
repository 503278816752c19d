// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website::{NewWebsite, Website};
use crate::domain::repositories::website_repository::WebsiteRepository;
use crate::infrastructure::database::entities::website;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use validator::Validate;

/// 网站仓库实现
#[derive(Clone)]
pub struct WebsiteRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl WebsiteRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<website::Model> for Website {
    fn from(model: website::Model) -> Self {
        Self {
            id: model.id,
            nickname: model.nickname,
            address: model.address,
        }
    }
}

#[async_trait]
impl WebsiteRepository for WebsiteRepositoryImpl {
    async fn add(&self, new_website: &NewWebsite) -> Result<Website, RepositoryError> {
        new_website.validate()?;

        let model = website::ActiveModel {
            nickname: Set(new_website.nickname.clone()),
            address: Set(new_website.address.clone()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Website>, RepositoryError> {
        let model = website::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, ids: &[i32]) -> Result<Vec<Website>, RepositoryError> {
        let mut query = website::Entity::find().order_by_asc(website::Column::Id);
        if !ids.is_empty() {
            query = query.filter(website::Column::Id.is_in(ids.to_vec()));
        }

        let models = query.all(self.db.as_ref()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
