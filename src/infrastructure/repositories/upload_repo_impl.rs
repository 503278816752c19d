// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::upload::{NewUpload, Number, Upload};
use crate::domain::repositories::upload_repository::UploadRepository;
use crate::infrastructure::database::entities::{number, upload};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use validator::Validate;

/// 每条 INSERT 语句写入的号码数，避免超出数据库的绑定参数上限
const NUMBER_BATCH_SIZE: usize = 1_000;

/// 上传文件仓库实现
#[derive(Clone)]
pub struct UploadRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UploadRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<upload::Model> for Upload {
    fn from(model: upload::Model) -> Self {
        Self {
            id: model.id,
            uploader_id: model.uploader_id,
            filename: model.filename,
            name_on_disk: model.name_on_disk,
            upload_date: model.upload_date,
            total_numbers: model.total_numbers,
            status: model.status,
        }
    }
}

impl From<number::Model> for Number {
    fn from(model: number::Model) -> Self {
        Self {
            id: model.id,
            upload_id: model.upload_id,
            number: model.number,
        }
    }
}

#[async_trait]
impl UploadRepository for UploadRepositoryImpl {
    async fn create(&self, new_upload: &NewUpload) -> Result<Upload, RepositoryError> {
        new_upload.validate()?;

        let txn = self.db.begin().await?;

        let model = upload::ActiveModel {
            uploader_id: Set(new_upload.uploader_id),
            filename: Set(new_upload.filename.clone()),
            name_on_disk: Set(new_upload.name_on_disk.clone()),
            upload_date: Set(new_upload.upload_date.clone()),
            total_numbers: Set(new_upload.total_numbers()),
            status: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for chunk in new_upload.numbers.chunks(NUMBER_BATCH_SIZE) {
            let rows = chunk.iter().map(|value| number::ActiveModel {
                upload_id: Set(model.id),
                number: Set(value.clone()),
                ..Default::default()
            });
            number::Entity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;

        tracing::info!(
            upload_id = model.id,
            uploader_id = model.uploader_id,
            total_numbers = model.total_numbers,
            "Upload stored"
        );
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Upload>, RepositoryError> {
        let model = upload::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, ids: &[i32]) -> Result<Vec<Upload>, RepositoryError> {
        let mut query = upload::Entity::find().order_by_asc(upload::Column::Id);
        if !ids.is_empty() {
            query = query.filter(upload::Column::Id.is_in(ids.to_vec()));
        }

        let models = query.all(self.db.as_ref()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn numbers_of(&self, upload_id: i32) -> Result<Vec<Number>, RepositoryError> {
        let upload = upload::Entity::find_by_id(upload_id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let numbers = upload
            .find_related(number::Entity)
            .order_by_asc(number::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(numbers.into_iter().map(Into::into).collect())
    }

    async fn remove(&self, ids: &[i32]) -> Result<u64, RepositoryError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = upload::Entity::delete_many()
            .filter(upload::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;

        tracing::info!(removed = result.rows_affected, "Uploads removed");
        Ok(result.rows_affected)
    }
}
