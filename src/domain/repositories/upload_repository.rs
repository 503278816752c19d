// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::upload::{NewUpload, Number, Upload};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 上传文件仓库特质
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// 在同一事务中写入上传记录及其全部号码
    async fn create(&self, upload: &NewUpload) -> Result<Upload, RepositoryError>;
    /// 根据ID查找上传记录
    async fn find_by_id(&self, id: i32) -> Result<Option<Upload>, RepositoryError>;
    /// 按ID列出上传记录，`ids` 为空时返回全部
    async fn list(&self, ids: &[i32]) -> Result<Vec<Upload>, RepositoryError>;
    /// 获取上传文件包含的号码
    async fn numbers_of(&self, upload_id: i32) -> Result<Vec<Number>, RepositoryError>;
    /// 删除上传记录（号码级联删除），返回删除的行数
    async fn remove(&self, ids: &[i32]) -> Result<u64, RepositoryError>;
}
