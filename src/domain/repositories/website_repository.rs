// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website::{NewWebsite, Website};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 网站仓库特质
#[async_trait]
pub trait WebsiteRepository: Send + Sync {
    /// 新增网站，昵称或地址重复时返回 `AlreadyExists`
    async fn add(&self, website: &NewWebsite) -> Result<Website, RepositoryError>;
    /// 根据ID查找网站
    async fn find_by_id(&self, id: i32) -> Result<Option<Website>, RepositoryError>;
    /// 按ID列出网站，`ids` 为空时返回全部
    async fn list(&self, ids: &[i32]) -> Result<Vec<Website>, RepositoryError>;
}
