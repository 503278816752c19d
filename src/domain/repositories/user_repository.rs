// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{NewUser, User};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 用户仓库特质
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建用户，用户名重复时返回 `AlreadyExists`
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
    /// 根据ID查找用户
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    /// 根据用户名查找用户
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    /// 校验用户名与密码，成功时返回 (用户ID, 角色代码)
    async fn login_role(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<(i32, i32)>, RepositoryError>;
}
