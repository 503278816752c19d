// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 用户实体
///
/// `role` 为整数角色代码，含义由上游服务定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub role: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// 新建用户的输入
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    pub role: i32,
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

impl NewUser {
    pub fn new(role: i32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            role,
            username: username.into(),
            password: password.into(),
        }
    }
}
