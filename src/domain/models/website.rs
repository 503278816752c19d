// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 网站实体
///
/// 任务的扫描目标，昵称与地址在库中均唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub id: i32,
    pub nickname: String,
    pub address: String,
}

/// 新增网站的输入
#[derive(Debug, Clone, Validate)]
pub struct NewWebsite {
    #[validate(length(min = 1, max = 64))]
    pub nickname: String,
    #[validate(length(min = 1, max = 256))]
    pub address: String,
}

impl NewWebsite {
    pub fn new(nickname: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            address: address.into(),
        }
    }
}
