// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// 单个号码允许的最大长度（字符数）
pub const MAX_NUMBER_LEN: usize = 14;

/// 上传文件实体
///
/// 用户上传的号码文件，`total_numbers` 记录拆分出的号码数量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    /// 上传记录ID
    pub id: i32,
    /// 上传者（用户）ID
    pub uploader_id: i32,
    /// 用户提交时的原始文件名
    pub filename: String,
    /// 保存在磁盘上的文件名
    pub name_on_disk: String,
    /// 上传日期，格式见 [`super::TIMESTAMP_FORMAT`]
    pub upload_date: String,
    /// 号码总数
    pub total_numbers: i32,
    /// 可选的处理状态代码
    pub status: Option<i32>,
}

/// 号码实体，始终属于一个上传文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Number {
    pub id: i32,
    pub upload_id: i32,
    pub number: String,
}

/// 新建上传文件的输入，包含拆分后的全部号码
#[derive(Debug, Clone, Validate)]
pub struct NewUpload {
    pub uploader_id: i32,
    #[validate(length(min = 1, max = 128))]
    pub filename: String,
    #[validate(length(min = 1, max = 128))]
    pub name_on_disk: String,
    #[validate(length(min = 1, max = 32))]
    pub upload_date: String,
    #[validate(custom(function = "validate_numbers"))]
    pub numbers: Vec<String>,
}

impl NewUpload {
    /// 号码总数，即写入 `total_numbers` 的值
    pub fn total_numbers(&self) -> i32 {
        i32::try_from(self.numbers.len()).unwrap_or(i32::MAX)
    }
}

/// 校验每个号码非空且不超过 [`MAX_NUMBER_LEN`] 个字符
fn validate_numbers(numbers: &[String]) -> Result<(), ValidationError> {
    match numbers
        .iter()
        .find(|n| n.is_empty() || n.chars().count() > MAX_NUMBER_LEN)
    {
        Some(bad) => {
            let mut error = ValidationError::new("number_length");
            error.message = Some(Cow::Owned(format!(
                "number '{}' must be 1 to {} characters",
                bad, MAX_NUMBER_LEN
            )));
            Err(error)
        }
        None => Ok(()),
    }
}
