// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};

/// 领域模型模块
///
/// 包含用户、网站、上传文件、号码、任务及任务快照等核心实体，
/// 以及写入前使用的输入结构和校验规则。
pub mod snapshot;
pub mod task;
pub mod upload;
pub mod user;
pub mod website;

/// 日期字段在数据库中的存储格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 将时间格式化为数据库中保存的日期字符串
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
