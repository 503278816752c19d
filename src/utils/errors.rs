// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::DomainError;
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

/// 仓库层错误类型
///
/// 唯一约束与外键约束冲突由数据库检测，并转换为独立的错误变体
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("数据库错误: {0}")]
    DatabaseError(DbErr),

    #[error("未找到数据")]
    NotFound,

    #[error("数据已存在: {0}")]
    AlreadyExists(String),

    #[error("引用的数据不存在: {0}")]
    MissingReference(String),

    #[error("无效参数: {0}")]
    InvalidParameter(String),

    #[error("校验失败: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("领域错误: {0}")]
    Domain(#[from] DomainError),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                RepositoryError::AlreadyExists(detail)
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                RepositoryError::MissingReference(detail)
            }
            _ => match foreign_key_detail(&err) {
                Some(detail) => RepositoryError::MissingReference(detail),
                None => RepositoryError::DatabaseError(err),
            },
        }
    }
}

/// SQLite 对 RESTRICT 外键拒绝删除时返回扩展代码 1811，`sql_err()` 无法识别
fn foreign_key_detail(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(e))) => {
            let restrict = e.code().as_deref() == Some("1811");
            if restrict || e.message().contains("FOREIGN KEY constraint failed") {
                Some(e.message().to_string())
            } else {
                None
            }
        }
        _ => None,
    }
}
