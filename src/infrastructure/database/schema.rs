// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::{info, warn};

/// 已声明的数据表，按依赖顺序排列（被引用的表在前）
pub const TABLES: [&str; 8] = [
    "tb_users",
    "tb_websites",
    "tb_uploads",
    "tb_numbers",
    "tb_tasks",
    "tb_task_uploads",
    "tb_stopped_tasks",
    "tb_completed_tasks",
];

/// 删除并重建全部数据表
///
/// 删除数据库中的所有表（包括迁移记录表），然后按顺序执行完整的迁移日志。
/// 现有数据将被不可恢复地清除，没有确认、备份或演练模式，仅用于开发环境初始化。
///
/// # 参数
///
/// * `db` - 数据库连接
///
/// # 返回值
///
/// * `Ok(())` - 所有表已重建且为空
/// * `Err(DbErr)` - 删除或创建过程中出现的错误
pub async fn recreate(db: &DatabaseConnection) -> Result<(), DbErr> {
    warn!("Dropping all tables, existing data will be lost");
    Migrator::fresh(db).await?;
    info!(tables = TABLES.len(), "Schema recreated");
    Ok(())
}

/// 执行尚未应用的迁移，不删除任何数据
pub async fn upgrade(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = pending_migrations(db).await?;
    if pending.is_empty() {
        info!("Schema is up to date");
        return Ok(());
    }

    info!(count = pending.len(), "Applying pending migrations");
    Migrator::up(db, None).await
}

/// 获取尚未应用的迁移名称
pub async fn pending_migrations(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    Ok(pending.iter().map(|m| m.name().to_string()).collect())
}
