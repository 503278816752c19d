// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20200301_000001_create_users;
mod m20200301_000002_create_websites;
mod m20200301_000003_create_uploads;
mod m20200301_000004_create_numbers;
mod m20200301_000005_create_tasks;
mod m20200315_000006_add_task_counters;
mod m20200315_000007_add_task_result_files;
mod m20200402_000008_add_upload_status;
mod m20200402_000009_create_task_snapshots;
mod m20200520_000010_add_task_ip_throttling;

/// 数据库迁移器
///
/// 迁移按声明顺序执行，每一步都必须同时兼容 PostgreSQL 与 SQLite：
/// 每条 ALTER 语句只修改一列，外键只在建表时声明。
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回按执行顺序排列的迁移列表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20200301_000001_create_users::Migration),
            Box::new(m20200301_000002_create_websites::Migration),
            Box::new(m20200301_000003_create_uploads::Migration),
            Box::new(m20200301_000004_create_numbers::Migration),
            Box::new(m20200301_000005_create_tasks::Migration),
            Box::new(m20200315_000006_add_task_counters::Migration),
            Box::new(m20200315_000007_add_task_result_files::Migration),
            Box::new(m20200402_000008_add_upload_status::Migration),
            Box::new(m20200402_000009_create_task_snapshots::Migration),
            Box::new(m20200520_000010_add_task_ip_throttling::Migration),
        ]
    }
}
