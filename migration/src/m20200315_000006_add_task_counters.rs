// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 为任务表添加状态与进度计数字段
#[derive(DeriveMigrationName)]
pub struct Migration;

const COUNTERS: [Tasks; 6] = [
    Tasks::Status,
    Tasks::TotalNumbers,
    Tasks::Processed,
    Tasks::OkCount,
    Tasks::NotOkCount,
    Tasks::UnknownCount,
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite accepts a single change per ALTER TABLE
        for column in COUNTERS {
            manager
                .alter_table(
                    Table::alter()
                        .table(Tasks::Table)
                        .add_column(ColumnDef::new(column).integer().not_null().default(0))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in COUNTERS.into_iter().rev() {
            manager
                .alter_table(
                    Table::alter()
                        .table(Tasks::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Tasks {
    #[sea_orm(iden = "tb_tasks")]
    Table,
    Status,
    TotalNumbers,
    Processed,
    OkCount,
    NotOkCount,
    UnknownCount,
}
