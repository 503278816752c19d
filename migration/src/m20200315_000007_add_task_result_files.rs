// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 为任务表添加输入文件与分类结果文件路径
#[derive(DeriveMigrationName)]
pub struct Migration;

const FILES: [Tasks; 4] = [
    Tasks::InputFilename,
    Tasks::OkFile,
    Tasks::NotOkFile,
    Tasks::UnknownFile,
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in FILES {
            manager
                .alter_table(
                    Table::alter()
                        .table(Tasks::Table)
                        .add_column(ColumnDef::new(column).string_len(256).null())
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in FILES.into_iter().rev() {
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
    InputFilename,
    OkFile,
    NotOkFile,
    UnknownFile,
}
