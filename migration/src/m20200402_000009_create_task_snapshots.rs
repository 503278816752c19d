// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建已停止任务与已完成任务的快照表
///
/// 快照记录任务、网站以及三个分类结果文件的路径，每个路径唯一。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Create stopped tasks table
        manager
            .create_table(
                Table::create()
                    .table(StoppedTasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StoppedTasks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StoppedTasks::TaskId).integer().not_null())
                    .col(ColumnDef::new(StoppedTasks::WebsiteId).integer().not_null())
                    .col(
                        ColumnDef::new(StoppedTasks::InputFilename)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StoppedTasks::OkFile)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StoppedTasks::NotOkFile)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StoppedTasks::UnknownFile)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stopped_tasks_task")
                            .from(StoppedTasks::Table, StoppedTasks::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stopped_tasks_website")
                            .from(StoppedTasks::Table, StoppedTasks::WebsiteId)
                            .to(Websites::Table, Websites::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 2. Create completed tasks table
        manager
            .create_table(
                Table::create()
                    .table(CompletedTasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompletedTasks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompletedTasks::TaskId).integer().not_null())
                    .col(
                        ColumnDef::new(CompletedTasks::WebsiteId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompletedTasks::OkFile)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CompletedTasks::NotOkFile)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CompletedTasks::UnknownFile)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_completed_tasks_task")
                            .from(CompletedTasks::Table, CompletedTasks::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_completed_tasks_website")
                            .from(CompletedTasks::Table, CompletedTasks::WebsiteId)
                            .to(Websites::Table, Websites::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompletedTasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StoppedTasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum StoppedTasks {
    #[sea_orm(iden = "tb_stopped_tasks")]
    Table,
    Id,
    TaskId,
    WebsiteId,
    InputFilename,
    OkFile,
    NotOkFile,
    UnknownFile,
}

#[derive(DeriveIden)]
enum CompletedTasks {
    #[sea_orm(iden = "tb_completed_tasks")]
    Table,
    Id,
    TaskId,
    WebsiteId,
    OkFile,
    NotOkFile,
    UnknownFile,
}

#[derive(DeriveIden)]
enum Tasks {
    #[sea_orm(iden = "tb_tasks")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Websites {
    #[sea_orm(iden = "tb_websites")]
    Table,
    Id,
}
