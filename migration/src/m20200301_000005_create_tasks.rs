// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建任务表及任务与上传文件的关联表
///
/// 任务通过 website_id 引用单个网站，通过 tb_task_uploads 关联多个上传文件，
/// 不再以文本字段保存网站或上传文件列表。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Create tasks table (depends on users and websites)
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tasks::SchedulerId).integer().not_null())
                    .col(ColumnDef::new(Tasks::WebsiteId).integer().not_null())
                    .col(
                        ColumnDef::new(Tasks::DateScheduled)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Tasks::Progress)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_scheduler")
                            .from(Tasks::Table, Tasks::SchedulerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_website")
                            .from(Tasks::Table, Tasks::WebsiteId)
                            .to(Websites::Table, Websites::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_scheduler")
                    .table(Tasks::Table)
                    .col(Tasks::SchedulerId)
                    .to_owned(),
            )
            .await?;

        // 2. Create tb_task_uploads association (depends on tasks and uploads)
        manager
            .create_table(
                Table::create()
                    .table(TaskUploads::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TaskUploads::TaskId).integer().not_null())
                    .col(ColumnDef::new(TaskUploads::UploadId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(TaskUploads::TaskId)
                            .col(TaskUploads::UploadId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_uploads_task")
                            .from(TaskUploads::Table, TaskUploads::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_uploads_upload")
                            .from(TaskUploads::Table, TaskUploads::UploadId)
                            .to(Uploads::Table, Uploads::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskUploads::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tasks {
    #[sea_orm(iden = "tb_tasks")]
    Table,
    Id,
    SchedulerId,
    WebsiteId,
    DateScheduled,
    Progress,
}

#[derive(DeriveIden)]
enum TaskUploads {
    #[sea_orm(iden = "tb_task_uploads")]
    Table,
    TaskId,
    UploadId,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "tb_users")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Websites {
    #[sea_orm(iden = "tb_websites")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Uploads {
    #[sea_orm(iden = "tb_uploads")]
    Table,
    Id,
}
