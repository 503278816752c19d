// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建上传文件表（依赖用户表）
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Uploads::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Uploads::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Uploads::UploaderId).integer().not_null())
                    .col(ColumnDef::new(Uploads::Filename).string_len(128).not_null())
                    .col(
                        ColumnDef::new(Uploads::NameOnDisk)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Uploads::UploadDate).string_len(32).not_null())
                    .col(ColumnDef::new(Uploads::TotalNumbers).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_uploads_uploader")
                            .from(Uploads::Table, Uploads::UploaderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_uploads_uploader")
                    .table(Uploads::Table)
                    .col(Uploads::UploaderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Uploads::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Uploads {
    #[sea_orm(iden = "tb_uploads")]
    Table,
    Id,
    UploaderId,
    Filename,
    NameOnDisk,
    UploadDate,
    TotalNumbers,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "tb_users")]
    Table,
    Id,
}
