// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建号码表（依赖上传文件表）
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Numbers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Numbers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Numbers::UploadId).integer().not_null())
                    .col(ColumnDef::new(Numbers::Number).string_len(14).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_numbers_upload")
                            .from(Numbers::Table, Numbers::UploadId)
                            .to(Uploads::Table, Uploads::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Numbers are always read back per upload
        manager
            .create_index(
                Index::create()
                    .name("idx_numbers_upload")
                    .table(Numbers::Table)
                    .col(Numbers::UploadId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Numbers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Numbers {
    #[sea_orm(iden = "tb_numbers")]
    Table,
    Id,
    UploadId,
    Number,
}

#[derive(DeriveIden)]
enum Uploads {
    #[sea_orm(iden = "tb_uploads")]
    Table,
    Id,
}
