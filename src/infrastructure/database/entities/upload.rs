// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 上传文件数据库实体模型
///
/// 对应数据库中的 tb_uploads 表，一个上传文件拆分为多条号码记录
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_uploads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub uploader_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub filename: String,
    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub name_on_disk: String,
    #[sea_orm(column_type = "String(StringLen::N(32))")]
    pub upload_date: String,
    pub total_numbers: i32,
    pub status: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UploaderId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Uploader,
    #[sea_orm(has_many = "super::number::Entity")]
    Numbers,
    #[sea_orm(has_many = "super::task_upload::Entity")]
    TaskUploads,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Uploader.def()
    }
}

impl Related<super::number::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Numbers.def()
    }
}

impl Related<super::task_upload::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskUploads.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        super::task_upload::Relation::Task.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::task_upload::Relation::Upload.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
