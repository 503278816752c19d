// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 任务数据库实体模型
///
/// 对应数据库中的 tb_tasks 表。任务属于一个调度用户，指向一个目标网站，
/// 并通过 tb_task_uploads 关联若干上传文件。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub scheduler_id: i32,
    pub website_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(32))", unique)]
    pub date_scheduled: String,
    pub progress: i32,
    pub status: i32,
    pub total_numbers: i32,
    pub processed: i32,
    pub ok_count: i32,
    pub not_ok_count: i32,
    pub unknown_count: i32,
    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub input_filename: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub ok_file: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub not_ok_file: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub unknown_file: Option<String>,
    pub per_ip: i32,
    pub ip_used: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SchedulerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Scheduler,
    #[sea_orm(
        belongs_to = "super::website::Entity",
        from = "Column::WebsiteId",
        to = "super::website::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Website,
    #[sea_orm(has_many = "super::task_upload::Entity")]
    TaskUploads,
    #[sea_orm(has_many = "super::stopped_task::Entity")]
    StoppedTasks,
    #[sea_orm(has_many = "super::completed_task::Entity")]
    CompletedTasks,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scheduler.def()
    }
}

impl Related<super::website::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Website.def()
    }
}

impl Related<super::task_upload::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskUploads.def()
    }
}

impl Related<super::upload::Entity> for Entity {
    fn to() -> RelationDef {
        super::task_upload::Relation::Upload.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::task_upload::Relation::Task.def().rev())
    }
}

impl Related<super::stopped_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoppedTasks.def()
    }
}

impl Related<super::completed_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompletedTasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
