// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 已停止任务快照
///
/// 保留输入文件路径，以便任务稍后恢复执行
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_stopped_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub task_id: i32,
    pub website_id: i32,
    #[sea_orm(column_type = "String(StringLen::N(256))")]
    pub input_filename: String,
    #[sea_orm(column_type = "String(StringLen::N(256))", unique)]
    pub ok_file: String,
    #[sea_orm(column_type = "String(StringLen::N(256))", unique)]
    pub not_ok_file: String,
    #[sea_orm(column_type = "String(StringLen::N(256))", unique)]
    pub unknown_file: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::task::Entity",
        from = "Column::TaskId",
        to = "super::task::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Task,
    #[sea_orm(
        belongs_to = "super::website::Entity",
        from = "Column::WebsiteId",
        to = "super::website::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Website,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::website::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Website.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
