// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 网站数据库实体模型
///
/// 对应数据库中的 tb_websites 表，昵称与地址均唯一
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_websites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(64))", unique)]
    pub nickname: String,
    #[sea_orm(column_type = "String(StringLen::N(256))", unique)]
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::task::Entity")]
    Tasks,
    #[sea_orm(has_many = "super::stopped_task::Entity")]
    StoppedTasks,
    #[sea_orm(has_many = "super::completed_task::Entity")]
    CompletedTasks,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
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
