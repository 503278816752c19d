// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
/// 实体的列集合必须与 migration crate 中的迁移日志保持一致
pub mod completed_task;
pub mod number;
pub mod stopped_task;
pub mod task;
pub mod task_upload;
pub mod upload;
pub mod user;
pub mod website;
