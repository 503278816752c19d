// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含与数据库交互的技术实现：
/// - 数据库（database）：连接池、实体映射以及建表/迁移入口
/// - 仓库实现（repositories）：领域仓库接口的具体实现
pub mod database;
pub mod repositories;
