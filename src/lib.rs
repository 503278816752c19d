// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 按环境（profile）加载数据库等配置
pub mod config;

/// 领域模块
///
/// 包含核心实体与仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供数据库连接、实体映射、建表入口和仓库实现
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型与日志初始化
pub mod utils;
