// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 按环境名称（profile）加载数据库连接等配置
pub mod settings;
