// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心数据结构，包括：
/// - 领域模型（models）：用户、网站、上传文件、号码、任务及其快照
/// - 仓库接口（repositories）：数据持久化抽象接口
///
/// 领域层不依赖于任何具体的数据库实现。
pub mod models;
pub mod repositories;
