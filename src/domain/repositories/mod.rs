// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层基于 SeaORM 提供。
///
/// 包含的仓库接口：
/// - 用户仓库（user_repository）：用户的创建与登录查询
/// - 网站仓库（website_repository）：扫描目标网站的维护
/// - 上传仓库（upload_repository）：上传文件及其号码的存取
/// - 任务仓库（task_repository）：任务、进度、结果文件及终态快照
pub mod task_repository;
pub mod upload_repository;
pub mod user_repository;
pub mod website_repository;

pub use crate::utils::errors::RepositoryError;
