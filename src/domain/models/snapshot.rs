// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 已停止任务的快照
///
/// 记录恢复执行所需的输入文件以及已写出的分类结果文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoppedTask {
    pub id: i32,
    pub task_id: i32,
    pub website_id: i32,
    pub input_filename: String,
    pub ok_file: String,
    pub not_ok_file: String,
    pub unknown_file: String,
}

/// 已完成任务的快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub id: i32,
    pub task_id: i32,
    pub website_id: i32,
    pub ok_file: String,
    pub not_ok_file: String,
    pub unknown_file: String,
}
