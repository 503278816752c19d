// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::snapshot::{CompletedTask, StoppedTask};
use crate::domain::models::task::{NewTask, ResultFiles, Task, TaskProgress, TaskStatus};
use crate::domain::models::upload::Upload;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 任务仓库特质
///
/// 定义任务数据访问接口
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 创建任务并关联上传文件
    async fn create(&self, task: &NewTask) -> Result<Task, RepositoryError>;
    /// 根据ID查找任务
    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, RepositoryError>;
    /// 列出某个用户调度的任务，`ids` 非空时只返回其中的任务
    async fn list_for_scheduler(
        &self,
        scheduler_id: i32,
        ids: &[i32],
    ) -> Result<Vec<Task>, RepositoryError>;
    /// 获取任务关联的上传文件
    async fn uploads_of(&self, task_id: i32) -> Result<Vec<Upload>, RepositoryError>;
    /// 更新状态与各项计数
    async fn update_progress(&self, id: i32, progress: &TaskProgress)
        -> Result<(), RepositoryError>;
    /// 修改状态与已处理数，`ip_used` 为 `Some` 时一并更新
    async fn change_status(
        &self,
        id: i32,
        status: TaskStatus,
        processed: i32,
        ip_used: Option<i32>,
    ) -> Result<(), RepositoryError>;
    /// 设置输入文件与分类结果文件路径
    async fn set_result_files(&self, id: i32, files: &ResultFiles) -> Result<(), RepositoryError>;
    /// 将任务标记为出错，同时写入已处理数与结果文件
    async fn mark_erred(
        &self,
        id: i32,
        processed: i32,
        files: &ResultFiles,
    ) -> Result<(), RepositoryError>;
    /// 将任务重置为未开始，同时写入结果文件
    async fn reset_unstarted(&self, id: i32, files: &ResultFiles) -> Result<(), RepositoryError>;
    /// 删除某个用户调度的指定任务，返回删除的行数
    async fn remove_for_scheduler(
        &self,
        scheduler_id: i32,
        ids: &[i32],
    ) -> Result<u64, RepositoryError>;
    /// 将任务标记为已停止并记录快照
    async fn mark_stopped(&self, id: i32) -> Result<StoppedTask, RepositoryError>;
    /// 将任务标记为已完成并记录快照
    async fn mark_completed(&self, id: i32) -> Result<CompletedTask, RepositoryError>;
    /// 按任务ID获取已停止任务快照
    async fn stopped_tasks(&self, task_ids: &[i32]) -> Result<Vec<StoppedTask>, RepositoryError>;
    /// 按任务ID获取已完成任务快照
    async fn completed_tasks(
        &self,
        task_ids: &[i32],
    ) -> Result<Vec<CompletedTask>, RepositoryError>;
}
