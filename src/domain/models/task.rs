// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::Validate;

/// 任务实体
///
/// 表示一次计划执行的扫描工作：由一个用户调度，针对一个网站，
/// 处理若干上传文件中的号码，并把结果分类写入 ok / not_ok / unknown 三个文件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 任务ID
    pub id: i32,
    /// 调度该任务的用户ID
    pub scheduler_id: i32,
    /// 目标网站ID
    pub website_id: i32,
    /// 计划时间，库中唯一
    pub date_scheduled: String,
    /// 任务状态
    pub status: TaskStatus,
    /// 待处理号码总数
    pub total_numbers: i32,
    /// 进度
    pub progress: i32,
    /// 已处理号码数
    pub processed: i32,
    /// 结果为已注册的号码数
    pub ok_count: i32,
    /// 结果为未注册的号码数
    pub not_ok_count: i32,
    /// 结果未知的号码数
    pub unknown_count: i32,
    /// 每个IP允许的扫描次数
    pub per_ip: i32,
    /// 已使用的IP数
    pub ip_used: i32,
    /// 结果文件路径，任务开始执行后才会设置
    pub files: Option<ResultFiles>,
}

/// 任务状态枚举
///
/// 数值代码与消费此数据库的服务保持一致：
/// NotStarted=0, Ongoing=1, Stopped=2, Erred=3, Completed=4, AutoStopped=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// 尚未开始
    #[default]
    NotStarted,
    /// 执行中
    Ongoing,
    /// 被用户停止
    Stopped,
    /// 执行出错
    Erred,
    /// 已完成
    Completed,
    /// 被系统自动停止
    AutoStopped,
}

impl TaskStatus {
    /// 数据库中保存的整数代码
    pub fn code(self) -> i32 {
        match self {
            TaskStatus::NotStarted => 0,
            TaskStatus::Ongoing => 1,
            TaskStatus::Stopped => 2,
            TaskStatus::Erred => 3,
            TaskStatus::Completed => 4,
            TaskStatus::AutoStopped => 5,
        }
    }

    /// 是否为停止状态（手动或自动）
    pub fn is_stopped(self) -> bool {
        matches!(self, TaskStatus::Stopped | TaskStatus::AutoStopped)
    }
}

impl TryFrom<i32> for TaskStatus {
    type Error = DomainError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TaskStatus::NotStarted),
            1 => Ok(TaskStatus::Ongoing),
            2 => Ok(TaskStatus::Stopped),
            3 => Ok(TaskStatus::Erred),
            4 => Ok(TaskStatus::Completed),
            5 => Ok(TaskStatus::AutoStopped),
            other => Err(DomainError::UnknownTaskStatus(other)),
        }
    }
}

impl From<TaskStatus> for i32 {
    fn from(status: TaskStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskStatus::NotStarted => write!(f, "not_started"),
            TaskStatus::Ongoing => write!(f, "ongoing"),
            TaskStatus::Stopped => write!(f, "stopped"),
            TaskStatus::Erred => write!(f, "erred"),
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::AutoStopped => write!(f, "auto_stopped"),
        }
    }
}

/// 领域错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// 数据库中出现未定义的状态代码
    #[error("Unknown task status code: {0}")]
    UnknownTaskStatus(i32),
}

/// 任务的输入文件与分类结果文件路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ResultFiles {
    #[validate(length(min = 1, max = 256))]
    pub input_filename: String,
    #[validate(length(min = 1, max = 256))]
    pub ok_file: String,
    #[validate(length(min = 1, max = 256))]
    pub not_ok_file: String,
    #[validate(length(min = 1, max = 256))]
    pub unknown_file: String,
}

impl ResultFiles {
    /// 由四个可空列组装路径，只要有一列为空即视为未设置
    pub fn from_columns(
        input_filename: Option<String>,
        ok_file: Option<String>,
        not_ok_file: Option<String>,
        unknown_file: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            input_filename: input_filename?,
            ok_file: ok_file?,
            not_ok_file: not_ok_file?,
            unknown_file: unknown_file?,
        })
    }
}

/// 新建任务的输入
///
/// 新任务状态为 NotStarted，各计数从零开始
#[derive(Debug, Clone, Validate)]
pub struct NewTask {
    pub scheduler_id: i32,
    pub website_id: i32,
    #[validate(length(min = 1, max = 32))]
    pub date_scheduled: String,
    #[validate(range(min = 0))]
    pub total_numbers: i32,
    #[validate(range(min = 0))]
    pub per_ip: i32,
    /// 任务处理的上传文件
    pub upload_ids: Vec<i32>,
}

impl NewTask {
    /// 创建计划在指定时间执行的任务输入
    pub fn new(scheduler_id: i32, website_id: i32, scheduled_at: &DateTime<Utc>) -> Self {
        Self {
            scheduler_id,
            website_id,
            date_scheduled: super::format_timestamp(scheduled_at),
            total_numbers: 0,
            per_ip: 0,
            upload_ids: Vec::new(),
        }
    }

    /// 关联上传文件并设置号码总数
    pub fn with_uploads(mut self, upload_ids: Vec<i32>, total_numbers: i32) -> Self {
        self.upload_ids = upload_ids;
        self.total_numbers = total_numbers;
        self
    }

    pub fn with_per_ip(mut self, per_ip: i32) -> Self {
        self.per_ip = per_ip;
        self
    }
}

/// 任务进度更新
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct TaskProgress {
    pub status: TaskStatus,
    #[validate(range(min = 0))]
    pub processed: i32,
    #[validate(range(min = 0))]
    pub ok_count: i32,
    #[validate(range(min = 0))]
    pub not_ok_count: i32,
    #[validate(range(min = 0))]
    pub unknown_count: i32,
}
