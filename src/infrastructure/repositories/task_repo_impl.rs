// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::snapshot::{CompletedTask, StoppedTask};
use crate::domain::models::task::{
    DomainError, NewTask, ResultFiles, Task, TaskProgress, TaskStatus,
};
use crate::domain::models::upload::Upload;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::infrastructure::database::entities::{
    completed_task, stopped_task, task, task_upload, upload,
};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, UpdateMany,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use validator::Validate;

/// 任务仓库实现
#[derive(Clone)]
pub struct TaskRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 在给定连接（或事务）中读取任务的结果文件，未设置时返回参数错误
    async fn task_with_files<C>(
        conn: &C,
        id: i32,
    ) -> Result<(task::Model, ResultFiles), RepositoryError>
    where
        C: ConnectionTrait,
    {
        let model = task::Entity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let files = ResultFiles::from_columns(
            model.input_filename.clone(),
            model.ok_file.clone(),
            model.not_ok_file.clone(),
            model.unknown_file.clone(),
        )
        .ok_or_else(|| {
            RepositoryError::InvalidParameter(format!("task {} has no result files", id))
        })?;

        Ok((model, files))
    }

    async fn set_status<C>(conn: &C, id: i32, status: TaskStatus) -> Result<(), RepositoryError>
    where
        C: ConnectionTrait,
    {
        task::Entity::update_many()
            .col_expr(task::Column::Status, Expr::value(status.code()))
            .filter(task::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(())
    }
}

/// 在更新语句中写入四个结果文件列
fn with_files(update: UpdateMany<task::Entity>, files: &ResultFiles) -> UpdateMany<task::Entity> {
    update
        .col_expr(
            task::Column::InputFilename,
            Expr::value(files.input_filename.clone()),
        )
        .col_expr(task::Column::OkFile, Expr::value(files.ok_file.clone()))
        .col_expr(
            task::Column::NotOkFile,
            Expr::value(files.not_ok_file.clone()),
        )
        .col_expr(
            task::Column::UnknownFile,
            Expr::value(files.unknown_file.clone()),
        )
}

/// 已处理数占总数的百分比
fn percent(processed: i32, total: i32) -> i32 {
    if total <= 0 {
        return 0;
    }
    let value = i64::from(processed) * 100 / i64::from(total);
    value.clamp(0, 100) as i32
}

impl TryFrom<task::Model> for Task {
    type Error = DomainError;

    fn try_from(model: task::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            scheduler_id: model.scheduler_id,
            website_id: model.website_id,
            date_scheduled: model.date_scheduled,
            status: TaskStatus::try_from(model.status)?,
            total_numbers: model.total_numbers,
            progress: model.progress,
            processed: model.processed,
            ok_count: model.ok_count,
            not_ok_count: model.not_ok_count,
            unknown_count: model.unknown_count,
            per_ip: model.per_ip,
            ip_used: model.ip_used,
            files: ResultFiles::from_columns(
                model.input_filename,
                model.ok_file,
                model.not_ok_file,
                model.unknown_file,
            ),
        })
    }
}

impl From<stopped_task::Model> for StoppedTask {
    fn from(model: stopped_task::Model) -> Self {
        Self {
            id: model.id,
            task_id: model.task_id,
            website_id: model.website_id,
            input_filename: model.input_filename,
            ok_file: model.ok_file,
            not_ok_file: model.not_ok_file,
            unknown_file: model.unknown_file,
        }
    }
}

impl From<completed_task::Model> for CompletedTask {
    fn from(model: completed_task::Model) -> Self {
        Self {
            id: model.id,
            task_id: model.task_id,
            website_id: model.website_id,
            ok_file: model.ok_file,
            not_ok_file: model.not_ok_file,
            unknown_file: model.unknown_file,
        }
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn create(&self, new_task: &NewTask) -> Result<Task, RepositoryError> {
        new_task.validate()?;

        let txn = self.db.begin().await?;

        let model = task::ActiveModel {
            scheduler_id: Set(new_task.scheduler_id),
            website_id: Set(new_task.website_id),
            date_scheduled: Set(new_task.date_scheduled.clone()),
            progress: Set(0),
            status: Set(TaskStatus::NotStarted.code()),
            total_numbers: Set(new_task.total_numbers),
            processed: Set(0),
            ok_count: Set(0),
            not_ok_count: Set(0),
            unknown_count: Set(0),
            input_filename: Set(None),
            ok_file: Set(None),
            not_ok_file: Set(None),
            unknown_file: Set(None),
            per_ip: Set(new_task.per_ip),
            ip_used: Set(0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let upload_ids: BTreeSet<i32> = new_task.upload_ids.iter().copied().collect();
        if !upload_ids.is_empty() {
            let links = upload_ids.into_iter().map(|upload_id| task_upload::ActiveModel {
                task_id: Set(model.id),
                upload_id: Set(upload_id),
            });
            task_upload::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            task_id = model.id,
            scheduler_id = model.scheduler_id,
            website_id = model.website_id,
            "Task scheduled"
        );
        Ok(Task::try_from(model)?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, RepositoryError> {
        let model = task::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        match model {
            Some(model) => Ok(Some(Task::try_from(model)?)),
            None => Ok(None),
        }
    }

    async fn list_for_scheduler(
        &self,
        scheduler_id: i32,
        ids: &[i32],
    ) -> Result<Vec<Task>, RepositoryError> {
        let mut query = task::Entity::find()
            .filter(task::Column::SchedulerId.eq(scheduler_id))
            .order_by_asc(task::Column::Id);
        if !ids.is_empty() {
            query = query.filter(task::Column::Id.is_in(ids.to_vec()));
        }

        let models = query.all(self.db.as_ref()).await?;
        models
            .into_iter()
            .map(|m| Task::try_from(m).map_err(RepositoryError::from))
            .collect()
    }

    async fn uploads_of(&self, task_id: i32) -> Result<Vec<Upload>, RepositoryError> {
        let model = task::Entity::find_by_id(task_id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let uploads = model
            .find_related(upload::Entity)
            .order_by_asc(upload::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(uploads.into_iter().map(Into::into).collect())
    }

    async fn update_progress(
        &self,
        id: i32,
        progress: &TaskProgress,
    ) -> Result<(), RepositoryError> {
        progress.validate()?;

        let txn = self.db.begin().await?;

        let model = task::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let total_numbers = model.total_numbers;

        let mut active: task::ActiveModel = model.into();
        active.status = Set(progress.status.code());
        active.processed = Set(progress.processed);
        active.ok_count = Set(progress.ok_count);
        active.not_ok_count = Set(progress.not_ok_count);
        active.unknown_count = Set(progress.unknown_count);
        active.progress = Set(percent(progress.processed, total_numbers));
        active.update(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn change_status(
        &self,
        id: i32,
        status: TaskStatus,
        processed: i32,
        ip_used: Option<i32>,
    ) -> Result<(), RepositoryError> {
        if processed < 0 {
            return Err(RepositoryError::InvalidParameter(format!(
                "processed must not be negative: {}",
                processed
            )));
        }

        let mut update = task::Entity::update_many()
            .col_expr(task::Column::Status, Expr::value(status.code()))
            .col_expr(task::Column::Processed, Expr::value(processed));
        if let Some(ip_used) = ip_used {
            update = update.col_expr(task::Column::IpUsed, Expr::value(ip_used));
        }

        let result = update
            .filter(task::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(task_id = id, status = %status, processed, "Task status changed");
        Ok(())
    }

    async fn set_result_files(&self, id: i32, files: &ResultFiles) -> Result<(), RepositoryError> {
        files.validate()?;

        let result = with_files(task::Entity::update_many(), files)
            .filter(task::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn mark_erred(
        &self,
        id: i32,
        processed: i32,
        files: &ResultFiles,
    ) -> Result<(), RepositoryError> {
        if processed < 0 {
            return Err(RepositoryError::InvalidParameter(format!(
                "processed must not be negative: {}",
                processed
            )));
        }
        files.validate()?;

        let result = with_files(task::Entity::update_many(), files)
            .col_expr(task::Column::Status, Expr::value(TaskStatus::Erred.code()))
            .col_expr(task::Column::Processed, Expr::value(processed))
            .filter(task::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(task_id = id, processed, "Task erred");
        Ok(())
    }

    async fn reset_unstarted(&self, id: i32, files: &ResultFiles) -> Result<(), RepositoryError> {
        files.validate()?;

        let result = with_files(task::Entity::update_many(), files)
            .col_expr(
                task::Column::Status,
                Expr::value(TaskStatus::NotStarted.code()),
            )
            .filter(task::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn remove_for_scheduler(
        &self,
        scheduler_id: i32,
        ids: &[i32],
    ) -> Result<u64, RepositoryError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = task::Entity::delete_many()
            .filter(task::Column::SchedulerId.eq(scheduler_id))
            .filter(task::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;

        tracing::info!(scheduler_id, removed = result.rows_affected, "Tasks removed");
        Ok(result.rows_affected)
    }

    async fn mark_stopped(&self, id: i32) -> Result<StoppedTask, RepositoryError> {
        let txn = self.db.begin().await?;

        let (model, files) = Self::task_with_files(&txn, id).await?;
        Self::set_status(&txn, id, TaskStatus::Stopped).await?;

        // a task is stopped at most once at a time
        stopped_task::Entity::delete_many()
            .filter(stopped_task::Column::TaskId.eq(id))
            .exec(&txn)
            .await?;

        let snapshot = stopped_task::ActiveModel {
            task_id: Set(model.id),
            website_id: Set(model.website_id),
            input_filename: Set(files.input_filename),
            ok_file: Set(files.ok_file),
            not_ok_file: Set(files.not_ok_file),
            unknown_file: Set(files.unknown_file),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!(task_id = id, "Task stopped");
        Ok(snapshot.into())
    }

    async fn mark_completed(&self, id: i32) -> Result<CompletedTask, RepositoryError> {
        let txn = self.db.begin().await?;

        let (model, files) = Self::task_with_files(&txn, id).await?;
        Self::set_status(&txn, id, TaskStatus::Completed).await?;

        stopped_task::Entity::delete_many()
            .filter(stopped_task::Column::TaskId.eq(id))
            .exec(&txn)
            .await?;

        let snapshot = completed_task::ActiveModel {
            task_id: Set(model.id),
            website_id: Set(model.website_id),
            ok_file: Set(files.ok_file),
            not_ok_file: Set(files.not_ok_file),
            unknown_file: Set(files.unknown_file),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!(task_id = id, "Task completed");
        Ok(snapshot.into())
    }

    async fn stopped_tasks(&self, task_ids: &[i32]) -> Result<Vec<StoppedTask>, RepositoryError> {
        let mut query = stopped_task::Entity::find().order_by_asc(stopped_task::Column::Id);
        if !task_ids.is_empty() {
            query = query.filter(stopped_task::Column::TaskId.is_in(task_ids.to_vec()));
        }

        let models = query.all(self.db.as_ref()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn completed_tasks(
        &self,
        task_ids: &[i32],
    ) -> Result<Vec<CompletedTask>, RepositoryError> {
        let mut query = completed_task::Entity::find().order_by_asc(completed_task::Column::Id);
        if !task_ids.is_empty() {
            query = query.filter(completed_task::Column::TaskId.is_in(task_ids.to_vec()));
        }

        let models = query.all(self.db.as_ref()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
