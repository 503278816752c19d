// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{TimeZone, Utc};
use validator::Validate;
use wudi_schema::domain::models::task::{
    DomainError, NewTask, ResultFiles, TaskProgress, TaskStatus,
};

const ALL_STATUSES: [TaskStatus; 6] = [
    TaskStatus::NotStarted,
    TaskStatus::Ongoing,
    TaskStatus::Stopped,
    TaskStatus::Erred,
    TaskStatus::Completed,
    TaskStatus::AutoStopped,
];

#[test]
fn test_status_codes_match_consumers() {
    let codes: Vec<i32> = ALL_STATUSES.iter().map(|s| s.code()).collect();
    assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);

    for status in ALL_STATUSES {
        assert_eq!(TaskStatus::try_from(i32::from(status)), Ok(status));
    }
}

#[test]
fn test_unknown_status_code() {
    assert_eq!(
        TaskStatus::try_from(6),
        Err(DomainError::UnknownTaskStatus(6))
    );
    assert_eq!(
        TaskStatus::try_from(-1),
        Err(DomainError::UnknownTaskStatus(-1))
    );
}

#[test]
fn test_status_display_and_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::NotStarted);
    assert_eq!(TaskStatus::AutoStopped.to_string(), "auto_stopped");
    assert_eq!(TaskStatus::NotStarted.to_string(), "not_started");

    assert!(TaskStatus::Stopped.is_stopped());
    assert!(TaskStatus::AutoStopped.is_stopped());
    assert!(!TaskStatus::Erred.is_stopped());
}

#[test]
fn test_new_task_formats_schedule_date() {
    // Given: 指定的计划时间
    let at = Utc.with_ymd_and_hms(2020, 5, 20, 9, 30, 15).unwrap();

    // When: 创建任务输入
    let task = NewTask::new(1, 2, &at).with_uploads(vec![3, 4], 20).with_per_ip(7);

    // Then: 日期格式固定，字段按构造传入
    assert_eq!(task.date_scheduled, "2020-05-20 09:30:15");
    assert_eq!(task.upload_ids, vec![3, 4]);
    assert_eq!(task.total_numbers, 20);
    assert_eq!(task.per_ip, 7);
    assert!(task.validate().is_ok());
}

#[test]
fn test_new_task_rejects_negative_totals() {
    let at = Utc.with_ymd_and_hms(2020, 5, 20, 9, 30, 15).unwrap();
    let task = NewTask::new(1, 2, &at).with_uploads(vec![], -5);

    assert!(task.validate().is_err());
}

#[test]
fn test_result_files_from_columns() {
    let files = ResultFiles::from_columns(
        Some("in".to_string()),
        Some("ok".to_string()),
        Some("not_ok".to_string()),
        Some("unknown".to_string()),
    );
    assert_eq!(files.map(|f| f.ok_file), Some("ok".to_string()));

    // 任一列为空即视为未设置
    let partial = ResultFiles::from_columns(Some("in".to_string()), None, None, None);
    assert!(partial.is_none());
}

#[test]
fn test_result_files_length_limits() {
    let files = ResultFiles {
        input_filename: "x".repeat(257),
        ok_file: "ok".to_string(),
        not_ok_file: "not_ok".to_string(),
        unknown_file: String::new(),
    };

    let errors = files.validate().unwrap_err();
    let fields = errors.field_errors();
    assert!(fields.contains_key("input_filename"));
    assert!(fields.contains_key("unknown_file"));
    assert!(!fields.contains_key("ok_file"));
}

#[test]
fn test_progress_validation() {
    let progress = TaskProgress {
        status: TaskStatus::Ongoing,
        processed: 10,
        ok_count: 4,
        not_ok_count: -1,
        unknown_count: 0,
    };

    assert!(progress.validate().is_err());
}
