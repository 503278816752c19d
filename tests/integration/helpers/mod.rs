// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use std::sync::Arc;
use wudi_schema::config::settings::DatabaseSettings;
use wudi_schema::domain::models::upload::{NewUpload, Upload};
use wudi_schema::domain::models::user::{NewUser, User};
use wudi_schema::domain::models::website::{NewWebsite, Website};
use wudi_schema::domain::repositories::upload_repository::UploadRepository;
use wudi_schema::domain::repositories::user_repository::UserRepository;
use wudi_schema::domain::repositories::website_repository::WebsiteRepository;
use wudi_schema::infrastructure::database::connection;
use wudi_schema::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use wudi_schema::infrastructure::repositories::upload_repo_impl::UploadRepositoryImpl;
use wudi_schema::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use wudi_schema::infrastructure::repositories::website_repo_impl::WebsiteRepositoryImpl;
use wudi_schema::utils::telemetry;

/// 内存数据库的连接配置
///
/// 内存 SQLite 的每个连接都是独立的数据库，因此连接池固定为一个连接
pub fn memory_settings() -> DatabaseSettings {
    DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(10),
        idle_timeout: None,
        sqlx_logging: false,
    }
}

/// 创建已执行全部迁移的空数据库
pub async fn setup_db() -> Arc<DatabaseConnection> {
    telemetry::init_telemetry();

    let db = connection::create_pool(&memory_settings())
        .await
        .expect("Failed to connect to in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

#[allow(dead_code)]
pub struct TestRepos {
    pub db: Arc<DatabaseConnection>,
    pub users: UserRepositoryImpl,
    pub websites: WebsiteRepositoryImpl,
    pub uploads: UploadRepositoryImpl,
    pub tasks: TaskRepositoryImpl,
}

pub async fn setup_repos() -> TestRepos {
    let db = setup_db().await;
    TestRepos {
        users: UserRepositoryImpl::new(db.clone()),
        websites: WebsiteRepositoryImpl::new(db.clone()),
        uploads: UploadRepositoryImpl::new(db.clone()),
        tasks: TaskRepositoryImpl::new(db.clone()),
        db,
    }
}

pub async fn create_user(repos: &TestRepos, username: &str) -> User {
    repos
        .users
        .create(&NewUser::new(1, username, "secret"))
        .await
        .unwrap()
}

pub async fn create_website(repos: &TestRepos, nickname: &str) -> Website {
    repos
        .websites
        .add(&NewWebsite::new(nickname, &format!("https://{}.example.com", nickname)))
        .await
        .unwrap()
}

pub async fn create_upload(repos: &TestRepos, uploader_id: i32, filename: &str, count: usize) -> Upload {
    let numbers = (0..count).map(|i| format!("555{:07}", i)).collect();
    repos
        .uploads
        .create(&NewUpload {
            uploader_id,
            filename: filename.to_string(),
            name_on_disk: format!("{}.stored", filename),
            upload_date: "2020-03-01 10:00:00".to_string(),
            numbers,
        })
        .await
        .unwrap()
}

/// 统计表中的行数
pub async fn count_rows(db: &DatabaseConnection, table: &str) -> i64 {
    let row = db
        .query_one(Statement::from_string(
            DbBackend::Sqlite,
            format!("SELECT COUNT(*) AS cnt FROM {}", table),
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get::<i64>("", "cnt").unwrap()
}

/// 读取表的列名
pub async fn table_columns(db: &DatabaseConnection, table: &str) -> Vec<String> {
    let rows = db
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            format!("PRAGMA table_info({})", table),
        ))
        .await
        .unwrap();
    rows.iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
}
