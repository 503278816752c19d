// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_user, setup_repos};
use wudi_schema::domain::models::user::NewUser;
use wudi_schema::domain::repositories::user_repository::UserRepository;
use wudi_schema::utils::errors::RepositoryError;

#[tokio::test]
async fn test_create_and_find_user() {
    let repos = setup_repos().await;

    let alice = create_user(&repos, "alice").await;
    assert!(alice.id > 0);
    assert_eq!(alice.role, 1);

    let by_id = repos.users.find_by_id(alice.id).await.unwrap();
    assert_eq!(by_id, Some(alice.clone()));

    let by_name = repos.users.find_by_username("alice").await.unwrap();
    assert_eq!(by_name, Some(alice));

    assert!(repos.users.find_by_username("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let repos = setup_repos().await;
    create_user(&repos, "alice").await;

    let result = repos
        .users
        .create(&NewUser::new(2, "alice", "other"))
        .await;

    assert!(matches!(result, Err(RepositoryError::AlreadyExists(_))));
}

#[tokio::test]
async fn test_login_role() {
    let repos = setup_repos().await;
    let admin = repos
        .users
        .create(&NewUser::new(0, "admin", "hunter2"))
        .await
        .unwrap();

    let found = repos.users.login_role("admin", "hunter2").await.unwrap();
    assert_eq!(found, Some((admin.id, 0)));

    // 密码错误
    let wrong = repos.users.login_role("admin", "hunter3").await.unwrap();
    assert!(wrong.is_none());
}

#[tokio::test]
async fn test_invalid_user_not_written() {
    let repos = setup_repos().await;

    let result = repos
        .users
        .create(&NewUser::new(1, "x".repeat(65), "secret"))
        .await;

    assert!(matches!(result, Err(RepositoryError::Validation(_))));
    assert!(repos
        .users
        .find_by_username(&"x".repeat(65))
        .await
        .unwrap()
        .is_none());
}
