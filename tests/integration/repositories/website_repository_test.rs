// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_website, setup_repos};
use wudi_schema::domain::models::website::NewWebsite;
use wudi_schema::domain::repositories::website_repository::WebsiteRepository;
use wudi_schema::utils::errors::RepositoryError;

#[tokio::test]
async fn test_add_and_list_websites() {
    let repos = setup_repos().await;
    let first = create_website(&repos, "first").await;
    let second = create_website(&repos, "second").await;

    let all = repos.websites.list(&[]).await.unwrap();
    assert_eq!(all, vec![first.clone(), second.clone()]);

    let only_second = repos.websites.list(&[second.id]).await.unwrap();
    assert_eq!(only_second, vec![second]);

    let found = repos.websites.find_by_id(first.id).await.unwrap();
    assert_eq!(found.map(|w| w.address), Some(first.address));
}

#[tokio::test]
async fn test_duplicate_nickname_and_address_rejected() {
    let repos = setup_repos().await;
    create_website(&repos, "shop").await;

    let same_nickname = repos
        .websites
        .add(&NewWebsite::new("shop", "https://elsewhere.example.com"))
        .await;
    assert!(matches!(same_nickname, Err(RepositoryError::AlreadyExists(_))));

    let same_address = repos
        .websites
        .add(&NewWebsite::new("other", "https://shop.example.com"))
        .await;
    assert!(matches!(same_address, Err(RepositoryError::AlreadyExists(_))));
}
