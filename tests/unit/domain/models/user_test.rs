// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use validator::Validate;
use wudi_schema::domain::models::user::{NewUser, User};
use wudi_schema::domain::models::website::NewWebsite;

#[test]
fn test_password_not_serialized() {
    let user = User {
        id: 1,
        role: 0,
        username: "alice".to_string(),
        password: "secret".to_string(),
    };

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["username"], "alice");
    assert!(json.get("password").is_none());
}

#[test]
fn test_new_user_validation() {
    assert!(NewUser::new(1, "alice", "secret").validate().is_ok());
    assert!(NewUser::new(1, "", "secret").validate().is_err());
    assert!(NewUser::new(1, "alice", "p".repeat(129)).validate().is_err());
}

#[test]
fn test_new_website_validation() {
    assert!(NewWebsite::new("shop", "https://shop.example.com").validate().is_ok());
    assert!(NewWebsite::new("n".repeat(65), "https://shop.example.com")
        .validate()
        .is_err());
    assert!(NewWebsite::new("shop", "a".repeat(257)).validate().is_err());
}
