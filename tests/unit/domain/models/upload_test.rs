// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use validator::Validate;
use wudi_schema::domain::models::upload::{NewUpload, MAX_NUMBER_LEN};

fn upload_with(numbers: Vec<&str>) -> NewUpload {
    NewUpload {
        uploader_id: 1,
        filename: "list.csv".to_string(),
        name_on_disk: "d41d8cd9.csv".to_string(),
        upload_date: "2020-03-01 10:00:00".to_string(),
        numbers: numbers.into_iter().map(String::from).collect(),
    }
}

#[test]
fn test_total_numbers_counts_entries() {
    let upload = upload_with(vec!["5551234567", "5557654321"]);

    assert_eq!(upload.total_numbers(), 2);
    assert!(upload.validate().is_ok());
}

#[test]
fn test_number_length_boundary() {
    let longest = "1".repeat(MAX_NUMBER_LEN);
    let too_long = "1".repeat(MAX_NUMBER_LEN + 1);

    assert!(upload_with(vec![longest.as_str()]).validate().is_ok());

    let errors = upload_with(vec![too_long.as_str()]).validate().unwrap_err();
    let fields = errors.field_errors();
    assert_eq!(fields["numbers"][0].code, "number_length");
}

#[test]
fn test_empty_number_rejected() {
    assert!(upload_with(vec!["5551234567", ""]).validate().is_err());
}

#[test]
fn test_filename_length_limit() {
    let mut upload = upload_with(vec![]);
    upload.filename = "f".repeat(129);

    let errors = upload.validate().unwrap_err();
    assert!(errors.field_errors().contains_key("filename"));
}
