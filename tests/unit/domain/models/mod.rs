pub mod task_test;
pub mod upload_test;
pub mod user_test;
