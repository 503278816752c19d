pub mod settings_test;
