// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 在临时目录中写入配置文件，验证分层加载顺序与缺省值

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use wudi_schema::config::settings::Settings;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_profile_file_with_defaults() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "staging.toml",
            "[database]\nurl = \"postgres://user:pass@db:5432/wudi\"\n",
        );

        let settings = Settings::load_from(dir.path(), "staging").unwrap();

        assert_eq!(settings.environment, "staging");
        assert_eq!(settings.database.url, "postgres://user:pass@db:5432/wudi");
        assert_eq!(settings.database.max_connections, Some(10));
        assert_eq!(settings.database.min_connections, Some(1));
        assert_eq!(settings.database.connect_timeout, Some(10));
        assert_eq!(settings.database.idle_timeout, Some(300));
        assert!(!settings.database.sqlx_logging);
    }

    #[test]
    fn test_profile_overrides_default_file() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            "[database]\nurl = \"sqlite::memory:\"\nmax_connections = 4\nsqlx_logging = true\n",
        );
        write(&dir, "local.toml", "[database]\nmax_connections = 2\n");

        let settings = Settings::load_from(dir.path(), "local").unwrap();

        // url 与 sqlx_logging 来自 default.toml，max_connections 被覆盖
        assert_eq!(settings.database.url, "sqlite::memory:");
        assert_eq!(settings.database.max_connections, Some(2));
        assert!(settings.database.sqlx_logging);
    }

    #[test]
    fn test_missing_profile_file_is_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[database]\nurl = \"sqlite::memory:\"\n");

        let result = Settings::load_from(dir.path(), "production");

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_database_url_is_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "empty.toml", "[database]\nmax_connections = 3\n");

        let result = Settings::load_from(dir.path(), "empty");

        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_profiles_load() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/config");

        let development = Settings::load_from(dir, "development").unwrap();
        assert!(development.database.url.starts_with("postgres://"));

        let testing = Settings::load_from(dir, "testing").unwrap();
        assert_eq!(testing.database.url, "sqlite::memory:");
        assert_eq!(testing.database.max_connections, Some(1));
    }
}
