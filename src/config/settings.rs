// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 未指定环境时使用的配置名称
pub const DEFAULT_PROFILE: &str = "development";

/// 配置文件所在目录
pub const CONFIG_DIR: &str = "config";

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 当前加载的环境名称，例如 development
    pub environment: String,
    /// 数据库配置
    pub database: DatabaseSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
    /// 是否输出SQL语句日志
    pub sqlx_logging: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 环境名称取自 `APP_ENVIRONMENT`，未设置时使用 `development`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置文件缺失或无法解析
    pub fn new() -> Result<Self, ConfigError> {
        let profile =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_PROFILE.to_string());
        Self::load(&profile)
    }

    /// 从默认配置目录加载指定环境的配置
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_DIR, profile)
    }

    /// 从指定目录加载配置
    ///
    /// 加载顺序（后者覆盖前者）：
    /// 1. 内置默认值
    /// 2. `<dir>/default.*`（可选）
    /// 3. `<dir>/<profile>.*`（必需，缺失时返回错误）
    /// 4. 以 `WUDI__` 为前缀的环境变量，例如 `WUDI__DATABASE__URL`
    ///
    /// # 参数
    ///
    /// * `dir` - 配置文件目录
    /// * `profile` - 环境名称
    pub fn load_from(dir: impl AsRef<Path>, profile: &str) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let default_file = dir.join("default");
        let profile_file = dir.join(profile);

        let builder = Config::builder()
            // Default DB pool settings
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("database.sqlx_logging", false)?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&profile_file.to_string_lossy()).required(true))
            .add_source(
                Environment::with_prefix("WUDI")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("environment", profile)?;

        builder.build()?.try_deserialize()
    }
}
