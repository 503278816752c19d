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

use tracing::info;
use wudi_schema::config::settings::Settings;
use wudi_schema::infrastructure::database::{connection, schema};
use wudi_schema::utils::telemetry;

/// 主函数
///
/// 加载配置、连接数据库，然后删除并重建全部数据表。
/// 第一个命令行参数指定配置环境，省略时读取 `APP_ENVIRONMENT`。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration
    let settings = match std::env::args().nth(1) {
        Some(profile) => Settings::load(&profile)?,
        None => Settings::new()?,
    };
    info!(environment = %settings.environment, "Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    info!("Database connection established");

    // 4. Drop and create all tables
    schema::recreate(&db).await?;
    db.close().await?;

    println!("Created");
    Ok(())
}
