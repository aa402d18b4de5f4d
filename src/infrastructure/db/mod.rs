use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{MySql, Pool};

use crate::bootstrap::config::Config;

pub type DbPool = Pool<MySql>;

pub async fn connect_pool(cfg: &Config) -> anyhow::Result<DbPool> {
    let options = MySqlConnectOptions::new()
        .host(&cfg.db_host)
        .port(cfg.db_port)
        .username(&cfg.db_user)
        .password(&cfg.db_password)
        .database(&cfg.db_database);
    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub mod repositories;
