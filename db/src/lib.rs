use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};
use std::{str::FromStr, sync::Arc};

pub mod activity;
pub mod couple;
pub mod draft;
pub mod notification;
pub mod package;
pub mod planner;
pub mod review;
pub mod subscription;
pub mod user;
pub mod vendor;

pub mod models {
    pub mod activity;
    pub mod couple;
    pub mod draft;
    pub mod notification;
    pub mod package;
    pub mod planner;
    pub mod review;
    pub mod subscription;
    pub mod user;
    pub mod vendor;
}

pub mod dtos {
    pub mod couple;
    pub mod package;
    pub mod review;
    pub mod subscription;
    pub mod user;
    pub mod vendor;
}

/// Connects to Postgres, creating the database when it does not exist yet,
/// and runs the embedded migrations.
pub async fn setup(
    database_url: &str,
    require_ssl: bool,
) -> Result<Arc<PgPool>, Box<dyn std::error::Error>> {
    let url = url::Url::parse(database_url)?;
    let db_name = url.path().trim_start_matches('/').to_string();

    create_database_if_missing(&url, &db_name, require_ssl).await?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(connect_options(database_url, require_ssl)?)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(pool))
}

fn connect_options(url: &str, require_ssl: bool) -> Result<PgConnectOptions, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(url)?;
    if require_ssl {
        options = options.ssl_mode(PgSslMode::Require);
    }
    Ok(options)
}

/// Needs a maintenance connection, so it briefly connects to the
/// `postgres` database on the same server.
async fn create_database_if_missing(
    url: &url::Url,
    db_name: &str,
    require_ssl: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut admin_url = url.clone();
    admin_url.set_path("/postgres");

    let admin_pool =
        PgPool::connect_with(connect_options(admin_url.as_str(), require_ssl)?).await?;

    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(db_name)
            .fetch_one(&admin_pool)
            .await?;

    if !exists {
        sqlx::query(&format!("CREATE DATABASE \"{}\"", db_name))
            .execute(&admin_pool)
            .await?;
    }

    admin_pool.close().await;
    Ok(())
}
