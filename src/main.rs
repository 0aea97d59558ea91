use anyhow::Context;
use musicstore::configuration::{get_configuration, StorageBackend};
use musicstore::db::Repositories;
use musicstore::startup::run;
use musicstore::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::time::Duration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("musicstore".into(), "info".into());
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;

    let repositories = match settings.storage {
        StorageBackend::Postgres => {
            tracing::info!(environment = ?settings.environment, "Connecting to PostgreSQL");
            let pg_pool = PgPoolOptions::new()
                .max_connections(settings.database.max_connections)
                .acquire_timeout(Duration::from_secs(settings.database.acquire_timeout_secs))
                .connect(settings.database.connection_string(settings.environment))
                .await
                .context("Failed to connect to database.")?;
            Repositories::postgres(pg_pool)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            Repositories::memory()
        }
    };

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {address}"))?;

    run(listener, repositories, settings).await?.await?;

    Ok(())
}
