//! Backend entry-point: loads settings, builds the content-store pool and
//! serves the catalogue API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::SegmentPolicy;
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::DbPool;
use backend::settings::ConciergeSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ConciergeSettings::load()
        .map_err(|err| std::io::Error::other(format!("configuration: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let default_count = settings
        .default_placement_count()
        .map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr)
        .with_segment_policy(SegmentPolicy::new(settings.restricted_company_code()))
        .with_default_placement_count(default_count);

    if let Some(pool_config) = settings.pool_config() {
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| std::io::Error::other(format!("database pool: {err}")))?;
        config = config.with_db_pool(pool);
    }

    info!(%bind_addr, "starting concierge backend");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
