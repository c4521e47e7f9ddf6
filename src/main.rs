use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing::{error, info};

use config::Config;
use error::AppError;
use http::{AppState, build_router};
use riot::{GameDataApi, RiotClient};

mod config;
mod error;
mod history;
mod http;
mod logging;
mod riot;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init();

    let config = Config::from_env()?;

    info!("🚀 Starting...");

    let riot = config.riot_api_key.clone().map(|key| {
        let client = match &config.riot_api_base_url {
            Some(base_url) => RiotClient::with_base_url(key, base_url.clone()),
            None => RiotClient::new(key, config.platform),
        };
        info!(
            platform = %config.platform,
            base_url = client.base_url(),
            "🛰️ Riot API client ready"
        );
        client.start_metrics_logging();
        Arc::new(client) as Arc<dyn GameDataApi>
    });
    if riot.is_none() {
        error!("No RIOT_API_KEY (or LEAGUE_API_KEY) set, /summoner will answer 500 until restarted");
    }

    let app = build_router(AppState::new(riot), &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        static_dir = %config.static_dir.display(),
        "🌐 Match history server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
