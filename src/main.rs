use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App, HttpServer};
use tiny_thawani::config::AppConfig;
use tiny_thawani::thawani::{self, ThawaniClient};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// The main entry point for the application.
///
/// Loads the environment (first command-line argument, then `DOTENV_PATH`,
/// default `.env`), builds the Thawani client for the configured mode and
/// serves the Thawani routes behind a rate limiter.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let env_file = tiny_thawani::utils::ensure_dotenv_loaded_from(std::env::args().nth(1));
    info!("📦 Loaded environment from {env_file}");

    let config = AppConfig::load().map_err(std::io::Error::other)?;
    let client = ThawaniClient::new(config.thawani_config.clone());

    info!(mode = %client.mode(), "ℹ️ Using Thawani");
    if let Err(e) = client.config().active_profile() {
        warn!("⚠️  {e} Requests to Thawani will fail until it is set.");
    }

    let governor_conf = GovernorConfigBuilder::default()
        .burst_size(config.governor_burst)
        .seconds_per_request(config.governor_per_second)
        .finish()
        .ok_or_else(|| std::io::Error::other("Failed to build governor config"))?;

    info!(
        "🚀 Server starting on http://{}:{}",
        config.server_host, config.server_port
    );

    let client = web::Data::new(client);
    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .app_data(client.clone())
            .configure(thawani::configure)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
