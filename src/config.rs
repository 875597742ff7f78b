// --- File: src/config.rs ---

use crate::thawani::ThawaniConfig;
use std::env;

// --- Unified Configuration Struct ---
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,

    // Rate limiting (actix-governor)
    pub governor_burst: u32,
    pub governor_per_second: u64,

    pub thawani_config: ThawaniConfig,
}

impl AppConfig {
    // Load configuration from environment variables
    pub fn load() -> Result<Self, String> {
        crate::utils::ensure_dotenv_loaded();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "6666".into())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT".to_string())?;

        // Unparsable values fall back to the defaults.
        let governor_burst = env::var("GOVERNOR_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        let governor_per_second = env::var("GOVERNOR_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let thawani_config = ThawaniConfig::load().map_err(|e| e.to_string())?;

        Ok(AppConfig {
            server_host,
            server_port,
            governor_burst,
            governor_per_second,
            thawani_config,
        })
    }
}
