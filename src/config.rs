use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::riot::Platform;

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` disables `/summoner` without preventing startup.
    pub riot_api_key: Option<String>,
    pub port: u16,
    pub static_dir: PathBuf,
    pub platform: Platform,
    pub riot_api_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        const DEFAULT_PORT: u16 = 8080;
        const DEFAULT_STATIC_DIR: &str = "public";

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let riot_api_key = non_empty("RIOT_API_KEY").or_else(|| non_empty("LEAGUE_API_KEY"));

        let port = match non_empty("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a port number, got {v:?}")))?,
            None => DEFAULT_PORT,
        };

        let static_dir = non_empty("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let platform = match non_empty("RIOT_PLATFORM") {
            Some(v) => v.parse()?,
            None => Platform::default(),
        };

        let riot_api_base_url = non_empty("RIOT_API_BASE_URL");

        Ok(Self {
            riot_api_key,
            port,
            static_dir,
            platform,
            riot_api_base_url,
        })
    }
}
