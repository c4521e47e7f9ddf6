use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Summoner not found: {0}")]
    SummonerNotFound(String),

    #[error("Invalid summoner name: {0:?}")]
    InvalidSummonerName(String),

    #[error("Summoner {0} has no account id")]
    MissingAccountId(String),

    #[error("Invalid platform: {0}")]
    InvalidPlatform(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
