use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::error::AppError;

/// Digits, letters of any script, spaces, underscores and periods.
static SUMMONER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\p{L} _.]+$").expect("summoner name regex is valid"));

/// A display name that passed validation and is safe to send upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummonerName(String);

impl SummonerName {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if SUMMONER_NAME_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::InvalidSummonerName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SummonerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
