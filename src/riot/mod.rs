//! Riot Games API client and the trait seams request handling depends on.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::AppError;

pub mod client;
mod endpoints;
pub mod metrics;
pub mod region;
pub mod types;

pub use client::RiotClient;
pub use region::Platform;
pub use types::{MatchDto, MatchReferenceDto, MatchlistDto, SummonerDto};

/// Riot Summoner-V4 API.
#[async_trait]
pub trait SummonerApi: Send + Sync + Debug {
    async fn summoner_by_name(&self, name: &str) -> Result<SummonerDto, AppError>;
}

/// Riot Match-V4 API.
#[async_trait]
pub trait MatchApi: Send + Sync + Debug {
    async fn matchlist_by_account(&self, account_id: &str) -> Result<MatchlistDto, AppError>;

    async fn match_by_id(&self, game_id: i64) -> Result<MatchDto, AppError>;
}

/// Every API the match history lookup needs.
pub trait GameDataApi: SummonerApi + MatchApi {}

impl<T: SummonerApi + MatchApi> GameDataApi for T {}

#[async_trait]
impl SummonerApi for RiotClient {
    async fn summoner_by_name(&self, name: &str) -> Result<SummonerDto, AppError> {
        self.get_summoner_by_name(name).await
    }
}

#[async_trait]
impl MatchApi for RiotClient {
    async fn matchlist_by_account(&self, account_id: &str) -> Result<MatchlistDto, AppError> {
        self.get_matchlist_by_account(account_id).await
    }

    async fn match_by_id(&self, game_id: i64) -> Result<MatchDto, AppError> {
        self.get_match(game_id).await
    }
}
