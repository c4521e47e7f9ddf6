use crate::error::AppError;
use crate::riot::metrics::Endpoint;
use crate::riot::{RiotClient, SummonerDto};

impl RiotClient {
    /// Get summoner by display name
    pub async fn get_summoner_by_name(&self, name: &str) -> Result<SummonerDto, AppError> {
        tracing::trace!("[RIOT::CLIENT] get_summoner_by_name {}", name);

        let url = format!(
            "{}/lol/summoner/v4/summoners/by-name/{}",
            self.base_url(),
            urlencoding::encode(name)
        );

        self.get(Endpoint::Summoner, &url).await.map_err(|e| {
            if matches!(&e, AppError::RiotApi { status: 404, .. }) {
                AppError::SummonerNotFound(name.to_string())
            } else {
                e
            }
        })
    }
}
