use crate::error::AppError;
use crate::riot::metrics::Endpoint;
use crate::riot::{MatchDto, MatchlistDto, RiotClient};

impl RiotClient {
    /// Get the match references of an account, most recent first as returned by the API
    pub async fn get_matchlist_by_account(
        &self,
        account_id: &str,
    ) -> Result<MatchlistDto, AppError> {
        tracing::trace!("[RIOT::CLIENT] get_matchlist_by_account {}", account_id);

        let url = format!(
            "{}/lol/match/v4/matchlists/by-account/{}",
            self.base_url(),
            urlencoding::encode(account_id)
        );

        self.get(Endpoint::Matchlist, &url).await
    }

    /// Get match details by game id
    pub async fn get_match(&self, game_id: i64) -> Result<MatchDto, AppError> {
        tracing::trace!("[RIOT::CLIENT] get_match {}", game_id);

        let url = format!("{}/lol/match/v4/matches/{}", self.base_url(), game_id);

        self.get(Endpoint::Match, &url).await
    }
}
