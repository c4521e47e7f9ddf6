//! Builders and an in-memory [`GameDataApi`] shared by the tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AppError;
use crate::riot::types::{ParticipantDto, ParticipantIdentityDto, PlayerDto};
use crate::riot::{MatchApi, MatchDto, MatchReferenceDto, MatchlistDto, SummonerApi, SummonerDto};

pub fn dummy_reference(game_id: i64, timestamp: i64) -> MatchReferenceDto {
    MatchReferenceDto {
        game_id,
        timestamp,
        ..Default::default()
    }
}

pub fn dummy_participant(participant_id: i32) -> ParticipantDto {
    let mut participant = ParticipantDto {
        participant_id,
        ..Default::default()
    };
    participant.stats.participant_id = participant_id;
    participant
}

/// A match where each summoner id gets participant index `position + 1`,
/// a display name of `"<id> name"` and an empty stats block.
pub fn dummy_match(game_id: i64, game_duration: i64, summoner_ids: &[&str]) -> MatchDto {
    let participant_identities = summoner_ids
        .iter()
        .zip(1..)
        .map(|(summoner_id, participant_id)| ParticipantIdentityDto {
            participant_id,
            player: Some(PlayerDto {
                summoner_id: summoner_id.to_string(),
                summoner_name: format!("{summoner_id} name"),
                ..Default::default()
            }),
        })
        .collect();
    let participants = (1..=summoner_ids.len() as i32)
        .map(dummy_participant)
        .collect();

    MatchDto {
        game_id,
        game_duration,
        participant_identities,
        participants,
        ..Default::default()
    }
}

#[derive(Debug, Default)]
pub struct MockGameApi {
    summoners: HashMap<String, SummonerDto>,
    matchlists: HashMap<String, MatchlistDto>,
    matches: HashMap<i64, MatchDto>,
    delays: HashMap<i64, Duration>,
    failing: HashSet<i64>,
    match_calls: AtomicUsize,
}

impl MockGameApi {
    pub fn with_summoner(mut self, name: &str, id: &str, account_id: Option<&str>) -> Self {
        self.summoners.insert(
            name.to_string(),
            SummonerDto {
                id: id.to_string(),
                account_id: account_id.map(str::to_string),
                name: name.to_string(),
                ..Default::default()
            },
        );
        self
    }

    pub fn with_matchlist(
        mut self,
        account_id: &str,
        matches: Vec<MatchReferenceDto>,
        end_index: i32,
    ) -> Self {
        self.matchlists.insert(
            account_id.to_string(),
            MatchlistDto {
                total_games: matches.len() as i32,
                matches,
                start_index: 0,
                end_index,
            },
        );
        self
    }

    pub fn with_match(mut self, match_data: MatchDto) -> Self {
        self.matches.insert(match_data.game_id, match_data);
        self
    }

    /// Delays the answer for `game_id`.
    pub fn with_delay(mut self, game_id: i64, delay: Duration) -> Self {
        self.delays.insert(game_id, delay);
        self
    }

    /// Answers a 500 for `game_id`.
    pub fn with_failing_match(mut self, game_id: i64) -> Self {
        self.failing.insert(game_id);
        self
    }

    pub fn match_calls(&self) -> usize {
        self.match_calls.load(Ordering::SeqCst)
    }
}

fn not_found() -> AppError {
    AppError::RiotApi {
        status: 404,
        message: "Data not found".to_string(),
    }
}

#[async_trait]
impl SummonerApi for MockGameApi {
    async fn summoner_by_name(&self, name: &str) -> Result<SummonerDto, AppError> {
        self.summoners
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::SummonerNotFound(name.to_string()))
    }
}

#[async_trait]
impl MatchApi for MockGameApi {
    async fn matchlist_by_account(&self, account_id: &str) -> Result<MatchlistDto, AppError> {
        self.matchlists.get(account_id).cloned().ok_or_else(not_found)
    }

    async fn match_by_id(&self, game_id: i64) -> Result<MatchDto, AppError> {
        self.match_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&game_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&game_id) {
            return Err(AppError::RiotApi {
                status: 500,
                message: "Internal server error".to_string(),
            });
        }

        self.matches.get(&game_id).cloned().ok_or_else(not_found)
    }
}
