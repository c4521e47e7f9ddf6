use serde::{Deserialize, Serialize};

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummonerDto {
    /// Encrypted summoner id, the one referenced by match participant identities.
    pub id: String,
    pub account_id: Option<String>,
    pub name: String,
    pub summoner_level: i64,
}

// ============================================================================
// Match-v4
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchlistDto {
    pub matches: Vec<MatchReferenceDto>,
    pub start_index: i32,
    pub end_index: i32,
    pub total_games: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchReferenceDto {
    pub game_id: i64,
    /// Game start, in epoch milliseconds.
    pub timestamp: i64,
    pub champion: i32,
    pub queue: i32,
    pub season: i32,
    pub platform_id: String,
    pub role: String,
    pub lane: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchDto {
    pub game_id: i64,
    /// Game length, in seconds.
    pub game_duration: i64,
    pub game_creation: i64,
    pub queue_id: i32,
    pub participant_identities: Vec<ParticipantIdentityDto>,
    pub participants: Vec<ParticipantDto>,
}

impl MatchDto {
    /// Identity of the participant played by the given summoner, if any.
    pub fn identity_of(&self, summoner_id: &str) -> Option<&ParticipantIdentityDto> {
        self.participant_identities.iter().find(|identity| {
            identity
                .player
                .as_ref()
                .is_some_and(|player| player.summoner_id == summoner_id)
        })
    }

    pub fn participant_by_index(&self, participant_id: i32) -> Option<&ParticipantDto> {
        self.participants
            .iter()
            .find(|p| p.stats.participant_id == participant_id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantIdentityDto {
    pub participant_id: i32,
    /// Absent for bots and for players hidden by the API.
    pub player: Option<PlayerDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerDto {
    pub summoner_id: String,
    pub summoner_name: String,
    pub account_id: String,
    pub profile_icon: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantDto {
    pub participant_id: i32,
    pub team_id: i32,
    pub champion_id: i32,
    pub spell1_id: i32,
    pub spell2_id: i32,
    pub stats: ParticipantStatsDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStatsDto {
    pub participant_id: i32,
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub champ_level: i32,
    pub total_minions_killed: i32,
    pub neutral_minions_killed: i32,
    // Items (6 slots + trinket)
    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub item6: i32,
    pub perk0: i32,
    pub perk_primary_style: i32,
    pub perk_sub_style: i32,
}

impl ParticipantStatsDto {
    pub fn cs_total(&self) -> i32 {
        self.total_minions_killed + self.neutral_minions_killed
    }
}
