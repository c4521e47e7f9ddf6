use serde::Serialize;

use crate::riot::MatchDto;

/// Client-facing digest of one summoner's performance in one match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchSummary {
    pub game_id: i64,
    pub win: bool,
    pub summoner_name: String,
    pub game_duration: i64,
    pub champion_id: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub kda: String,
    pub spell1_id: i32,
    pub spell2_id: i32,
    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub item6: i32,
    pub champ_level: i32,
    #[serde(rename = "creepscore")]
    pub creep_score: i32,
    #[serde(rename = "creepscorepermin")]
    pub creep_score_per_min: String,
    pub primary_perk_style: i32,
    pub primary_perk: i32,
    pub sub_perk_style: i32,
}

/// `(kills + assists) / max(1, deaths)` with two decimals.
pub fn calc_kda(kills: i32, deaths: i32, assists: i32) -> String {
    let ratio = f64::from(kills + assists) / f64::from(deaths.max(1));
    format!("{:.2}", ratio)
}

/// Creep score per minute with one decimal. A zero length game reports "0.0".
pub fn calc_creep_score_per_min(creep_score: i32, game_duration_secs: i64) -> String {
    if game_duration_secs <= 0 {
        return "0.0".to_string();
    }
    let minutes = game_duration_secs as f64 / 60.0;
    format!("{:.1}", f64::from(creep_score) / minutes)
}

/// Builds the summary of `summoner_id` in `match_data`.
///
/// Returns `None` when the summoner has no participant identity in the match,
/// or when no stats block carries that identity's participant index.
pub fn extract_summary(match_data: &MatchDto, summoner_id: &str) -> Option<PlayerMatchSummary> {
    let identity = match_data.identity_of(summoner_id)?;
    let participant = match_data.participant_by_index(identity.participant_id)?;
    let stats = &participant.stats;
    let summoner_name = identity
        .player
        .as_ref()
        .map(|player| player.summoner_name.clone())
        .unwrap_or_default();
    let creep_score = stats.cs_total();

    Some(PlayerMatchSummary {
        game_id: match_data.game_id,
        win: stats.win,
        summoner_name,
        game_duration: match_data.game_duration,
        champion_id: participant.champion_id,
        kills: stats.kills,
        deaths: stats.deaths,
        assists: stats.assists,
        kda: calc_kda(stats.kills, stats.deaths, stats.assists),
        spell1_id: participant.spell1_id,
        spell2_id: participant.spell2_id,
        item0: stats.item0,
        item1: stats.item1,
        item2: stats.item2,
        item3: stats.item3,
        item4: stats.item4,
        item5: stats.item5,
        item6: stats.item6,
        champ_level: stats.champ_level,
        creep_score,
        creep_score_per_min: calc_creep_score_per_min(creep_score, match_data.game_duration),
        primary_perk_style: stats.perk_primary_style,
        primary_perk: stats.perk0,
        sub_perk_style: stats.perk_sub_style,
    })
}
