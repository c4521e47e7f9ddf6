//! Match history lookup: summoner resolution, matchlist and match detail
//! fetching, and per-player summaries.

use futures::future::try_join_all;
use tracing::{debug, instrument};

use crate::error::AppError;
use crate::riot::{GameDataApi, MatchApi, MatchDto, MatchReferenceDto, SummonerApi};

mod name;
mod summary;

#[cfg(test)]
pub mod fixtures;

pub use name::SummonerName;
pub use summary::{PlayerMatchSummary, extract_summary};

/// Number of recent matches looked up per request.
pub const MAX_MATCHES: usize = 10;

/// Recent match references of a summoner, in the order the API returned them.
#[derive(Debug, Clone)]
pub struct Matchlist {
    /// Encrypted summoner id, used to find the summoner inside match details.
    pub summoner_id: String,
    pub matches: Vec<MatchReferenceDto>,
}

/// Resolves `name` and fetches at most [`MAX_MATCHES`] of its match references.
#[instrument(skip_all, fields(summoner = %name))]
pub async fn fetch_matchlist(
    api: &dyn GameDataApi,
    name: &SummonerName,
) -> Result<Matchlist, AppError> {
    debug!("Grabbing summoner id");
    let summoner = api.summoner_by_name(name.as_str()).await?;

    let account_id = summoner
        .account_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::MissingAccountId(name.to_string()))?;

    debug!(%account_id, "Grabbing matchlist");
    let matchlist = api.matchlist_by_account(&account_id).await?;

    let cap = usize::try_from(matchlist.end_index)
        .unwrap_or(0)
        .min(MAX_MATCHES);
    let mut matches = matchlist.matches;
    matches.truncate(cap);

    Ok(Matchlist {
        summoner_id: summoner.id,
        matches,
    })
}

/// Most recent first.
pub fn sort_by_recency(matches: &mut [MatchReferenceDto]) {
    matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Fetches every referenced match concurrently.
///
/// Results keep the order of `references`. The first failure is returned
/// right away and the remaining requests are dropped.
#[instrument(skip_all, fields(count = references.len()))]
pub async fn fetch_match_details(
    api: &dyn GameDataApi,
    references: &[MatchReferenceDto],
) -> Result<Vec<MatchDto>, AppError> {
    let requests = references.iter().map(|reference| {
        debug!(game_id = reference.game_id, "Grabbing match");
        api.match_by_id(reference.game_id)
    });

    try_join_all(requests).await
}

/// Summaries of `summoner_id` across `matches`, skipping matches it is absent from.
pub fn extract_summaries(matches: &[MatchDto], summoner_id: &str) -> Vec<PlayerMatchSummary> {
    matches
        .iter()
        .filter_map(|match_data| {
            let summary = extract_summary(match_data, summoner_id);
            if summary.is_none() {
                debug!(game_id = match_data.game_id, "Summoner not found in match, skipped");
            }
            summary
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::fixtures::{MockGameApi, dummy_match, dummy_reference};
    use super::*;

    fn name(raw: &str) -> SummonerName {
        SummonerName::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn matchlist_is_capped_to_max_matches() {
        let references: Vec<_> = (0..20).map(|i| dummy_reference(i, i * 1000)).collect();
        let api = MockGameApi::default()
            .with_summoner("Faker", "sum-1", Some("acc-1"))
            .with_matchlist("acc-1", references, 100);

        let matchlist = fetch_matchlist(&api, &name("Faker")).await.unwrap();

        assert_eq!(matchlist.summoner_id, "sum-1");
        assert_eq!(matchlist.matches.len(), MAX_MATCHES);
        assert_eq!(matchlist.matches[0].game_id, 0);
    }

    #[tokio::test]
    async fn matchlist_is_capped_to_end_index() {
        let references: Vec<_> = (0..5).map(|i| dummy_reference(i, i * 1000)).collect();
        let api = MockGameApi::default()
            .with_summoner("Faker", "sum-1", Some("acc-1"))
            .with_matchlist("acc-1", references, 3);

        let matchlist = fetch_matchlist(&api, &name("Faker")).await.unwrap();

        assert_eq!(matchlist.matches.len(), 3);
    }

    #[tokio::test]
    async fn end_index_beyond_returned_matches_keeps_them_all() {
        let references: Vec<_> = (0..2).map(|i| dummy_reference(i, i * 1000)).collect();
        let api = MockGameApi::default()
            .with_summoner("Faker", "sum-1", Some("acc-1"))
            .with_matchlist("acc-1", references, 8);

        let matchlist = fetch_matchlist(&api, &name("Faker")).await.unwrap();

        assert_eq!(matchlist.matches.len(), 2);
    }

    #[tokio::test]
    async fn negative_end_index_keeps_nothing() {
        let references: Vec<_> = (0..4).map(|i| dummy_reference(i, i * 1000)).collect();
        let api = MockGameApi::default()
            .with_summoner("Faker", "sum-1", Some("acc-1"))
            .with_matchlist("acc-1", references, -1);

        let matchlist = fetch_matchlist(&api, &name("Faker")).await.unwrap();

        assert!(matchlist.matches.is_empty());
    }

    #[tokio::test]
    async fn summoner_without_account_id_fails() {
        let api = MockGameApi::default().with_summoner("Faker", "sum-1", None);

        let res = fetch_matchlist(&api, &name("Faker")).await;

        assert!(matches!(res, Err(AppError::MissingAccountId(_))));
        assert_eq!(api.match_calls(), 0);
    }

    #[tokio::test]
    async fn unknown_summoner_fails() {
        let api = MockGameApi::default();

        let res = fetch_matchlist(&api, &name("Nobody")).await;

        assert!(matches!(res, Err(AppError::SummonerNotFound(_))));
    }

    #[test]
    fn sort_by_recency_orders_descending() {
        let mut references = vec![
            dummy_reference(1, 100),
            dummy_reference(3, 300),
            dummy_reference(2, 200),
        ];

        sort_by_recency(&mut references);

        let ids: Vec<_> = references.iter().map(|r| r.game_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn details_keep_reference_order_regardless_of_completion() {
        let references = vec![dummy_reference(1, 0), dummy_reference(2, 0), dummy_reference(3, 0)];
        let api = MockGameApi::default()
            .with_match(dummy_match(1, 1800, &["me"]))
            .with_match(dummy_match(2, 1800, &["me"]))
            .with_match(dummy_match(3, 1800, &["me"]))
            .with_delay(1, Duration::from_millis(300))
            .with_delay(2, Duration::from_millis(200))
            .with_delay(3, Duration::from_millis(100));

        let details = fetch_match_details(&api, &references).await.unwrap();

        let ids: Vec<_> = details.iter().map(|m| m.game_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(api.match_calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn details_fail_fast_on_first_error() {
        let references = vec![dummy_reference(1, 0), dummy_reference(2, 0), dummy_reference(3, 0)];
        let api = MockGameApi::default()
            .with_match(dummy_match(1, 1800, &["me"]))
            .with_match(dummy_match(3, 1800, &["me"]))
            .with_delay(1, Duration::from_secs(3600))
            .with_delay(3, Duration::from_secs(3600))
            .with_failing_match(2);

        let start = Instant::now();
        let res = fetch_match_details(&api, &references).await;

        assert!(matches!(res, Err(AppError::RiotApi { status: 500, .. })));
        assert!(start.elapsed() < Duration::from_secs(3600));
    }

    #[tokio::test]
    async fn no_references_means_no_requests() {
        let api = MockGameApi::default();

        let details = fetch_match_details(&api, &[]).await.unwrap();

        assert!(details.is_empty());
        assert_eq!(api.match_calls(), 0);
    }

    #[test]
    fn summaries_skip_matches_without_the_summoner() {
        let matches = vec![
            dummy_match(1, 1800, &["me"]),
            dummy_match(2, 1800, &["someone"]),
            dummy_match(3, 1800, &["someone", "me"]),
        ];

        let summaries = extract_summaries(&matches, "me");

        let ids: Vec<_> = summaries.iter().map(|s| s.game_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
