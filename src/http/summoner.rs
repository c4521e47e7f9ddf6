use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{Span, error, info, instrument, warn};

use crate::error::AppError;
use crate::history::{
    self, PlayerMatchSummary, SummonerName, extract_summaries, fetch_match_details,
    sort_by_recency,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SummonerQuery {
    pub name: Option<String>,
}

/// Failures of `/summoner`, one per lookup stage.
///
/// Bad characters in the name and an unknown or unreachable summoner all end
/// up as [`SummonerRouteError::Resolution`].
#[derive(Debug, Error)]
pub enum SummonerRouteError {
    #[error("Server unavailable")]
    Unavailable,
    #[error("Invalid summoner name")]
    MissingName,
    #[error("Invalid summoner name")]
    Resolution(#[source] AppError),
    #[error("Internal Server Error")]
    Aggregation(#[source] AppError),
}

impl SummonerRouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingName => StatusCode::BAD_REQUEST,
            Self::Unavailable | Self::Resolution(_) | Self::Aggregation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for SummonerRouteError {
    fn into_response(self) -> Response {
        (self.status(), format!("Error: {self}")).into_response()
    }
}

/// `GET /summoner?name=<name>`: summaries of the summoner's recent matches,
/// most recent first.
///
/// A query string that does not decode counts as a missing name.
#[instrument(skip_all, fields(name = tracing::field::Empty))]
pub async fn get_match_history(
    State(state): State<AppState>,
    query: Result<Query<SummonerQuery>, QueryRejection>,
) -> Result<Json<Vec<PlayerMatchSummary>>, SummonerRouteError> {
    let Some(api) = state.riot.as_deref() else {
        return Err(SummonerRouteError::Unavailable);
    };
    let raw_name = match query {
        Ok(Query(params)) => params.name.filter(|name| !name.is_empty()),
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable query string");
            None
        }
    }
    .ok_or(SummonerRouteError::MissingName)?;
    Span::current().record("name", raw_name.as_str());

    let matchlist = async {
        let name = SummonerName::parse(&raw_name)?;
        history::fetch_matchlist(api, &name).await
    }
    .await;
    let mut matchlist = matchlist.map_err(|e| {
        error!(error = %e, "❌ Could not resolve matchlist");
        SummonerRouteError::Resolution(e)
    })?;

    sort_by_recency(&mut matchlist.matches);

    let details = fetch_match_details(api, &matchlist.matches)
        .await
        .map_err(|e| {
            error!(error = %e, "❌ Could not fetch match details");
            SummonerRouteError::Aggregation(e)
        })?;

    let summaries = extract_summaries(&details, &matchlist.summoner_id);
    info!(
        matches = details.len(),
        summaries = summaries.len(),
        "✅ Match history ready"
    );

    Ok(Json(summaries))
}
