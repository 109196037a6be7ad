//! Mock sports data API.
//!
//! Serves fixture teams, players and matches over the same REST shape the
//! real data service uses, for local runs and tests.

pub mod data;

use crate::error::Result;
use crate::types::team::{MatchRecord, PlayerRecord, TeamRecord};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub use data::MockStore;

type ApiError = (StatusCode, Json<Value>);

fn not_found(detail: &str) -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": detail })))
}

pub fn router(store: MockStore) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/teams", get(list_teams))
        .route("/teams/:team_id", get(get_team))
        .route("/players", get(list_players))
        .route("/matches", get(list_matches))
        .route("/matches/:match_id", get(get_match))
        .with_state(Arc::new(store))
}

/// Serves `store` on an already-bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, store: MockStore) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, teams = store.teams.len(), "mock data api listening");
    }
    axum::serve(listener, router(store)).await?;
    Ok(())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Sports Data API" }))
}

async fn list_teams(State(store): State<Arc<MockStore>>) -> Json<Vec<TeamRecord>> {
    Json(store.teams.values().cloned().collect())
}

async fn get_team(
    State(store): State<Arc<MockStore>>,
    Path(team_id): Path<u32>,
) -> std::result::Result<Json<TeamRecord>, ApiError> {
    store
        .teams
        .get(&team_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Team not found"))
}

async fn list_players(State(store): State<Arc<MockStore>>) -> Json<Vec<PlayerRecord>> {
    Json(
        store
            .teams
            .values()
            .flat_map(|team| team.players.iter().cloned())
            .collect(),
    )
}

async fn list_matches(State(store): State<Arc<MockStore>>) -> Json<Vec<MatchRecord>> {
    Json(store.matches.values().cloned().collect())
}

async fn get_match(
    State(store): State<Arc<MockStore>>,
    Path(match_id): Path<u32>,
) -> std::result::Result<Json<MatchRecord>, ApiError> {
    store
        .matches
        .get(&match_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Match not found"))
}
