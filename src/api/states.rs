//! State endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireToken;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::state::{StateId, StateStats};

pub const STATE_NOT_FOUND: &str = "State Not Found";

/// Create the state router
pub fn create_states_router() -> Router<AppState> {
    Router::new()
        .route("/states", get(list_states))
        .route("/states/{state_id}", get(get_state))
        .route("/states/{state_id}/stats", get(get_state_stats))
}

/// State as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    pub state_id: StateId,
    pub state_name: String,
    pub population: i64,
}

impl From<crate::domain::state::State> for StateResponse {
    fn from(state: crate::domain::state::State) -> Self {
        Self {
            state_id: state.id,
            state_name: state.name,
            population: state.population,
        }
    }
}

/// Case totals across a state's districts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_cases: i64,
    pub total_cured: i64,
    pub total_active: i64,
    pub total_deaths: i64,
}

impl From<StateStats> for StatsResponse {
    fn from(stats: StateStats) -> Self {
        Self {
            total_cases: stats.total_cases,
            total_cured: stats.total_cured,
            total_active: stats.total_active,
            total_deaths: stats.total_deaths,
        }
    }
}

/// GET /states/
pub async fn list_states(
    State(app): State<AppState>,
) -> Result<Json<Vec<StateResponse>>, ApiError> {
    let states = app.state_repository.list().await?;

    Ok(Json(states.into_iter().map(StateResponse::from).collect()))
}

/// GET /states/{state_id}/
pub async fn get_state(
    State(app): State<AppState>,
    Path(state_id): Path<StateId>,
) -> Result<Json<StateResponse>, ApiError> {
    let state = app
        .state_repository
        .get(state_id)
        .await?
        .ok_or_else(|| ApiError::not_found(STATE_NOT_FOUND))?;

    Ok(Json(state.into()))
}

/// GET /states/{state_id}/stats/
///
/// Requires a bearer token. A state with no districts reports zeros.
pub async fn get_state_stats(
    RequireToken(_claims): RequireToken,
    State(app): State<AppState>,
    Path(state_id): Path<StateId>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = app.state_repository.stats(state_id).await?;

    Ok(Json(stats.into()))
}
