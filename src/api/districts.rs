//! District endpoints

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::middleware::RequireToken;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::district::{District, DistrictFields, DistrictId};
use crate::domain::state::StateId;

pub const DISTRICT_ADDED: &str = "District Successfully Added";
pub const DISTRICT_REMOVED: &str = "District Removed";
pub const DISTRICT_UPDATED: &str = "District Details Updated";
pub const DISTRICT_NOT_FOUND: &str = "District Not Found";

/// Create the district router
pub fn create_districts_router() -> Router<AppState> {
    Router::new()
        .route("/districts", post(create_district))
        .route(
            "/districts/{district_id}",
            get(get_district).put(update_district).delete(delete_district),
        )
        .route("/districts/{district_id}/details", get(get_district_details))
}

/// Body of create and update requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRequest {
    pub district_name: String,
    pub state_id: StateId,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

impl From<DistrictRequest> for DistrictFields {
    fn from(request: DistrictRequest) -> Self {
        Self {
            name: request.district_name,
            state_id: request.state_id,
            cases: request.cases,
            cured: request.cured,
            active: request.active,
            deaths: request.deaths,
        }
    }
}

/// District as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponse {
    pub district_id: DistrictId,
    pub district_name: String,
    pub state_id: StateId,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

impl From<District> for DistrictResponse {
    fn from(district: District) -> Self {
        Self {
            district_id: district.id(),
            district_name: district.name().to_string(),
            state_id: district.state_id(),
            cases: district.cases(),
            cured: district.cured(),
            active: district.active(),
            deaths: district.deaths(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateNameResponse {
    pub state_name: String,
}

/// POST /districts/
pub async fn create_district(
    RequireToken(_claims): RequireToken,
    State(app): State<AppState>,
    Json(request): Json<DistrictRequest>,
) -> Result<&'static str, ApiError> {
    let id = app
        .district_repository
        .create(&DistrictFields::from(request))
        .await?;

    info!(district_id = id, "District created");
    Ok(DISTRICT_ADDED)
}

/// GET /districts/{district_id}/
pub async fn get_district(
    RequireToken(_claims): RequireToken,
    State(app): State<AppState>,
    Path(district_id): Path<DistrictId>,
) -> Result<Json<DistrictResponse>, ApiError> {
    let district = app
        .district_repository
        .get(district_id)
        .await?
        .ok_or_else(|| ApiError::not_found(DISTRICT_NOT_FOUND))?;

    Ok(Json(district.into()))
}

/// DELETE /districts/{district_id}/
///
/// Deleting an unknown district still succeeds.
pub async fn delete_district(
    RequireToken(_claims): RequireToken,
    State(app): State<AppState>,
    Path(district_id): Path<DistrictId>,
) -> Result<&'static str, ApiError> {
    let removed = app.district_repository.delete(district_id).await?;

    debug!(district_id, removed, "District delete");
    Ok(DISTRICT_REMOVED)
}

/// PUT /districts/{district_id}/
pub async fn update_district(
    RequireToken(_claims): RequireToken,
    State(app): State<AppState>,
    Path(district_id): Path<DistrictId>,
    Json(request): Json<DistrictRequest>,
) -> Result<&'static str, ApiError> {
    let updated = app
        .district_repository
        .update(district_id, &DistrictFields::from(request))
        .await?;

    debug!(district_id, updated, "District update");
    Ok(DISTRICT_UPDATED)
}

/// GET /districts/{district_id}/details/
pub async fn get_district_details(
    State(app): State<AppState>,
    Path(district_id): Path<DistrictId>,
) -> Result<Json<Vec<StateNameResponse>>, ApiError> {
    let names = app.district_repository.state_names(district_id).await?;

    Ok(Json(
        names
            .into_iter()
            .map(|state_name| StateNameResponse { state_name })
            .collect(),
    ))
}
