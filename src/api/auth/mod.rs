//! Authentication API endpoint
//!
//! Exchanges a username and password for a bearer token. Login itself is
//! not behind the token gate.

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::infrastructure::user::LoginOutcome;

pub const INVALID_USER: &str = "Invalid user";
pub const INVALID_PASSWORD: &str = "Invalid password";

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub jwt_token: String,
}

/// Login with username and password
///
/// POST /login/
///
/// Unknown usernames and wrong passwords are distinct 400 responses.
pub async fn login(
    State(app): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = app
        .user_service
        .authenticate(&request.username, &request.password)
        .await?;

    let user = match outcome {
        LoginOutcome::Authenticated(user) => user,
        LoginOutcome::UnknownUser => {
            debug!(username = %request.username, "Login for unknown user");
            return Err(ApiError::bad_request(INVALID_USER));
        }
        LoginOutcome::WrongPassword => {
            debug!(username = %request.username, "Login with wrong password");
            return Err(ApiError::bad_request(INVALID_PASSWORD));
        }
    };

    let jwt_token = app.token_service.issue(&user)?;
    info!(username = %user.username(), "User logged in");

    Ok(Json(LoginResponse { jwt_token }))
}
