use axum::extract::State;
use axum::response::Response;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{secret_matches, AdminSession};
use crate::data;
use crate::models::{PartyReport, PartySummary};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::JsonBody;
use crate::utils::response::success;

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub hash: String,
}

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
}

/// Exchanges the admin hash for a bearer token, which is the hash itself.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AdminLoginRequest>,
) -> Result<Response, AppError> {
    if !secret_matches(&request.hash, &state.config.admin_hash) {
        warn!("Admin login rejected");
        return Err(AppError::AuthError("Invalid access hash.".to_string()));
    }

    info!("Admin logged in");
    Ok(success(
        AdminLoginResponse {
            token: state.config.admin_hash.clone(),
        },
        "Login successful.",
    ))
}

pub async fn list_parties(_admin: AdminSession) -> Response {
    let parties = data::parties().to_vec();
    let summary = PartySummary::from_parties(&parties);

    success(PartyReport { parties, summary }, "Parties fetched")
}
