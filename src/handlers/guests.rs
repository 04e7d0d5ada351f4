use axum::extract::State;
use axum::response::Response;
use validator::Validate;

use crate::models::GuestVerificationRequest;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::JsonBody;
use crate::utils::response::relay;

pub async fn verify_guest(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<GuestVerificationRequest>,
) -> Result<Response, AppError> {
    let request = request.without_blanks();
    if !request.has_identifier() {
        return Err(AppError::ValidationError(
            "Please provide at least one field (email or CPF).".to_string(),
        ));
    }
    request.validate()?;

    let envelope = state.ticketing.verify_guest(&request).await.map_err(AppError::upstream(
        "verify guest",
        "Failed to reach the server. Please try again.",
    ))?;

    Ok(relay(envelope.success, envelope.data, envelope.message))
}
