use axum::extract::{Path, State};
use axum::response::Response;
use tracing::info;
use validator::Validate;

use crate::models::{Event, GuestRegistration, PurchaseRequest};
use crate::services::UpstreamError;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::JsonBody;
use crate::utils::response::{data, relay};

const PURCHASE_FAILED: &str = "Failed to process purchase";

pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events: Vec<Event> = state
        .ticketing
        .list_events()
        .await
        .map_err(AppError::upstream("list events", "Failed to fetch events"))?
        .into_iter()
        .map(Event::from)
        .collect();

    Ok(data(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Response, AppError> {
    match state.ticketing.get_event(&event_id).await {
        Ok(event) => Ok(data(Event::from(event))),
        Err(UpstreamError::Status { status, .. }) if status == reqwest::StatusCode::NOT_FOUND => {
            Err(AppError::NotFound(format!("Event '{}' was not found", event_id)))
        }
        Err(err) => Err(AppError::upstream("get event", "Failed to fetch event")(err)),
    }
}

/// Registers the buyer as a guest of the configured event. The ticketing
/// API's verdict is relayed; its rejections keep their status code.
pub async fn register_guest(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<PurchaseRequest>,
) -> Result<Response, AppError> {
    let request = request.without_blank_cpf();
    request.validate()?;

    let registration = GuestRegistration::new(state.config.event_id.as_str(), &request);

    match state.ticketing.register_guest(&registration).await {
        Ok(envelope) => {
            info!(
                event_id = %registration.event_id,
                with_cpf = registration.cpf.is_some(),
                "Guest registered"
            );
            Ok(relay(envelope.success, envelope.data, envelope.message))
        }
        Err(UpstreamError::Status { status, message }) => Err(AppError::UpstreamRejected {
            status,
            message: message.unwrap_or_else(|| PURCHASE_FAILED.to_string()),
        }),
        Err(err) => Err(AppError::upstream(
            "register guest",
            "Internal server error",
        )(err)),
    }
}
