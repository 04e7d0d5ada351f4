use axum::extract::State;
use axum::response::Response;
use tracing::info;
use validator::Validate;

use crate::models::{CreatePaymentRequest, Payer, PaymentPreference, PaymentPreferenceRequest};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::JsonBody;
use crate::utils::response::success;
use crate::utils::validation::sanitize_input;

/// Opens a single-ticket payment for a registered guest. The guest id is
/// the external reference the payment service reports back.
pub async fn create_preference(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreatePaymentRequest>,
) -> Result<Response, AppError> {
    request.validate()?;

    let settings = &state.config.payment;
    let preference = PaymentPreferenceRequest {
        title: settings.title.clone(),
        description: settings.description.clone(),
        quantity: 1,
        unit_price: settings.unit_price,
        currency_id: settings.currency.clone(),
        external_reference: request.guest_id.clone(),
        payer: Payer {
            name: sanitize_input(&request.name),
            email: sanitize_input(&request.email),
        },
    };

    let upstream = state
        .payments
        .create_preference(&preference)
        .await
        .map_err(AppError::upstream(
            "create payment preference",
            "Failed to create payment preference",
        ))?;

    info!(
        preference_id = %upstream.id,
        external_reference = %preference.external_reference,
        "Payment preference created"
    );

    Ok(success(
        PaymentPreference::from_upstream(upstream, &request.guest_id),
        "Payment preference created",
    ))
}
