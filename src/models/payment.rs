use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_email, validate_name};

/// Request to open a payment for a registered guest.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    #[serde(alias = "convidadoId")]
    #[validate(length(min = 1, message = "Guest id is required"))]
    pub guest_id: String,

    #[serde(alias = "nome")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payer {
    pub name: String,
    pub email: String,
}

/// Preference body sent to the payment service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentPreferenceRequest {
    pub title: String,
    pub description: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub currency_id: String,
    pub external_reference: String,
    pub payer: Payer,
}

/// Preference as created by the payment service.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamPreference {
    pub id: String,
    pub init_point: String,
    #[serde(default)]
    pub sandbox_init_point: Option<String>,
    #[serde(default)]
    pub external_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentPreference {
    pub preference_id: String,
    pub payment_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_payment_url: Option<String>,
    pub external_reference: String,
}

impl PaymentPreference {
    pub fn from_upstream(upstream: UpstreamPreference, requested_reference: &str) -> Self {
        Self {
            preference_id: upstream.id,
            payment_url: upstream.init_point,
            sandbox_payment_url: upstream.sandbox_init_point,
            external_reference: upstream
                .external_reference
                .unwrap_or_else(|| requested_reference.to_string()),
        }
    }
}
