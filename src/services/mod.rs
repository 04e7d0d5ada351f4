pub mod lookup;
pub mod payment;
pub mod ticketing;

pub use lookup::{find_ticket, TicketQuery};
pub use payment::PaymentClient;
pub use ticketing::TicketingClient;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Failures talking to an external service. No call is retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Invalid response from upstream: {0}")]
    InvalidResponse(String),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
}

/// `{ success, message, data }` as emitted by the ticketing API, which
/// spells the first two `sucesso` and `mensagem`.
#[derive(Debug, Deserialize)]
pub struct UpstreamEnvelope<T> {
    #[serde(alias = "sucesso", default)]
    pub success: bool,
    #[serde(alias = "mensagem")]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Sends `request` and decodes a 2xx JSON body into `T`.
pub(crate) async fn send_json<T>(request: RequestBuilder) -> Result<T, UpstreamError>
where
    T: DeserializeOwned,
{
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<UpstreamEnvelope<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.message);
        return Err(UpstreamError::Status { status, message });
    }

    serde_json::from_slice(&body).map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
}
