//! Client for the payment-preference service.

use reqwest::Client;
use tracing::debug;

use super::{send_json, UpstreamError};
use crate::models::{PaymentPreferenceRequest, UpstreamPreference};

#[derive(Debug, Clone)]
pub struct PaymentClient {
    client: Client,
    base_url: String,
}

impl PaymentClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub async fn create_preference(
        &self,
        preference: &PaymentPreferenceRequest,
    ) -> Result<UpstreamPreference, UpstreamError> {
        let url = format!("{}/payment/preference", self.base_url);
        debug!(
            url = %url,
            external_reference = %preference.external_reference,
            "Creating payment preference"
        );

        send_json(self.client.post(&url).json(preference)).await
    }
}
