use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::data;
use crate::models::Ticket;
use crate::services::{PaymentClient, TicketingClient, UpstreamError};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ticketing: TicketingClient,
    pub payments: PaymentClient,
}

impl AppState {
    /// Both upstream clients share one connection pool.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            ticketing: TicketingClient::new(client.clone(), &config.ticketing_api_url),
            payments: PaymentClient::new(client, &config.payment_api_url),
            config: Arc::new(config),
        })
    }

    /// Ticket records to search, from the in-memory store or the ticketing API.
    pub async fn tickets(&self) -> Result<Vec<Ticket>, UpstreamError> {
        if self.config.mock_tickets {
            return Ok(data::tickets().to_vec());
        }

        self.ticketing.list_tickets().await
    }
}
