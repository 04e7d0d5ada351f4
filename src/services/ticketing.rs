//! Client for the external ticketing API.

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::{send_json, UpstreamEnvelope, UpstreamError};
use crate::models::{GuestRegistration, GuestVerificationRequest, Ticket, UpstreamEvent};

#[derive(Debug, Clone)]
pub struct TicketingClient {
    client: Client,
    base_url: String,
}

impl TicketingClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/api/eventos/{id}` with `id` percent-encoded as a single path segment.
    fn event_url(&self, id: &str) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.url("/api/eventos"))
            .map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    pub async fn list_events(&self) -> Result<Vec<UpstreamEvent>, UpstreamError> {
        let url = self.url("/api/eventos/");
        debug!(url = %url, "Fetching events");

        let envelope: UpstreamEnvelope<Vec<UpstreamEvent>> =
            send_json(self.client.get(&url)).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn get_event(&self, id: &str) -> Result<UpstreamEvent, UpstreamError> {
        let url = self.event_url(id)?;
        debug!(url = %url, "Fetching event");

        let envelope: UpstreamEnvelope<UpstreamEvent> = send_json(self.client.get(url)).await?;
        envelope
            .data
            .ok_or_else(|| UpstreamError::InvalidResponse("event payload missing".to_string()))
    }

    /// Registers a guest for the configured event; the ticketing API issues
    /// the ticket.
    pub async fn register_guest(
        &self,
        registration: &GuestRegistration,
    ) -> Result<UpstreamEnvelope<Value>, UpstreamError> {
        let url = self.url("/api/eventos/convidados");
        debug!(url = %url, event_id = %registration.event_id, "Registering guest");

        send_json(self.client.post(&url).json(registration)).await
    }

    /// Fetches every ticket. Records that do not decode are logged and
    /// skipped so one bad entry cannot hide the rest.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, UpstreamError> {
        let url = self.url("/api/ingressos");
        debug!(url = %url, "Fetching tickets");

        let envelope: UpstreamEnvelope<Vec<Value>> = send_json(self.client.get(&url)).await?;
        Ok(decode_tickets(envelope.data.unwrap_or_default()))
    }

    /// The verification record is relayed as-is, so its shape is not checked.
    pub async fn verify_guest(
        &self,
        request: &GuestVerificationRequest,
    ) -> Result<UpstreamEnvelope<Value>, UpstreamError> {
        let url = self.url("/api/eventos/convidados/verificar");
        debug!(url = %url, "Verifying guest");

        send_json(self.client.post(&url).json(request)).await
    }
}

fn decode_tickets(records: Vec<Value>) -> Vec<Ticket> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Ticket>(record) {
            Ok(ticket) => Some(ticket),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed ticket record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> TicketingClient {
        TicketingClient::new(Client::new(), "http://tickets.local/")
    }

    #[test]
    fn test_event_url_escapes_id() {
        let client = client();

        let url = client.event_url("evt-1").unwrap();
        assert_eq!(url.as_str(), "http://tickets.local/api/eventos/evt-1");

        let url = client.event_url("1?x=y").unwrap();
        assert_eq!(url.path(), "/api/eventos/1%3Fx=y");
        assert_eq!(url.query(), None);

        let url = client.event_url("a/b").unwrap();
        assert_eq!(url.path(), "/api/eventos/a%2Fb");
    }

    #[test]
    fn test_decode_tickets_skips_malformed_records() {
        let tickets = decode_tickets(vec![
            json!({
                "id": "t1",
                "eventoId": "evt-1",
                "nome": "João Silva",
                "email": "joao@x.com",
                "hash": "h1",
                "dataCompra": "2025-07-01T12:00:00Z",
                "status": "ativo"
            }),
            json!({
                "id": "t9",
                "eventoId": "evt-1",
                "nome": "Sem Fuso",
                "email": "t9@x.com",
                "hash": "h9",
                "dataCompra": "2025-07-01T12:00:00",
                "status": "ativo"
            }),
            json!("not a ticket"),
        ]);

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, "t1");
    }
}
