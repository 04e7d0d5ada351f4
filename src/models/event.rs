use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Image served when the ticketing API has no usable picture for an event.
pub const DEFAULT_EVENT_IMAGE: &str = "/events/boreal.jpg";

/// Placeholder URL the ticketing API fills in for events without an image.
const PLACEHOLDER_IMAGE: &str = "https://exemplo.com/imagem.jpg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub tickets_available: u32,
    pub tickets_total: u32,
    pub payment_link: String,
    pub terms: String,
}

/// Event as returned by the ticketing API.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamEvent {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "imagem", default)]
    pub image: Option<String>,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "local")]
    pub venue: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "ingressosDisponiveis")]
    pub tickets_available: u32,
    #[serde(rename = "ingressosTotal")]
    pub tickets_total: u32,
    #[serde(rename = "linkPagamento", default)]
    pub payment_link: String,
    #[serde(rename = "termosUso", default)]
    pub terms: String,
}

impl From<UpstreamEvent> for Event {
    fn from(upstream: UpstreamEvent) -> Self {
        let image = match upstream.image {
            Some(image) if !image.trim().is_empty() && image != PLACEHOLDER_IMAGE => image,
            _ => DEFAULT_EVENT_IMAGE.to_string(),
        };

        if upstream.tickets_available > upstream.tickets_total {
            tracing::warn!(
                event_id = %upstream.id,
                available = upstream.tickets_available,
                total = upstream.tickets_total,
                "Event reports more tickets available than total; clamping"
            );
        }

        Self {
            tickets_available: upstream.tickets_available.min(upstream.tickets_total),
            id: upstream.id,
            name: upstream.name,
            description: upstream.description,
            image,
            date: upstream.date,
            venue: upstream.venue,
            price: upstream.price,
            tickets_total: upstream.tickets_total,
            payment_link: upstream.payment_link,
            terms: upstream.terms,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventAvailability {
    pub event_id: String,
    pub tickets_available: u32,
    pub tickets_total: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub payment_link: String,
}

impl From<&Event> for EventAvailability {
    fn from(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            tickets_available: event.tickets_available,
            tickets_total: event.tickets_total,
            price: event.price,
            payment_link: event.payment_link.clone(),
        }
    }
}
