use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[serde(alias = "ativo")]
    Active,
    #[serde(alias = "usado")]
    Used,
    #[serde(alias = "cancelado")]
    Canceled,
}

/// A purchased admission. Upstream payloads use Portuguese field names,
/// which are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    #[serde(alias = "eventoId")]
    pub event_id: String,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(alias = "nome")]
    pub name: String,
    pub email: String,
    pub hash: String,
    #[serde(alias = "dataCompra")]
    pub purchased_at: DateTime<Utc>,
    pub status: TicketStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketLookupRequest {
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketLookupResponse {
    pub ticket: Ticket,
    pub hash: String,
}
