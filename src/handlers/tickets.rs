use axum::extract::State;
use axum::response::Response;

use crate::data;
use crate::models::{EventAvailability, TicketLookupRequest, TicketLookupResponse};
use crate::services::{find_ticket, TicketQuery};
use crate::state::AppState;
use crate::utils::cpf::format_cpf;
use crate::utils::error::AppError;
use crate::utils::extract::JsonBody;
use crate::utils::response::{data as data_response, success};

const TICKETING_UNAVAILABLE: &str =
    "Failed to reach the ticketing service. Check that the API is available.";

pub async fn list_tickets(State(state): State<AppState>) -> Result<Response, AppError> {
    let tickets = state
        .tickets()
        .await
        .map_err(AppError::upstream("list tickets", TICKETING_UNAVAILABLE))?;

    Ok(data_response(tickets))
}

pub async fn availability() -> Response {
    data_response(EventAvailability::from(data::event()))
}

pub async fn lookup_ticket(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<TicketLookupRequest>,
) -> Result<Response, AppError> {
    let query = TicketQuery::new(request.cpf.as_deref(), request.name.as_deref())?;

    let tickets = state
        .tickets()
        .await
        .map_err(AppError::upstream("lookup ticket", TICKETING_UNAVAILABLE))?;

    let ticket = find_ticket(&tickets, &query)
        .cloned()
        .ok_or_else(|| AppError::NotFound("No ticket found.".to_string()))?;

    let message = match ticket.cpf.as_deref() {
        Some(cpf) => format!("Ticket found for {} (CPF: {})", ticket.name, format_cpf(cpf)),
        None => format!("Ticket found for {}", ticket.name),
    };

    Ok(success(
        TicketLookupResponse {
            hash: ticket.hash.clone(),
            ticket,
        },
        message,
    ))
}
