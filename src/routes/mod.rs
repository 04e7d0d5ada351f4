use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{admin, events, guests, health_check, payments, tickets};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let security = create_security_headers_layer(state.config.production);
    let cors = create_cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/events", get(events::list_events))
        .route("/api/events/guests", post(events::register_guest))
        .route("/api/events/:id", get(events::get_event))
        .route("/api/tickets", get(tickets::list_tickets))
        .route("/api/tickets/availability", get(tickets::availability))
        .route("/api/tickets/lookup", post(tickets::lookup_ticket))
        .route("/api/guests/verify", post(guests::verify_guest))
        .route("/api/payments/preference", post(payments::create_preference))
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/parties", get(admin::list_parties))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(security)
        .layer(cors)
}
