//! Shared fixtures for the HTTP integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::Router;
use rust_decimal::Decimal;

use boreal_server::config::{Config, LogFormat, PaymentSettings};
use boreal_server::routes::create_routes;
use boreal_server::state::AppState;

pub const ADMIN_HASH: &str = "d02f312c49a3e7b62daccf1f6e925b1872cf4e891ea13d26d4d52b86d1448579";

/// An address nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub fn test_config(ticketing_api_url: &str, payment_api_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        production: false,
        ticketing_api_url: ticketing_api_url.to_string(),
        payment_api_url: payment_api_url.to_string(),
        admin_hash: ADMIN_HASH.to_string(),
        event_id: "1".to_string(),
        mock_tickets: false,
        payment: PaymentSettings {
            title: "Boreal Fest".to_string(),
            description: "Uma festa".to_string(),
            unit_price: Decimal::new(105, 2),
            currency: "BRL".to_string(),
        },
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        log_format: LogFormat::Pretty,
    }
}

pub fn create_test_app(config: Config) -> Router {
    create_routes(AppState::new(config).expect("Failed to build app state"))
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_request_with_auth(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// A ticket as the ticketing API lists it.
pub fn upstream_ticket(id: &str, cpf: Option<&str>, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "eventoId": "1",
        "nomeEvento": "Boreal Fest",
        "cpf": cpf,
        "nome": name,
        "email": format!("{}@example.com", id),
        "hash": format!("hash-{}", id),
        "dataCompra": "2025-07-01T12:00:00Z",
        "status": "ativo",
        "createdAt": "2025-07-01T12:00:00Z",
        "updatedAt": "2025-07-01T12:00:00Z"
    })
}
