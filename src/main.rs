use anyhow::Result;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use boreal_server::config::{init_logging, Config};
use boreal_server::routes::create_routes;
use boreal_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;
    init_logging(config.log_format);

    tracing::info!(
        ticketing_api = %config.ticketing_api_url,
        payment_api = %config.payment_api_url,
        mock_tickets = config.mock_tickets,
        "Starting boreal-server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let addr = config.socket_addr()?;
    let state = AppState::new(config)?;
    let app = create_routes(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
