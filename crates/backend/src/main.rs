use axum::http::{header, Method};
use axum::middleware;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use backend::api::{middleware::request_logger, AppState};
use backend::routes::configure_routes;
use backend::shared::{config, data::OrderDataset, format::format_number, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    logger::init(&config.logging)?;
    tracing::info!(
        "Configuration loaded: server {}:{}, {} records, seed {}",
        config.server.host,
        config.server.port,
        config.dataset.n_records,
        config.dataset.seed
    );

    let started_at = chrono::Local::now().naive_local();
    let dataset = OrderDataset::from_config(&config.dataset, started_at);
    tracing::info!(
        "Generated {} orders (seed={}, window ending {})",
        format_number(dataset.len()),
        dataset.seed(),
        dataset.window_end()
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = configure_routes(AppState::new(dataset))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Dashboard API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
