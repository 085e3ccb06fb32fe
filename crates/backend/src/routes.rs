use axum::{
    routing::{get, post},
    Router,
};

use crate::api::{handlers, AppState};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D400 SALES OVERVIEW DASHBOARD
        // ========================================
        .route(
            "/api/d400/filter_options",
            get(handlers::d400_sales_overview::get_filter_options),
        )
        .route(
            "/api/d400/dashboard",
            post(handlers::d400_sales_overview::get_dashboard),
        )
        .route(
            "/api/d400/orders",
            post(handlers::d400_sales_overview::list_orders),
        )
        .route(
            "/api/d400/export/:kind",
            post(handlers::d400_sales_overview::export_csv),
        )
        .with_state(state)
}
