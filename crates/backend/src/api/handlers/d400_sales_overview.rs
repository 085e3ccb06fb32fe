use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::dashboards::d400_sales_overview::{
    DashboardView, ExportKind, FilterOptions, FilterSpec,
};
use contracts::domain::a001_order::Order;

use crate::api::AppState;
use crate::dashboards::d400_sales_overview::{export, service};

/// GET /api/d400/filter_options
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    let options = service::get_filter_options(&state.dataset);
    tracing::info!(
        "D400 Dashboard: Returning filter options for {} orders ({:?}..{:?})",
        state.dataset.len(),
        options.min_date,
        options.max_date
    );
    Json(options)
}

/// POST /api/d400/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Json(spec): Json<FilterSpec>,
) -> Json<DashboardView> {
    tracing::info!(
        "D400 Dashboard: Building view for {}..{}, {} categories, {} segments, payment={}, min_rating={}",
        spec.date_from,
        spec.date_to,
        spec.categories.len(),
        spec.segments.len(),
        spec.payment_method,
        spec.min_rating
    );

    let view = service::build_dashboard(&state.dataset, &spec);

    tracing::info!(
        "D400 Dashboard: Returning {} of {} orders across {} months",
        view.row_count,
        state.dataset.len(),
        view.monthly_revenue.len()
    );
    Json(view)
}

/// POST /api/d400/orders
pub async fn list_orders(
    State(state): State<AppState>,
    Json(spec): Json<FilterSpec>,
) -> Json<Vec<Order>> {
    let rows = service::filtered_orders(&state.dataset, &spec);
    tracing::info!("D400 Dashboard: Returning {} raw orders", rows.len());
    Json(rows)
}

/// POST /api/d400/export/:kind
pub async fn export_csv(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(spec): Json<FilterSpec>,
) -> Result<Response, StatusCode> {
    let Some(kind) = ExportKind::from_code(&kind) else {
        tracing::warn!("D400 Dashboard: Unknown export kind '{}'", kind);
        return Err(StatusCode::NOT_FOUND);
    };

    let now = chrono::Local::now().naive_local();
    match export::export(&state.dataset, &spec, kind, now) {
        Ok(file) => {
            tracing::info!(
                "D400 Dashboard: Exported {} ({} bytes)",
                file.file_name,
                file.content.len()
            );
            let disposition = format!("attachment; filename=\"{}\"", file.file_name);
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                file.content,
            )
                .into_response())
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to export {}: {}", kind.code(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
