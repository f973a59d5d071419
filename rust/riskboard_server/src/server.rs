use std::sync::Arc;

use axum::extract::{
    Path,
    State,
};
use axum::response::{
    Html,
    IntoResponse,
};
use axum::routing::get;
use axum::{
    Json,
    Router,
};
use riskboard::{
    DashboardLayout,
    DataProcessingError,
    RiskTable,
    SolutionView,
};
use serde_json::json;
use tracing::info;

use crate::error::ServerError;
use crate::page::INDEX_HTML;

/// Application state shared across handlers.
///
/// The table and layout are read-only after startup, so handlers share them
/// through `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RiskTable>,
    pub layout: Arc<DashboardLayout>,
}

impl AppState {
    pub fn new(table: RiskTable) -> Self {
        let layout = DashboardLayout::from_table(&table);
        Self {
            table: Arc::new(table),
            layout: Arc::new(layout),
        }
    }
}

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/layout", get(layout_handler))
        .route("/api/solutions/:solution", get(solution_handler))
        .with_state(state)
}

/// Index page handler
async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Health check endpoint
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "riskboard_server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn layout_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.layout.as_ref().clone())
}

/// Project the selected solution into its summary and figures.
///
/// The dropdown only offers known solutions, so an unknown one here means a
/// hand-typed URL or a selection that outlived a data swap. Both get a 404
/// in the error envelope rather than an empty dashboard.
async fn solution_handler(
    State(state): State<AppState>,
    Path(solution): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    let view = SolutionView::project(&state.table, &solution).map_err(|e| match e {
        DataProcessingError::EmptySelection { solution } => {
            ServerError::UnknownSolution { solution }
        }
        other => ServerError::DataLoad(other.into()),
    })?;
    Ok(Json(json!({
        "status": "success",
        "data": view,
    })))
}

/// Run the server
pub async fn run_server(addr: &str, state: AppState) -> Result<(), ServerError> {
    let app = create_app(state);

    info!("Starting dashboard server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind to address {}: {}", addr, e);
        ServerError::Io(e)
    })?;

    info!("Dashboard ready at http://{}/", addr);

    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        ServerError::Io(e)
    })?;

    Ok(())
}
