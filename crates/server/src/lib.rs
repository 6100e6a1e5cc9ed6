//! # churn-server
//!
//! Web front-end for the churn classifier: an HTML form for
//! single-record prediction and a CSV upload endpoint for batch
//! prediction, plus Kubernetes-compatible health probes.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use churn_model::ChurnModel;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;
pub mod views;

/// Application state shared across handlers.
///
/// The model is loaded once at startup and never mutated; handlers
/// receive it through axum state rather than a global binding.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ChurnModel>,
}

/// Build the application router around a loaded model.
pub fn app(model: ChurnModel) -> Router {
    let state = AppState {
        model: Arc::new(model),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness))
        // Prediction form
        .route("/", get(routes::index_form).post(routes::predict))
        // Batch prediction
        .route("/batch", get(routes::batch_form).post(routes::batch_predict))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
