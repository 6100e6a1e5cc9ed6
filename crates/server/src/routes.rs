//! HTTP route handlers.

use axum::extract::{Multipart, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use churn_model::{Frame, RawCustomer};
use serde::Deserialize;

use crate::error::AppError;
use crate::views::{self, PredictionView};
use crate::AppState;

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the loaded model answer a prediction?
pub async fn readiness(State(state): State<AppState>) -> Response {
    let probe = vec![0.0f32; state.model.num_features()];
    match state.model.predict_encoded(&probe) {
        Ok(_) => Json(serde_json::json!({
            "status": "ready",
            "version": env!("CARGO_PKG_VERSION"),
            "model_features": state.model.num_features(),
        }))
        .into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "unready",
                "error": err.to_string(),
            })),
        )
            .into_response(),
    }
}

/// `GET /` - the empty prediction form.
pub async fn index_form() -> Html<String> {
    Html(views::index_page(&RawCustomer::default(), None, &[]))
}

/// `POST /` - validate the submission, predict, re-render the form.
pub async fn predict(
    State(state): State<AppState>,
    Form(raw): Form<RawCustomer>,
) -> Response {
    let record = match raw.parse() {
        Ok(record) => record,
        Err(errors) => {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(views::index_page(&raw, None, &messages)),
            )
                .into_response();
        }
    };

    match state.model.predict_record(&record) {
        Ok(prediction) => {
            let view = PredictionView {
                result: if prediction.label == 1 {
                    "Churn".to_string()
                } else {
                    "No Churn".to_string()
                },
                probability: format!("{:.2}", prediction.probability),
            };
            Html(views::index_page(&raw, Some(&view), &[])).into_response()
        }
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::index_page(&raw, None, &[err.to_string()])),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchParams {
    /// Flash message carried across the missing-file redirect.
    pub flash: Option<String>,
}

/// `GET /batch` - the upload form, with any flashed message.
pub async fn batch_form(Query(params): Query<BatchParams>) -> Html<String> {
    let messages: Vec<String> = params.flash.into_iter().collect();
    Html(views::batch_page(&messages))
}

/// `POST /batch` - run the whole uploaded CSV through the model and
/// return it with `Prediction` and `Probability` columns appended.
pub async fn batch_predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadUpload(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadUpload(e.to_string()))?;
            upload = Some((filename, data.to_vec()));
        }
    }

    // Mirror the form-level check: an absent part and an empty filename
    // both count as "no file selected".
    let data = match upload {
        Some((filename, data)) if !filename.is_empty() => data,
        _ => return Ok(Redirect::to("/batch?flash=No+file+selected").into_response()),
    };

    let mut frame = Frame::from_csv(data.as_slice())?;
    let predictions = state.model.predict_frame(&frame)?;

    let labels = predictions.iter().map(|p| p.label.to_string()).collect();
    let probabilities = predictions
        .iter()
        .map(|p| format!("{:.6}", p.probability))
        .collect();
    frame.push_column("Prediction", labels);
    frame.push_column("Probability", probabilities);

    let csv = frame.to_csv()?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"batch_predictions.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
