use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::AssessmentSubmission;
use super::notify::MailGateway;
use super::report::html;
use super::service::AssessmentService;

/// Router builder exposing the assessment HTTP surface.
pub fn assessment_router<M>(service: Arc<AssessmentService<M>>) -> Router
where
    M: MailGateway + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/submit-assessment", post(submit_handler::<M>))
        .route("/submit-assessment", post(legacy_submit_handler::<M>))
        .route("/api/report/:email_identifier", get(report_handler::<M>))
        .with_state(service)
}

pub(crate) async fn submit_handler<M>(
    State(service): State<Arc<AssessmentService<M>>>,
    body: Option<Json<AssessmentSubmission>>,
) -> Response
where
    M: MailGateway + 'static,
{
    let Some(Json(submission)) = body else {
        return missing_body_response();
    };

    match service.submit(submission) {
        Ok(outcome) => {
            let payload = json!({
                "success": true,
                "overall_score": outcome.overall_score,
                "service_area_scores": outcome.service_area_scores,
                "recommendations": outcome.recommendations,
                "report_url": outcome.report_url,
                "message": "Assessment submitted successfully",
                "email_sent": outcome.email_sent,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => validation_response(err),
    }
}

pub(crate) async fn legacy_submit_handler<M>(
    State(service): State<Arc<AssessmentService<M>>>,
    body: Option<Json<AssessmentSubmission>>,
) -> Response
where
    M: MailGateway + 'static,
{
    let Some(Json(submission)) = body else {
        return missing_body_response();
    };

    match service.submit_legacy(submission) {
        Ok(outcome) => {
            let payload = json!({
                "success": true,
                "score": outcome.score,
                "message": "Assessment submitted successfully!",
                "recommendation": outcome.recommendation,
                "email_sent": outcome.email_sent,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => validation_response(err),
    }
}

pub(crate) async fn report_handler<M>(
    State(service): State<Arc<AssessmentService<M>>>,
    Path(email_identifier): Path<String>,
) -> Html<String>
where
    M: MailGateway + 'static,
{
    let report = service.sample_report(&email_identifier);
    Html(html::render(&report))
}

pub(crate) async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Local::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn index_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "AI Readiness Assessment API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "submit_assessment": "/api/submit-assessment",
            "legacy_submit_assessment": "/submit-assessment",
            "get_report": "/api/report/<email_identifier>",
            "health_check": "/api/health",
        },
    }))
}

fn missing_body_response() -> Response {
    let payload = json!({ "error": "No data provided" });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn validation_response(err: super::domain::ValidationError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
