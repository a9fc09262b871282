//! Integration specifications for the assessment intake workflow.
//!
//! Scenarios exercise the public service facade and HTTP router end to end:
//! scoring, validation, recommendation payloads, and the notification
//! boundary, without reaching into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use readiness_ai::assessment::{
        assessment_router, AssessmentService, MailError, MailGateway, NotificationMessage,
    };

    #[derive(Default, Clone)]
    pub struct RecordingMailer {
        messages: Arc<Mutex<Vec<NotificationMessage>>>,
    }

    impl RecordingMailer {
        pub fn messages(&self) -> Vec<NotificationMessage> {
            self.messages.lock().expect("mailer mutex poisoned").clone()
        }
    }

    impl MailGateway for RecordingMailer {
        fn send(&self, message: &NotificationMessage) -> Result<(), MailError> {
            self.messages
                .lock()
                .expect("mailer mutex poisoned")
                .push(message.clone());
            Ok(())
        }
    }

    pub struct UnreachableRelayMailer;

    impl MailGateway for UnreachableRelayMailer {
        fn send(&self, _message: &NotificationMessage) -> Result<(), MailError> {
            Err(MailError::Transport(
                "connection refused (relay unreachable)".to_string(),
            ))
        }
    }

    pub fn recording_router() -> (axum::Router, Arc<RecordingMailer>) {
        let mailer = Arc::new(RecordingMailer::default());
        let service = AssessmentService::new(Some(mailer.clone()));
        (assessment_router(Arc::new(service)), mailer)
    }

    pub fn failing_router() -> axum::Router {
        let service = AssessmentService::new(Some(Arc::new(UnreachableRelayMailer)));
        assessment_router(Arc::new(service))
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use readiness_ai::assessment::{AnswerSet, AnswerValue, ScoreCalculator};

fn json_request(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn full_payload() -> Value {
    json!({
        "name": "Priya Shah",
        "email": "priya@shahretail.com",
        "phone": "555-0199",
        "company": "Shah Retail Group",
        "employees": "200+",
        "industry": "retail",
        "current_tools": ["crm", "analytics", "email-marketing"],
        "budget": "25k+",
        "timeline": "1-3-months",
        "goals": ["customer-experience", "data-insights"],
        "additional_info": "Two storefronts plus e-commerce",
    })
}

#[tokio::test]
async fn full_assessment_round_trip() {
    let (router, mailer) = common::recording_router();

    let response = router
        .oneshot(json_request("/api/submit-assessment", full_payload()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["email_sent"], json!(true));
    assert_eq!(
        body["report_url"],
        json!("/api/report/priya_at_shahretail_dot_com")
    );

    let overall = body["overall_score"].as_u64().expect("overall score");
    assert!(overall <= 100);

    for area in [
        "marketing_sales",
        "customer_service",
        "business_process",
        "data_analytics",
    ] {
        let score = body["service_area_scores"][area]
            .as_u64()
            .expect("area score");
        assert!(score <= 100, "{area} out of range: {score}");

        let recommendation = &body["recommendations"][area];
        assert!(recommendation["level"].is_string());
        assert!(recommendation["priority"].is_string());
        assert_eq!(
            recommendation["recommendations"]
                .as_array()
                .expect("action list")
                .len(),
            4
        );
    }

    let messages = mailer.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].subject.contains("New AI Assessment Submission"));
    assert!(messages[0].body.contains("Shah Retail Group"));
}

#[tokio::test]
async fn unreachable_relay_reports_email_not_sent() {
    let router = common::failing_router();

    let response = router
        .oneshot(json_request("/api/submit-assessment", full_payload()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["email_sent"], json!(false));
}

#[tokio::test]
async fn missing_fields_are_rejected_before_any_side_effect() {
    for field in ["name", "email", "company"] {
        let (router, mailer) = common::recording_router();

        let mut payload = full_payload();
        payload
            .as_object_mut()
            .expect("payload is an object")
            .remove(field);

        let response = router
            .oneshot(json_request("/api/submit-assessment", payload))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json_body(response).await;
        assert_eq!(
            body["error"],
            json!(format!("Missing required field: {field}"))
        );
        assert!(body.get("overall_score").is_none());
        assert!(mailer.messages().is_empty(), "no email for missing {field}");
    }
}

#[tokio::test]
async fn legacy_form_with_no_recognized_answers_defaults_to_fifty() {
    let (router, _mailer) = common::recording_router();

    let payload = json!({
        "name": "Lee Okafor",
        "email": "lee@okafor.dev",
        "company": "Okafor Consulting",
        "how_did_you_hear": "podcast",
    });

    let response = router
        .oneshot(json_request("/submit-assessment", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["score"], json!(50));
}

#[test]
fn every_single_answer_combination_stays_in_bounds() {
    let calculator = ScoreCalculator::standard();

    for question in calculator.table().questions() {
        for (token, _) in &question.options {
            let mut answers = AnswerSet::new();
            answers.insert(
                question.id.to_string(),
                AnswerValue::Single((*token).to_string()),
            );
            let scores = calculator.score(&answers);
            for (area, score) in scores.entries() {
                assert!(score <= 100, "{:?} out of range for {token}", area);
            }
        }
    }
}
