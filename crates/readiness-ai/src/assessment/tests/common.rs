use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{AnswerValue, AssessmentSubmission};
use crate::assessment::notify::{MailError, MailGateway, NotificationMessage};
use crate::assessment::router::assessment_router;
use crate::assessment::service::AssessmentService;

pub(super) fn single(token: &str) -> AnswerValue {
    AnswerValue::Single(token.to_string())
}

pub(super) fn multi(tokens: &[&str]) -> AnswerValue {
    AnswerValue::Multi(tokens.iter().map(|token| token.to_string()).collect())
}

/// Fully-populated four-area submission used across the suite. Expected
/// normalized scores: marketing 100, customer 100, process 91,
/// analytics 100 (raw 105/105/105/125 against maxima 105/105/115/115).
pub(super) fn submission() -> AssessmentSubmission {
    let mut submission = AssessmentSubmission {
        name: Some("Jordan Reyes".to_string()),
        email: Some("jordan.reyes@example.com".to_string()),
        phone: Some("555-0132".to_string()),
        company: Some("Reyes Logistics".to_string()),
        ..AssessmentSubmission::default()
    };
    submission
        .answers
        .insert("employees".to_string(), single("51-200"));
    submission
        .answers
        .insert("industry".to_string(), single("technology"));
    submission.answers.insert(
        "current_tools".to_string(),
        multi(&["crm", "analytics", "cloud"]),
    );
    submission
        .answers
        .insert("budget".to_string(), single("10k-25k"));
    submission
        .answers
        .insert("timeline".to_string(), single("immediately"));
    submission.answers.insert(
        "goals".to_string(),
        multi(&["data-insights", "automation"]),
    );
    submission.answers.insert(
        "additional_info".to_string(),
        single("Interested in a pilot next quarter"),
    );
    submission
}

#[derive(Default, Clone)]
pub(super) struct RecordingMailer {
    messages: Arc<Mutex<Vec<NotificationMessage>>>,
}

impl RecordingMailer {
    pub(super) fn messages(&self) -> Vec<NotificationMessage> {
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

pub(super) struct FailingMailer;

impl MailGateway for FailingMailer {
    fn send(&self, _message: &NotificationMessage) -> Result<(), MailError> {
        Err(MailError::Transport("relay offline".to_string()))
    }
}

pub(super) fn build_service() -> (AssessmentService<RecordingMailer>, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    let service = AssessmentService::new(Some(mailer.clone()));
    (service, mailer)
}

pub(super) fn build_unconfigured_service() -> AssessmentService<RecordingMailer> {
    AssessmentService::new(None)
}

pub(super) fn build_failing_service() -> AssessmentService<FailingMailer> {
    AssessmentService::new(Some(Arc::new(FailingMailer)))
}

pub(super) fn router_with(
    service: AssessmentService<RecordingMailer>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
