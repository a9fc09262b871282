use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{
    decode_email_identifier, encode_email_identifier, AnswerValue, AssessmentSubmission,
    ServiceArea, ValidationError,
};
use super::notify::{
    legacy_notification_message, notification_message, MailGateway, NotificationMessage,
};
use super::recommendation::{recommendations_for_scores, AreaRecommendation};
use super::report::{overall_score, AssessmentReport};
use super::scoring::{legacy, ScoreCalculator, ServiceAreaScores};

/// Result of a four-area submission; everything the API response needs.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub overall_score: u8,
    pub service_area_scores: ServiceAreaScores,
    pub recommendations: BTreeMap<ServiceArea, AreaRecommendation>,
    pub report_url: String,
    pub email_sent: bool,
}

/// Result of a legacy single-score submission.
#[derive(Debug, Clone, Serialize)]
pub struct LegacyOutcome {
    pub score: u8,
    pub recommendation: &'static str,
    pub email_sent: bool,
}

/// Service composing validation, scoring, recommendation lookup, and the
/// notification side effect. The mailer is optional: without configuration
/// every outcome simply reports `email_sent: false`.
pub struct AssessmentService<M> {
    calculator: ScoreCalculator,
    mailer: Option<Arc<M>>,
}

impl<M> AssessmentService<M>
where
    M: MailGateway + 'static,
{
    pub fn new(mailer: Option<Arc<M>>) -> Self {
        Self {
            calculator: ScoreCalculator::standard(),
            mailer,
        }
    }

    /// Scores a four-area submission. The response payload is fully
    /// computed before the notification is attempted, so a relay failure
    /// can only ever flip `email_sent` to false.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<SubmissionOutcome, ValidationError> {
        let contact = submission.contact()?;

        let scores = self.calculator.score(&submission.answers);
        let overall = overall_score(&scores);
        let recommendations = recommendations_for_scores(&scores);
        let report_url = format!("/api/report/{}", encode_email_identifier(&contact.email));

        let message =
            notification_message(&contact, &submission.answers, overall, &scores, Local::now());
        let email_sent = self.dispatch(message);

        info!(
            company = %contact.company,
            overall_score = overall,
            email_sent,
            "assessment scored"
        );

        Ok(SubmissionOutcome {
            overall_score: overall,
            service_area_scores: scores,
            recommendations,
            report_url,
            email_sent,
        })
    }

    /// Scores a legacy-form submission through the flat single-score path.
    pub fn submit_legacy(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<LegacyOutcome, ValidationError> {
        let contact = submission.contact()?;

        let score = legacy::legacy_score(&submission.answers);
        let recommendation = legacy::legacy_recommendation(score);

        let message = legacy_notification_message(&contact, score, recommendation, Local::now());
        let email_sent = self.dispatch(message);

        info!(
            company = %contact.company,
            score,
            email_sent,
            "legacy assessment scored"
        );

        Ok(LegacyOutcome {
            score,
            recommendation,
            email_sent,
        })
    }

    /// Assembles the demo report served by `GET /api/report/{identifier}`.
    /// With no persistence layer, the identifier only supplies the email;
    /// the answers are a fixed representative sample.
    pub fn sample_report(&self, email_identifier: &str) -> AssessmentReport {
        let mut email = decode_email_identifier(email_identifier);
        if email.trim().is_empty() {
            email = "sample@example.com".to_string();
        }
        let submission = sample_submission(email);
        let contact = submission
            .contact()
            .expect("sample submission carries all required fields");
        let scores = self.calculator.score(&submission.answers);
        AssessmentReport::assemble(&submission, contact, scores, Local::now().date_naive())
    }

    fn dispatch(&self, message: NotificationMessage) -> bool {
        let Some(mailer) = &self.mailer else {
            info!("mail not configured; skipping notification");
            return false;
        };

        match mailer.send(&message) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "notification dispatch failed");
                false
            }
        }
    }
}

fn sample_submission(email: String) -> AssessmentSubmission {
    let mut submission = AssessmentSubmission {
        name: Some("Sample User".to_string()),
        email: Some(email),
        phone: None,
        company: Some("Sample Company".to_string()),
        ..AssessmentSubmission::default()
    };
    submission.answers.insert(
        "employees".to_string(),
        AnswerValue::Single("11-50".to_string()),
    );
    submission.answers.insert(
        "industry".to_string(),
        AnswerValue::Single("retail".to_string()),
    );
    submission.answers.insert(
        "current_tools".to_string(),
        AnswerValue::Multi(vec!["crm".to_string(), "analytics".to_string()]),
    );
    submission.answers.insert(
        "budget".to_string(),
        AnswerValue::Single("5k-10k".to_string()),
    );
    submission.answers.insert(
        "timeline".to_string(),
        AnswerValue::Single("1-3-months".to_string()),
    );
    submission.answers.insert(
        "goals".to_string(),
        AnswerValue::Multi(vec![
            "customer-experience".to_string(),
            "automation".to_string(),
        ]),
    );
    submission
}
