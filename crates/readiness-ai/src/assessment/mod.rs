//! Business AI readiness assessment: answer scoring, recommendation lookup,
//! report assembly, and the owner-notification side effect.
//!
//! Every component here is a pure function of its input; the only shared
//! state is the read-only scoring and recommendation tables built once at
//! startup.

pub mod domain;
pub mod notify;
pub mod recommendation;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    decode_email_identifier, encode_email_identifier, AnswerSet, AnswerValue,
    AssessmentSubmission, ContactDetails, ServiceArea, ValidationError,
};
pub use notify::{MailError, MailGateway, NotificationMessage, SmtpMailer};
pub use recommendation::{AreaRecommendation, Priority, ReadinessTier};
pub use report::{AssessmentReport, RankedArea};
pub use router::assessment_router;
pub use scoring::{ScoreCalculator, ScoringTable, ServiceAreaScores};
pub use service::{AssessmentService, LegacyOutcome, SubmissionOutcome};
