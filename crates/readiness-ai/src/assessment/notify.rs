use super::domain::{AnswerSet, AnswerValue, ContactDetails};
use super::scoring::ServiceAreaScores;
use crate::config::MailSender;
use chrono::{DateTime, Local};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::fmt::Write as _;
use std::time::Duration;

/// How long a single relay attempt may block the request before the
/// notification is written off as failed.
const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Rendered notification ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

/// Notification dispatch error. Always recovered by the caller; surfaces to
/// API clients only as `email_sent: false`.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid mail address '{0}'")]
    InvalidAddress(String),
    #[error("mail relay rejected configuration: {0}")]
    Relay(String),
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}

/// Trait describing the outbound notification hook so the service can be
/// exercised without a live relay.
pub trait MailGateway: Send + Sync {
    fn send(&self, message: &NotificationMessage) -> Result<(), MailError>;
}

/// Thin wrapper around lettre's blocking SMTP transport. Built only when
/// the environment supplies a complete credential set.
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn from_sender(sender: &MailSender) -> Result<Self, MailError> {
        let from = parse_mailbox(&sender.email_user)?;
        let to = parse_mailbox(&sender.recipient)?;

        let transport = SmtpTransport::starttls_relay(&sender.smtp_server)
            .map_err(|err| MailError::Relay(err.to_string()))?
            .port(sender.smtp_port)
            .credentials(Credentials::new(
                sender.email_user.clone(),
                sender.email_password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

impl MailGateway for SmtpMailer {
    fn send(&self, message: &NotificationMessage) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|err| MailError::Transport(err.to_string()))?;

        self.transport
            .send(&email)
            .map(|_| ())
            .map_err(|err| MailError::Transport(err.to_string()))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse()
        .map_err(|_| MailError::InvalidAddress(address.to_string()))
}

/// Builds the owner notification for a four-area submission.
pub fn notification_message(
    contact: &ContactDetails,
    answers: &AnswerSet,
    overall_score: u8,
    scores: &ServiceAreaScores,
    submitted_at: DateTime<Local>,
) -> NotificationMessage {
    let subject = format!("New AI Assessment Submission - Overall Score: {overall_score}%");

    let mut body = String::new();
    writeln!(body, "New AI Assessment Submission").expect("write heading");
    body.push('\n');
    writeln!(body, "Contact Information:").expect("write section");
    writeln!(body, "Name: {}", contact.name).expect("write name");
    writeln!(body, "Email: {}", contact.email).expect("write email");
    writeln!(
        body,
        "Phone: {}",
        contact.phone.as_deref().unwrap_or("Not provided")
    )
    .expect("write phone");
    writeln!(body, "Company: {}", contact.company).expect("write company");
    body.push('\n');
    writeln!(body, "Assessment Details:").expect("write section");
    writeln!(body, "Overall AI Readiness Score: {overall_score}%").expect("write overall");
    writeln!(body, "Company Size: {}", answer_display(answers, "employees"))
        .expect("write company size");
    writeln!(body, "Industry: {}", answer_display(answers, "industry")).expect("write industry");
    writeln!(
        body,
        "Current Tools: {}",
        answer_display(answers, "current_tools")
    )
    .expect("write tools");
    writeln!(body, "Budget: {}", answer_display(answers, "budget")).expect("write budget");
    writeln!(body, "Timeline: {}", answer_display(answers, "timeline")).expect("write timeline");
    writeln!(body, "Goals: {}", answer_display(answers, "goals")).expect("write goals");
    body.push('\n');
    writeln!(body, "Service Area Breakdown:").expect("write section");
    writeln!(
        body,
        "- Marketing & Sales AI: {}%",
        scores.marketing_sales
    )
    .expect("write marketing");
    writeln!(
        body,
        "- Customer Service Automation: {}%",
        scores.customer_service
    )
    .expect("write service");
    writeln!(
        body,
        "- Business Process Automation: {}%",
        scores.business_process
    )
    .expect("write process");
    writeln!(
        body,
        "- Data Analytics & BI: {}%",
        scores.data_analytics
    )
    .expect("write analytics");
    body.push('\n');
    writeln!(
        body,
        "Additional Info: {}",
        answer_display(answers, "additional_info")
    )
    .expect("write additional info");
    body.push('\n');
    writeln!(
        body,
        "Submitted: {}",
        submitted_at.format("%Y-%m-%d %H:%M:%S")
    )
    .expect("write timestamp");

    NotificationMessage { subject, body }
}

/// Builds the owner notification for the legacy single-score path.
pub fn legacy_notification_message(
    contact: &ContactDetails,
    score: u8,
    recommendation: &str,
    submitted_at: DateTime<Local>,
) -> NotificationMessage {
    let subject = format!(
        "New AI Assessment: {score}% Readiness - {}",
        contact.name
    );

    let mut body = String::new();
    writeln!(body, "New AI Assessment Submission").expect("write heading");
    body.push('\n');
    writeln!(body, "Contact Information:").expect("write section");
    writeln!(body, "Name: {}", contact.name).expect("write name");
    writeln!(body, "Email: {}", contact.email).expect("write email");
    writeln!(
        body,
        "Phone: {}",
        contact.phone.as_deref().unwrap_or("Not provided")
    )
    .expect("write phone");
    writeln!(body, "Company: {}", contact.company).expect("write company");
    body.push('\n');
    writeln!(body, "AI Readiness Score: {score}%").expect("write score");
    body.push('\n');
    writeln!(body, "Recommendation:").expect("write section");
    writeln!(body, "{recommendation}").expect("write recommendation");
    body.push('\n');
    writeln!(
        body,
        "Submitted: {}",
        submitted_at.format("%Y-%m-%d %H:%M:%S")
    )
    .expect("write timestamp");

    NotificationMessage { subject, body }
}

fn answer_display(answers: &AnswerSet, question: &str) -> String {
    match answers.get(question) {
        Some(AnswerValue::Single(token)) if !token.trim().is_empty() => token.clone(),
        Some(AnswerValue::Multi(tokens)) if !tokens.is_empty() => tokens.join(", "),
        _ => "Not provided".to_string(),
    }
}
