use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four business functional areas scored independently by the
/// assessment. Declaration order doubles as the tie-break order when ranking
/// areas by priority, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceArea {
    MarketingSales,
    CustomerService,
    BusinessProcess,
    DataAnalytics,
}

impl ServiceArea {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::MarketingSales,
            Self::CustomerService,
            Self::BusinessProcess,
            Self::DataAnalytics,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MarketingSales => "Marketing & Sales AI Solutions",
            Self::CustomerService => "Customer Service Automation",
            Self::BusinessProcess => "Business Process Automation",
            Self::DataAnalytics => "Data Analytics & Business Intelligence",
        }
    }

    /// Weight of this area in the overall readiness score, in basis points
    /// out of 100. The four weights sum to exactly 100 so the weighted mean
    /// stays an exact integer computation.
    pub const fn weight_points(self) -> u32 {
        match self {
            Self::MarketingSales => 25,
            Self::CustomerService => 25,
            Self::BusinessProcess => 30,
            Self::DataAnalytics => 20,
        }
    }
}

/// A submitted answer: a single option token, a multi-select token list, or
/// any other JSON shape a client happened to send. Scoring only reads the
/// first two; everything else falls through the same silent-ignore path as
/// unknown question identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
    Other(serde_json::Value),
}

impl AnswerValue {
    pub fn as_token(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(token) => Some(token.as_str()),
            _ => None,
        }
    }

    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Multi(tokens) => Some(tokens.as_slice()),
            _ => None,
        }
    }
}

/// Question identifier to submitted value(s). Supplied once per assessment
/// request and never mutated.
pub type AnswerSet = BTreeMap<String, AnswerValue>;

/// Incoming assessment body. Identity fields are lifted out for validation;
/// every other key lands in the flattened answer set so partially-filled or
/// over-filled forms deserialize without error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(flatten)]
    pub answers: AnswerSet,
}

impl AssessmentSubmission {
    /// Validates the required identity fields and returns the contact block
    /// used for reports and notifications.
    pub fn contact(&self) -> Result<ContactDetails, ValidationError> {
        let name = required_field("name", &self.name)?;
        let email = required_field("email", &self.email)?;
        let company = required_field("company", &self.company)?;

        Ok(ContactDetails {
            name,
            email,
            company,
            phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        })
    }

    /// Convenience lookup for single-token answers (industry, budget, ...).
    pub fn answer_token(&self, question: &str) -> Option<&str> {
        self.answers.get(question).and_then(AnswerValue::as_token)
    }

    /// Convenience lookup for multi-select answers (current_tools, goals).
    pub fn answer_tokens(&self, question: &str) -> Option<&[String]> {
        self.answers.get(question).and_then(AnswerValue::as_tokens)
    }
}

fn required_field(field: &'static str, value: &Option<String>) -> Result<String, ValidationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(ValidationError::MissingField(field))
}

/// Submitter identity carried into reports and notification emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Caller-facing validation failure; never logged as a server fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Encodes an email address into the URL-safe identifier used by the report
/// endpoint.
pub fn encode_email_identifier(email: &str) -> String {
    email.replace('@', "_at_").replace('.', "_dot_")
}

/// Reverses [`encode_email_identifier`].
pub fn decode_email_identifier(identifier: &str) -> String {
    identifier.replace("_at_", "@").replace("_dot_", ".")
}
