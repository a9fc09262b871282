use metrics_exporter_prometheus::PrometheusHandle;
use readiness_ai::assessment::{MailError, MailGateway, NotificationMessage, SmtpMailer};
use readiness_ai::config::MailConfig;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the SMTP mailer when the environment carries a complete
/// credential set. A rejected configuration disables notifications rather
/// than failing startup; the request path reports `email_sent: false`.
pub(crate) fn build_mailer(config: &MailConfig) -> Option<Arc<SmtpMailer>> {
    let sender = match config.sender() {
        Some(sender) => sender,
        None => {
            info!("mail credentials not configured; notifications disabled");
            return None;
        }
    };

    match SmtpMailer::from_sender(&sender) {
        Ok(mailer) => Some(Arc::new(mailer)),
        Err(err) => {
            warn!(error = %err, "mail configuration rejected; notifications disabled");
            None
        }
    }
}

/// In-memory mailer used by the CLI demo and route tests.
#[derive(Default, Clone)]
pub(crate) struct RecordingMailer {
    messages: Arc<Mutex<Vec<NotificationMessage>>>,
}

impl RecordingMailer {
    pub(crate) fn messages(&self) -> Vec<NotificationMessage> {
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
