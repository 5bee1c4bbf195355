// tests/support/mocks/mailer.rs
use async_trait::async_trait;
use newsdesk_core::application::ports::mailer::{MailError, Mailer, OutgoingEmail};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Mailer double that fails for a scripted set of addresses and records
/// every attempted send.
#[derive(Default)]
pub struct ScriptedMailer {
    fail_for: HashSet<String>,
    pub attempts: Mutex<Vec<SentEmail>>,
}

impl ScriptedMailer {
    pub fn failing_for(addresses: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            fail_for: addresses.into_iter().map(str::to_owned).collect(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempted_addresses(&self) -> Vec<String> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|email| email.to.clone())
            .collect()
    }
}

#[async_trait]
impl Mailer for ScriptedMailer {
    async fn send(&self, email: OutgoingEmail<'_>) -> Result<(), MailError> {
        self.attempts.lock().unwrap().push(SentEmail {
            to: email.to.as_str().to_owned(),
            subject: email.subject.to_owned(),
            html_body: email.html_body.to_owned(),
        });

        if self.fail_for.contains(email.to.as_str()) {
            Err(MailError::Rejected("mailbox unavailable".into()))
        } else {
            Ok(())
        }
    }
}
