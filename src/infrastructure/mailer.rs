// src/infrastructure/mailer.rs
use crate::application::ports::mailer::{MailError, Mailer, OutgoingEmail};
use crate::domain::subscriber::EmailAddress;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Mail-API client speaking the Postmark-style JSON wire shape.
#[derive(Clone)]
pub struct HttpApiMailer {
    http_client: reqwest::Client,
    base_url: String,
    sender: EmailAddress,
    authorization_token: String,
}

impl HttpApiMailer {
    pub fn new(
        base_url: String,
        sender: EmailAddress,
        authorization_token: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            sender,
            authorization_token,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}

#[async_trait]
impl Mailer for HttpApiMailer {
    async fn send(&self, email: OutgoingEmail<'_>) -> Result<(), MailError> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_str(),
            to: email.to.as_str(),
            subject: email.subject,
            html_body: email.html_body,
        };

        let response = self
            .http_client
            .post(&url)
            .header("X-Postmark-Server-Token", &self.authorization_token)
            .json(&request_body)
            .send()
            .await
            .map_err(|err| MailError::Transport(err.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        let detail = if detail.trim().is_empty() {
            format!("provider returned {status}")
        } else {
            format!("provider returned {status}: {detail}")
        };
        Err(MailError::Rejected(detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn mailer(base_url: String) -> HttpApiMailer {
        HttpApiMailer::new(
            base_url,
            EmailAddress::new("newsletter@institute.example").unwrap(),
            "secret-token".into(),
            Duration::from_millis(500),
        )
        .unwrap()
    }

    fn recipient() -> EmailAddress {
        EmailAddress::new("reader@example.com").unwrap()
    }

    struct SendEmailBodyMatcher;

    impl wiremock::Match for SendEmailBodyMatcher {
        fn matches(&self, request: &Request) -> bool {
            let Ok(body) = serde_json::from_slice::<serde_json::Value>(&request.body) else {
                return false;
            };
            body.get("From").is_some()
                && body.get("To").is_some()
                && body.get("Subject").is_some()
                && body.get("HtmlBody").is_some()
        }
    }

    #[tokio::test]
    async fn sends_expected_request_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/email"))
            .and(header_exists("X-Postmark-Server-Token"))
            .and(header("Content-Type", "application/json"))
            .and(SendEmailBodyMatcher)
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let result = mailer(server.uri())
            .send(OutgoingEmail {
                to: &recipient(),
                subject: "subject",
                html_body: "<p>body</p>",
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_a_rejection_with_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = mailer(server.uri())
            .send(OutgoingEmail {
                to: &recipient(),
                subject: "subject",
                html_body: "<p>body</p>",
            })
            .await;

        match result {
            Err(MailError::Rejected(msg)) => assert!(msg.contains("500")),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_provider_times_out_as_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .expect(1)
            .mount(&server)
            .await;

        let result = mailer(server.uri())
            .send(OutgoingEmail {
                to: &recipient(),
                subject: "subject",
                html_body: "<p>body</p>",
            })
            .await;

        assert!(matches!(result, Err(MailError::Transport(_))));
    }
}
