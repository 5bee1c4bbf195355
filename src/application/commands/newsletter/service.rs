// src/application/commands/newsletter/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::DispatchOutcome,
        error::ApplicationResult,
        ports::{
            mailer::{Mailer, OutgoingEmail},
            time::Clock,
        },
    },
    domain::{
        delivery::{DeliveryLogRepository, DeliveryStatus, NewDeliveryRecord},
        post::{PostId, PostReadRepository},
        subscriber::SubscriberRepository,
    },
};

pub struct NewsletterService {
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) subscriber_repo: Arc<dyn SubscriberRepository>,
    pub(super) delivery_repo: Arc<dyn DeliveryLogRepository>,
    pub(super) mailer: Arc<dyn Mailer>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) public_base_url: String,
}

impl NewsletterService {
    pub fn new(
        post_repo: Arc<dyn PostReadRepository>,
        subscriber_repo: Arc<dyn SubscriberRepository>,
        delivery_repo: Arc<dyn DeliveryLogRepository>,
        mailer: Arc<dyn Mailer>,
        clock: Arc<dyn Clock>,
        public_base_url: String,
    ) -> Self {
        Self {
            post_repo,
            subscriber_repo,
            delivery_repo,
            mailer,
            clock,
            public_base_url: public_base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Sends one message to every active subscriber, one at a time.
    ///
    /// Each recipient is isolated: a mailer failure is recorded in the
    /// delivery log and the loop moves on. Exactly one log row is written
    /// per recipient per run. Repository errors are fatal and propagate.
    pub(super) async fn dispatch(
        &self,
        post_id: Option<PostId>,
        subject: &str,
        html_body: &str,
    ) -> ApplicationResult<DispatchOutcome> {
        let recipients = self.subscriber_repo.list_active().await?;
        if recipients.is_empty() {
            tracing::info!(subject, "newsletter dispatch skipped, no active subscribers");
            return Ok(DispatchOutcome::NoRecipients);
        }

        tracing::info!(
            subject,
            recipients = recipients.len(),
            "dispatching newsletter"
        );

        let mut sent = 0u32;
        let mut failed = 0u32;

        for subscriber in recipients {
            let outcome = self
                .mailer
                .send(OutgoingEmail {
                    to: &subscriber.email,
                    subject,
                    html_body,
                })
                .await;

            let record = match outcome {
                Ok(()) => {
                    sent += 1;
                    NewDeliveryRecord {
                        email: subscriber.email,
                        post_id,
                        subject: subject.to_owned(),
                        status: DeliveryStatus::Sent,
                        error_message: None,
                        sent_at: self.clock.now(),
                    }
                }
                Err(err) => {
                    failed += 1;
                    tracing::warn!(
                        error = %err,
                        email = %subscriber.email,
                        "newsletter delivery failed"
                    );
                    NewDeliveryRecord {
                        email: subscriber.email,
                        post_id,
                        subject: subject.to_owned(),
                        status: DeliveryStatus::Failed,
                        error_message: Some(err.to_string()),
                        sent_at: self.clock.now(),
                    }
                }
            };

            self.delivery_repo.append(record).await?;
        }

        tracing::info!(subject, sent, failed, "newsletter dispatch completed");
        Ok(DispatchOutcome::Completed { sent, failed })
    }
}
