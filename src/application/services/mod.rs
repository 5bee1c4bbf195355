// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            newsletter::NewsletterService, posts::PostCommandService,
            subscribers::SubscriberCommandService,
        },
        ports::{digest::ContentDigest, mailer::Mailer, time::Clock},
        queries::{
            delivery::DeliveryQueryService, posts::PostQueryService,
            subscribers::SubscriberQueryService,
        },
    },
    domain::{
        delivery::DeliveryLogRepository,
        post::{PostReadRepository, PostWriteRepository, services::SlugService},
        subscriber::SubscriberRepository,
    },
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub subscriber_commands: Arc<SubscriberCommandService>,
    pub subscriber_queries: Arc<SubscriberQueryService>,
    pub newsletter: Arc<NewsletterService>,
    pub delivery_queries: Arc<DeliveryQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        subscriber_repo: Arc<dyn SubscriberRepository>,
        delivery_repo: Arc<dyn DeliveryLogRepository>,
        mailer: Arc<dyn Mailer>,
        digest: Arc<dyn ContentDigest>,
        clock: Arc<dyn Clock>,
        public_base_url: String,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&digest),
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        let subscriber_commands = Arc::new(SubscriberCommandService::new(
            Arc::clone(&subscriber_repo),
            Arc::clone(&clock),
        ));

        let subscriber_queries =
            Arc::new(SubscriberQueryService::new(Arc::clone(&subscriber_repo)));

        let newsletter = Arc::new(NewsletterService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&subscriber_repo),
            Arc::clone(&delivery_repo),
            Arc::clone(&mailer),
            Arc::clone(&clock),
            public_base_url,
        ));

        let delivery_queries = Arc::new(DeliveryQueryService::new(Arc::clone(&delivery_repo)));

        Self {
            post_commands,
            post_queries,
            subscriber_commands,
            subscriber_queries,
            newsletter,
            delivery_queries,
        }
    }
}
