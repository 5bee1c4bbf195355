use newsdesk_core::application::{
    ports::{digest::ContentDigest, mailer::Mailer, time::Clock},
    services::ApplicationServices,
};
use newsdesk_core::config::AppConfig;
use newsdesk_core::domain::{
    delivery::DeliveryLogRepository,
    post::{PostReadRepository, PostWriteRepository},
    subscriber::{EmailAddress, SubscriberRepository},
};
use newsdesk_core::infrastructure::{
    database,
    digest::Sha256ContentDigest,
    mailer::HttpApiMailer,
    repositories::{
        PostgresDeliveryLogRepository, PostgresPostReadRepository, PostgresPostWriteRepository,
        PostgresSubscriberRepository,
    },
    time::SystemClock,
};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};

use anyhow::{Context, Result};
use axum::{ServiceExt, body::Body};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let subscriber_repo: Arc<dyn SubscriberRepository> =
        Arc::new(PostgresSubscriberRepository::new(pool.clone()));
    let delivery_repo: Arc<dyn DeliveryLogRepository> =
        Arc::new(PostgresDeliveryLogRepository::new(pool.clone()));

    let sender = EmailAddress::new(config.mail_sender())
        .map_err(|err| anyhow::anyhow!("invalid MAIL_SENDER: {err}"))?;
    let mailer: Arc<dyn Mailer> = Arc::new(
        HttpApiMailer::new(
            config.mail_api_url().to_owned(),
            sender,
            config.mail_api_token().to_owned(),
            config.mail_send_timeout(),
        )
        .context("failed to build mail client")?,
    );
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let digest: Arc<dyn ContentDigest> = Arc::new(Sha256ContentDigest);

    let services = Arc::new(ApplicationServices::new(
        post_write_repo,
        post_read_repo,
        subscriber_repo,
        delivery_repo,
        mailer,
        digest,
        clock,
        config.public_base_url().to_owned(),
    ));

    let state = HttpState { services };

    let app = build_router(state);
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
