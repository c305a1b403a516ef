// src/main.rs
use anyhow::Result;
use notelify_articles::{
    application::{
        ports::{logging::LogSink, time::Clock, util::ArticleIdGenerator},
        services::ApplicationServices,
    },
    config::{AppConfig, StorageBackend},
    domain::article::ArticleRepository,
    infrastructure::{
        database,
        logging::{FanoutLogSink, HttpLogSink, TracingLogSink},
        repositories::{
            InMemoryArticleRepository, PostgresArticleRepository, RedisArticleRepository,
        },
        retry::RetryPolicy,
        time::SystemClock,
        util::UuidArticleIdGenerator,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "articles.log";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();
    let _guard = init_tracing(config.as_ref().ok().and_then(AppConfig::log_dir));

    let result = match config {
        Ok(config) => bootstrap(config).await,
        Err(err) => Err(err.into()),
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap(config: AppConfig) -> Result<()> {
    tracing::info!(
        environment = %config.environment(),
        backend = ?config.backend(),
        table = config.article_table(),
        "starting article service"
    );

    let log_sink = build_log_sink(&config)?;
    let article_repo = build_repository(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn ArticleIdGenerator> = Arc::new(UuidArticleIdGenerator);

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        ids,
        clock,
        log_sink,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_log_sink(config: &AppConfig) -> Result<Arc<dyn LogSink>> {
    let tracing_sink: Arc<dyn LogSink> = Arc::new(TracingLogSink);
    let Some(url) = config.logger_url() else {
        return Ok(tracing_sink);
    };

    let http_sink = HttpLogSink::spawn(url)?;
    tracing::info!(collector = url, "forwarding service events to log collector");
    Ok(Arc::new(FanoutLogSink::new(vec![
        tracing_sink,
        Arc::new(http_sink),
    ])))
}

async fn build_repository(config: &AppConfig) -> Result<Arc<dyn ArticleRepository>> {
    let policy = RetryPolicy::new(config.connect_retries(), config.connect_retry_delay());

    let repo: Arc<dyn ArticleRepository> = match config.backend() {
        StorageBackend::Postgres => {
            let pool = database::init_pool(config.database(), policy).await?;
            Arc::new(PostgresArticleRepository::bootstrap(pool, config.article_table()).await?)
        }
        StorageBackend::Redis => Arc::new(
            RedisArticleRepository::connect(config.redis_url(), config.article_table(), policy)
                .await?,
        ),
        StorageBackend::Memory => {
            tracing::warn!("using in-memory article store; data is lost on exit");
            Arc::new(InMemoryArticleRepository::new())
        }
    };
    Ok(repo)
}

/// Stdout always; a daily-rolling file as well when `log_dir` is set. The
/// returned guard flushes the file writer and must outlive the server.
fn init_tracing(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer);

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
    guard
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
