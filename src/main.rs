use anyhow::{Context, Result};
use blog_admin::{
    application::{ports::time::Clock, services::ApplicationServices},
    config::AppConfig,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
        category::CategoryRepository,
        comment::CommentRepository,
    },
    infrastructure::{
        database,
        repositories::{
            MongoArticleRepository, MongoAuthorRepository, MongoCategoryRepository,
            MongoCommentRepository,
        },
        time::SystemClock,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let db = database::connect(config.mongodb_uri(), config.database_name())
        .await
        .context("connecting to MongoDB")?;
    tracing::info!(database = config.database_name(), "connected to MongoDB");

    let author_repo: Arc<dyn AuthorRepository> = Arc::new(MongoAuthorRepository::new(&db));
    let category_repo: Arc<dyn CategoryRepository> = Arc::new(MongoCategoryRepository::new(&db));
    let articles = Arc::new(MongoArticleRepository::new(&db));
    let article_write_repo: Arc<dyn ArticleWriteRepository> = articles.clone();
    let article_read_repo: Arc<dyn ArticleReadRepository> = articles;
    let comment_repo: Arc<dyn CommentRepository> = Arc::new(MongoCommentRepository::new(&db));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        author_repo,
        category_repo,
        article_write_repo,
        article_read_repo,
        comment_repo,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,mongodb=warn".to_string());

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
