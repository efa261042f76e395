use anyhow::Context;
use orglens_classify::Pipeline;
use orglens_common::observability::{init_logging, LogConfig};
use orglens_config::ServiceConfigLoader;
use orglens_http::PageFetcher;
use orglens_server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cfg = ServiceConfigLoader::new()
        .with_file("orglens.yaml")
        .load()
        .context("invalid configuration (is ORGLENS_SECRET_KEY set?)")?;

    init_logging(LogConfig {
        app_name: "orglens",
        emit_stderr: true,
        ..LogConfig::default()
    })?;

    // Model load is fail-fast: a missing or broken model aborts startup
    // instead of failing per request.
    let extractor = orglens_ner::load(&cfg.model_dir)
        .context("entity-recognition model unavailable")?;

    let state = AppState {
        secret: cfg.secret_key.clone(),
        pipeline: Pipeline::new(PageFetcher::new()?, extractor),
    };

    let listener = tokio::net::TcpListener::bind(&cfg.bind)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind))?;
    tracing::info!(bind = %cfg.bind, "server.listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
