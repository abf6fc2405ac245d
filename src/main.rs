use anyhow::{Context, Result};
use lingua_press::{config::Config, i18n, server};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lingua_press=info".parse()?),
        )
        .init();

    info!("Starting routing service");

    let config = Config::from_env()?;
    info!(
        "Canonical base {} (domain {}), {:?} environment",
        config.base_url, config.base_domain, config.environment
    );

    let lint = i18n::lint_all();
    for error in &lint.errors {
        warn!("Translation table error: {}", error);
    }
    for warning in &lint.warnings {
        warn!("Translation table warning: {}", warning);
    }
    info!(
        "Loaded {} categories and {} routes across {} locales",
        i18n::categories().entries().len(),
        i18n::routes().entries().len(),
        i18n::Locale::all_enabled().len()
    );

    let addr = format!("0.0.0.0:{}", config.port);
    let app = server::router(server::AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
