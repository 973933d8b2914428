use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docroute::application::ports::StagingStore;
use docroute::application::services::{ClassificationService, ClassifierGateway};
use docroute::infrastructure::llm::OpenAiClient;
use docroute::infrastructure::observability::{TracingConfig, init_tracing};
use docroute::infrastructure::storage::LocalStagingStore;
use docroute::infrastructure::text_processing::CompositeFileLoader;
use docroute::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let mut settings = Settings::load(environment).context("Failed to load settings")?;

    if settings.llm.api_key.is_empty() {
        settings.llm.api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    }

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No LLM API key configured, classification requests will fail");
    }

    let llm_client = Arc::new(OpenAiClient::new(&settings.llm)?);
    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let staging_store: Arc<dyn StagingStore> = Arc::new(
        LocalStagingStore::new(PathBuf::from(&settings.upload.staging_dir))
            .context("Failed to prepare staging directory")?,
    );

    let gateway = ClassifierGateway::new(
        llm_client,
        settings.classification.max_concurrent_requests,
    );

    let classification_service = Arc::new(ClassificationService::new(
        file_loader,
        Arc::clone(&staging_store),
        gateway,
        settings.routing_advisor(),
        settings.classification_policy(),
    ));

    let state = AppState {
        classification_service,
        staging_store,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        %addr,
        model = %settings.llm.model,
        max_text_chars = settings.classification.max_text_chars,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
