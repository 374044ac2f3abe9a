use std::sync::Arc;

use interview_assist::config::ServiceConfig;
use interview_assist::http::{AppState, routes};
use interview_assist::interview::Engine;
use interview_assist::llm::speech::SpeechClient;
use interview_assist::llm::{LlmConfig, LlmProvider, OpenAiProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export OPENAI_API_KEY=sk-...");
        std::process::exit(1);
    });

    eprintln!("🎓 Interview Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   API:   http://0.0.0.0:{}/next-question", config.port);

    let llm: Arc<dyn LlmProvider> = Arc::new(OpenAiProvider::new(&LlmConfig {
        api_key: config.api_key.clone(),
        model: config.model.clone(),
    }));
    let engine = Arc::new(Engine::new(llm));
    let speech = Arc::new(SpeechClient::new(config.api_key.clone()));

    let app = routes(AppState { engine, speech });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Interview server started");
    axum::serve(listener, app).await?;

    Ok(())
}
