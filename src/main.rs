use sonify::config::Config;
use sonify::services::{ParameterMapper, ReasoningProvider};
use sonify::sources::{CoinGeckoClient, MusicRenderClient, OpenAiReasoningClient};
use sonify::{api, AppState};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sonify=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("Starting Sonify server on {}:{}", config.host, config.port);

    // Price history provider with a TTL cache
    let history_client = Arc::new(CoinGeckoClient::new(
        config.coingecko_api_key.clone(),
        Duration::from_secs(config.history_cache_ttl_secs),
    ));

    // Optional reasoning provider; without it the mapper always takes the
    // deterministic path
    let reasoning: Option<Arc<dyn ReasoningProvider>> =
        config.openai_api_key.as_ref().map(|api_key| {
            info!("OpenAI API key found, enabling reasoning provider");
            Arc::new(OpenAiReasoningClient::new(
                api_key.clone(),
                config.openai_model.clone(),
            )) as Arc<dyn ReasoningProvider>
        });
    if reasoning.is_none() {
        info!("No OPENAI_API_KEY set, parameter mapping is deterministic only");
    }

    let mapper = Arc::new(ParameterMapper::new(
        reasoning,
        Duration::from_millis(config.reasoning_timeout_ms),
    ));

    // Optional audio renderer
    let render_client = config.elevenlabs_api_key.as_ref().map(|api_key| {
        info!("ElevenLabs API key found, enabling audio rendering");
        Arc::new(MusicRenderClient::new(
            api_key.clone(),
            config.audio_output_dir.clone(),
        ))
    });

    let state = AppState {
        config: config.clone(),
        history_client,
        mapper,
        render_client,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Sonify listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
