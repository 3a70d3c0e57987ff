use anyhow::Result;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::info;

use advisor_api_server::config::Settings;
use advisor_api_server::handlers;
use advisor_api_server::services::affiliate::{AffiliateLinkBuilder, ReplyPostProcessor};
use advisor_api_server::services::conversation::ConversationStore;
use advisor_api_server::services::{ChatService, LlmService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,advisor_api_server=debug".to_string()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .init();

    info!("🚀 Starting AI Product Advisor API...");

    // Load configuration (fails fast on missing provider credentials)
    let settings = Settings::load()?;
    info!("✅ Configuration loaded");

    // Initialize services
    let store = Arc::new(ConversationStore::new());
    let llm_service = Arc::new(LlmService::new(settings.llm.clone()));
    let link_builder = AffiliateLinkBuilder::new(settings.affiliate.clone());
    let post_processor = ReplyPostProcessor::with_default_extractors(link_builder);

    let chat_service = Arc::new(ChatService::new(
        store,
        llm_service,
        post_processor,
        settings.conversation.clone(),
        settings.prompts.clone(),
    ));

    // Build router
    let app = build_router(chat_service);

    // Server address
    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    info!("🎯 Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(chat_service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/", get(handlers::health::health_check))
        .route("/chat", post(handlers::chat::chat_handler))
        .route("/clear", post(handlers::chat::clear_handler))
        .layer(Extension(chat_service))
        // CORS (frontend is served from another origin)
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        // Nothing escapes as a raw fault
        .layer(CatchPanicLayer::new())
}
