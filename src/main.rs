use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leetcode_user_api::config::Config;
use leetcode_user_api::handlers::{self, AppState};
use leetcode_user_api::services::LeetCodeService;

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, builds the LeetCode client and
/// HTTP routes with middleware (CORS, rate limiting, request size limit),
/// then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leetcode_user_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize LeetCode GraphQL client
    let leetcode = LeetCodeService::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize LeetCode client: {}", e))?;
    tracing::info!("LeetCode client initialized: {}", config.leetcode_base_url);

    let app_state = Arc::new(AppState { leetcode });

    // Configure rate limiter: 10 requests/second per IP, burst of 20.
    // A single search fans out up to 200 upstream calls, so inbound volume
    // needs a ceiling.
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Build protected routes with security layers
    let protected_routes = Router::new()
        .route("/api/leetcode/search", get(handlers::search_users))
        .route(
            "/api/leetcode/profile/:username",
            get(handlers::get_user_profile),
        )
        .layer(
            ServiceBuilder::new()
                // Request size limit: 1MB max payload (both endpoints are GET)
                .layer(RequestBodyLimitLayer::new(1024 * 1024))
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with health check bypassing rate limiting
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
