//! Serendib Server - Travel Content Marketing Site
//!
//! A Rust REST API server for the Serendib travel site.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use serendib_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

/// Multipart bodies may carry a 10MB attachment plus form fields; the
/// framework limit sits above that so the upload service is the component
/// that rejects oversized files with a descriptive error.
const BODY_LIMIT: usize = 12 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("serendib_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Serendib Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone(), config.uploads.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let uploads_root = state.services.uploads.root().to_path_buf();

    // API routes
    let api_routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Blogs
        .route("/blogs", get(api::blogs::list_blogs))
        .route("/blogs", post(api::blogs::create_blog))
        .route("/blogs/:id", get(api::blogs::get_blog))
        .route("/blogs/:id", put(api::blogs::update_blog))
        .route("/blogs/:id", delete(api::blogs::delete_blog))
        // Destinations
        .route("/destinations", get(api::destinations::list_destinations))
        .route("/destinations", post(api::destinations::create_destination))
        .route("/destinations/:id", get(api::destinations::get_destination))
        .route("/destinations/:id", put(api::destinations::update_destination))
        .route("/destinations/:id", delete(api::destinations::delete_destination))
        // Accommodations
        .route("/accommodations", get(api::accommodations::list_accommodations))
        .route("/accommodations", post(api::accommodations::create_accommodation))
        .route("/accommodations/:id", get(api::accommodations::get_accommodation))
        .route("/accommodations/:id", put(api::accommodations::update_accommodation))
        .route("/accommodations/:id", delete(api::accommodations::delete_accommodation))
        // Vehicles
        .route("/vehicles", get(api::vehicles::list_vehicles))
        .route("/vehicles", post(api::vehicles::create_vehicle))
        .route("/vehicles/:id", get(api::vehicles::get_vehicle))
        .route("/vehicles/:id", put(api::vehicles::update_vehicle))
        .route("/vehicles/:id", delete(api::vehicles::delete_vehicle))
        // Itineraries
        .route("/itineraries", get(api::itineraries::list_itineraries))
        .route("/itineraries", post(api::itineraries::create_itinerary))
        .route("/itineraries/:id", get(api::itineraries::get_itinerary))
        .route("/itineraries/:id", put(api::itineraries::update_itinerary))
        .route("/itineraries/:id", delete(api::itineraries::delete_itinerary))
        // Investments
        .route("/investments", get(api::investments::list_investments))
        .route("/investments", post(api::investments::create_investment))
        .route("/investments/:id", get(api::investments::get_investment))
        .route("/investments/:id", put(api::investments::update_investment))
        .route("/investments/:id", delete(api::investments::delete_investment))
        // Riders
        .route("/riders", get(api::riders::list_riders))
        .route("/riders", post(api::riders::create_rider))
        .route("/riders/:id", get(api::riders::get_rider))
        .route("/riders/:id", put(api::riders::update_rider))
        .route("/riders/:id", delete(api::riders::delete_rider))
        // Guides
        .route("/guides", get(api::guides::list_guides))
        .route("/guides", post(api::guides::create_guide))
        .route("/guides/:id", get(api::guides::get_guide))
        .route("/guides/:id", put(api::guides::update_guide))
        .route("/guides/:id", delete(api::guides::delete_guide))
        // Uploads
        .route("/upload/image", post(api::uploads::upload_image))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state.clone());

    // Uploaded files: images are plain static files, documents go through a
    // handler that forces download
    let uploads_routes = Router::new()
        .nest_service("/uploads/images", ServeDir::new(uploads_root.join("images")))
        .route("/uploads/documents/:filename", get(api::uploads::download_document))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api_routes)
        .merge(uploads_routes)
        .merge(openapi)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
