use geoview_server::config::Config;
use geoview_server::shapes::{PgShapeService, ShapeAppState, shape_routes};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoview=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = Config::from_env();
    info!(
        "Loaded configuration: host={}, port={}, db={}@{}:{}/{}",
        config.host,
        config.port,
        config.database.user,
        config.database.host,
        config.database.port,
        config.database.name
    );

    // Connect the shared pool lazily; the probe below reports actual reachability
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&config.database.connection_url())?;

    let shape_service = PgShapeService::new(pool);
    shape_service.probe().await;

    let state = ShapeAppState {
        shape_service: Arc::new(shape_service),
    };

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = shape_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start the server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("GeoView server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
