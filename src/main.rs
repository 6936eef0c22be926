use std::net::SocketAddr;
use std::sync::Arc;

use bookrelay_api::api::router;
use bookrelay_api::config::AppConfig;
use bookrelay_api::domain::clients::DynBookClient;
use bookrelay_api::infrastructure::clients::UpstreamBookClient;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    tracing::info!(
        upstream = %config.upstream.base_url,
        prefix = %config.route_prefix,
        "Forwarding book requests upstream"
    );

    let client: DynBookClient = Arc::new(UpstreamBookClient::new(config.upstream.clone()));

    // Build router
    let app = router(&config.route_prefix, client);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid server address");
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
