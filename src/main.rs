use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::info;

use lifeplants_chat::config::Config;
use lifeplants_chat::routes;
use lifeplants_chat::services::advisor::Advisor;
use lifeplants_chat::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(Advisor::from_config(&config)));

    let cors = CorsLayer::very_permissive();
    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "plant chat service listening");
    axum::serve(listener, app).await?;
    Ok(())
}
