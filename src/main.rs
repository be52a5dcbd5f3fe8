use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use dental_ai_service::config::Config;
use dental_ai_service::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("dental AI service listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
