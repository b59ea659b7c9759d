#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let state = state::AppState::new(config.service_name.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, service = %config.service_name, "meetup server listening");
    tracing::info!("registrations are kept in memory only");
    axum::serve(listener, app).await?;
    Ok(())
}
