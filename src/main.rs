#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "hms host stopped");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), HostError> {
    let config = config::HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "hms listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
