use dotenvy::dotenv;
use gradebook::logging::init_tracing;
use gradebook::router::init_router;
use gradebook::state::init_app_state;
use gradebook_config::ServerConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let state = init_app_state().await?;
    let app = init_router(state);

    let server = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server.addr()).await?;

    info!(addr = %server.addr(), "Server listening");
    info!("Scalar UI available at http://{}/scalar", server.addr());

    axum::serve(listener, app).await?;
    Ok(())
}
