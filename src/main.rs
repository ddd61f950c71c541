mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router::router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    let keys = startup::setup_token_keys(&config);
    let cors = startup::setup_cors(&config)?;

    let app = router()
        .with_state(AppState::new(db, keys))
        .layer(cors);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
