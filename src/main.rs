mod config;
mod handlebars;
mod routes;
mod state;
mod ticket;

pub use config::Config;
pub use state::State;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use color_eyre::eyre::Context;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    tracing::info!("starting ticketbooth");

    let config = Config::from_env().context("failed to read config")?;
    let port = config.port;

    let state = Arc::new(State::new(config).context("failed to create state")?);

    let app = app(state);

    let address = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::debug!("listening on {}", address);

    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await
        .context("server exited with an error")?;

    Ok(())
}

fn app(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/book", post(routes::book))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
