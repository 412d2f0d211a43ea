use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;
use service::books::repo::seaorm::SeaOrmBookRepository;
use service::books::BookService;
use service::users::repo::seaorm::SeaOrmUserRepository;
use service::users::UserService;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve host/port: env vars win, then the config file, then defaults
fn bind_addr(server: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| server.host.clone());
    let port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(server.port);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate().context("load configuration")?;

    // DB connection; the schema is expected to exist already
    let db = models::db::connect_with(&cfg.database)
        .await
        .context("connect to database")?;
    info!("database connection established");

    let state = ServerState {
        users: Arc::new(UserService::new(Arc::new(SeaOrmUserRepository { db: db.clone() }))),
        books: Arc::new(BookService::new(Arc::new(SeaOrmBookRepository { db }))),
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting resource service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
