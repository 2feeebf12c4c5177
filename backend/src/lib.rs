//! Backend for recording classroom attendance.
//!
//! Requests carry an optional session cookie. The session validator asks the
//! external authentication service who the caller is, the attendance gate
//! decides whether the request may proceed, and the document store holds the
//! resulting records.

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use api::{
    attendance::routes::attendance_router, course::routes::course_router,
    vote::routes::vote_router,
};
use auth::auth_router;
use config::Config;
use state::{AppState, SharedState};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Assembles every route with its layers over `state`.
pub fn app(state: SharedState) -> Router {
    let cors = middleware::cors_layer(&state.config);

    Router::new()
        .route("/", get(root_handler))
        .nest("/api/auth", auth_router())
        .nest("/attendance", attendance_router())
        .nest("/courses", course_router())
        .nest("/votes", vote_router())
        .layer(cors)
        .layer(middleware::trace_layer())
        .with_state(state)
}

pub async fn start_server() -> Result<(), BoxError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let config = Config::from_env()?;
    info!(
        auth = %config.auth_base_url,
        read_policy = %config.read_policy,
        "Configuration loaded"
    );

    let address = format!("0.0.0.0:{}", config.port);
    let state = AppState::from_config(config)?;

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn root_handler() -> &'static str {
    "Attendance service is running"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!("Failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
