//! Main entry point for the attendance backend.
//!
//! Initializes logging, loads configuration from the environment and serves
//! the API until a shutdown signal arrives.

#[tokio::main]
async fn main() -> Result<(), backend::BoxError> {
    backend::start_server().await
}
