pub mod api;
pub mod config;
pub mod estimator;
pub mod request_log;

use tracing_subscriber::EnvFilter;

pub use estimator::{estimate, Estimate, InputData};

/// Start the estimator HTTP service and block until Ctrl-C.
pub fn run() -> Result<(), api::ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server_config = config::ServerConfig::from_env();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(api::server::serve(server_config))
}
