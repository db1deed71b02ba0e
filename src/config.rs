use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Impact Estimator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "impact_estimator=info,tower_http=warn"
}

/// Get the application data directory.
/// Falls back to the working directory when the platform has none.
pub fn app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("impact-estimator"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default location of the persisted request log.
pub fn default_log_file() -> PathBuf {
    app_data_dir().join("logs.json")
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_file: PathBuf,
    /// Reject zero horizons and negative counts before estimating.
    pub validate_input: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            log_file: default_log_file(),
            validate_input: true,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `ESTIMATOR_LOG_FILE` and `ESTIMATOR_VALIDATE_INPUT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = parse_or(&lookup, "HOST", defaults.host);
        let port = parse_or(&lookup, "PORT", defaults.port);
        let log_file = lookup("ESTIMATOR_LOG_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);
        let validate_input = parse_or(&lookup, "ESTIMATOR_VALIDATE_INPUT", defaults.validate_input);

        Self {
            host,
            port,
            log_file,
            validate_input,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "Ignoring unparsable configuration value");
                default
            }
        },
        None => default,
    }
}
