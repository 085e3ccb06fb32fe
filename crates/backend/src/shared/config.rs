use chrono::NaiveDateTime;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub n_records: i64,
    pub seed: u64,
    /// End of the trailing order window; startup time when omitted
    pub window_end: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Directory for `backend.log`
    pub dir: String,
    /// Default `EnvFilter` directive, `RUST_LOG` takes precedence
    pub filter: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[dataset]
n_records = 1000
seed = 42

[logging]
dir = "target/logs"
filter = "info"
"#;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for candidate in config_candidates() {
        if candidate.exists() {
            tracing::info!("Loading config from: {}", candidate.display());
            return load_config_from(&candidate);
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

pub fn default_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join(CONFIG_FILE_NAME));
        }
    }
    candidates.push(PathBuf::from(CONFIG_FILE_NAME));
    candidates
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }
}
