use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Path value that selects a private in-memory database
pub const IN_MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/habits.db"

[server]
host = "0.0.0.0"
port = 3000
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Current working directory (for development)
/// 3. Falls back to embedded default config
///
/// `HABITS_DB_PATH` and `HABITS_PORT` override whatever was loaded.
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    candidates.push(PathBuf::from("config.toml"));

    let config = match candidates.iter().find(|p| p.exists()) {
        Some(config_path) => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(config_path)?;
            toml::from_str(&contents)?
        }
        None => {
            tracing::warn!("config.toml not found, using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
    };

    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply `HABITS_*` overrides; `lookup` abstracts the environment
pub fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    if let Some(path) = lookup("HABITS_DB_PATH") {
        config.database.path = path;
    }
    if let Some(port) = lookup("HABITS_PORT") {
        config.server.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("HABITS_PORT '{}' is not a valid port: {}", port, e))?;
    }
    Ok(config)
}

/// Get the database file path from configuration.
/// Relative paths resolve against the executable directory.
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() || db_path_str == IN_MEMORY_DATABASE {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(db_path_str)
}
