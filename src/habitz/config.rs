use crate::error::{HabitzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_DB_PATH: &str = "db.json";
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Server configuration, optionally read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// The habit document
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Directory holding the static web UI
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PUBLIC_DIR)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            db_path: default_db_path(),
            public_dir: default_public_dir(),
            log_json: false,
        }
    }
}

/// Values given on the command line or through the environment.
/// Anything set here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind: Option<String>,
    pub db_path: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
    pub log_json: Option<bool>,
}

impl ServerConfig {
    /// Load config from a JSON file. The file must exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HabitzError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| HabitzError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Defaults, then the optional file, then overrides.
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let config = base.apply(overrides);
        config.bind_addr()?;
        Ok(config)
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(bind) = overrides.bind {
            self.bind = bind;
        }
        if let Some(db_path) = overrides.db_path {
            self.db_path = db_path;
        }
        if let Some(public_dir) = overrides.public_dir {
            self.public_dir = public_dir;
        }
        if let Some(log_json) = overrides.log_json {
            self.log_json = log_json;
        }
        self
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| HabitzError::Config(format!("invalid bind address {}: {}", self.bind, e)))
    }
}
