use clap::Parser;
use habitz::config::ConfigOverrides;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "habitz", bin_name = "habitz", version = get_version())]
#[command(about = "Habit tracker server: REST API and web UI over a JSON file", long_about = None)]
pub struct Cli {
    /// JSON config file (bind, db_path, public_dir, log_json)
    #[arg(short, long, env = "HABITZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:3000
    #[arg(short, long, env = "HABITZ_BIND")]
    pub bind: Option<String>,

    /// Path of the habit document
    #[arg(long, env = "HABITZ_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Directory with the static web UI
    #[arg(long, env = "HABITZ_PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, env = "HABITZ_LOG_JSON")]
    pub log_json: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind: self.bind.clone(),
            db_path: self.db_path.clone(),
            public_dir: self.public_dir.clone(),
            // A bare flag can only turn JSON logging on
            log_json: self.log_json.then_some(true),
        }
    }
}
