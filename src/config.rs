use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Error, Result};

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Default YouTube Data API v3 endpoint
pub const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default listen address for the web server
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Get the base data directory (~/.yt-web/)
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        std::env::var("YT_WEB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".yt-web")
            })
    })
}

/// Get the database path
pub fn database_path() -> PathBuf {
    data_dir().join("comments.db")
}

/// Get the .env file path
pub fn env_file_path() -> PathBuf {
    data_dir().join(".env")
}

/// Load environment variables from the data directory's .env file
pub fn load_env() {
    let env_path = env_file_path();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    } else {
        // Try current directory as fallback
        let _ = dotenvy::dotenv();
    }
}

/// Get the YouTube Data API key
pub fn youtube_api_key() -> Option<String> {
    std::env::var("YOUTUBE_API_KEY").ok()
}

/// Get the YouTube API base URL, honouring `YOUTUBE_API_BASE_URL`
pub fn youtube_base_url() -> String {
    std::env::var("YOUTUBE_API_BASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| YOUTUBE_API_BASE_URL.to_string())
}

/// Reject a missing or blank API key
pub fn validate_api_key(key: Option<String>) -> Result<String> {
    key.filter(|key| !key.trim().is_empty())
        .ok_or(Error::ApiKeyMissing)
}

/// Validate that required configuration is present, returning the API key
pub fn validate_config() -> Result<String> {
    validate_api_key(youtube_api_key())
}

/// Create the parent directory of `path` if it doesn't exist
pub fn ensure_directories(path: &std::path::Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            Ok(())
        }
        Some(_) => Ok(()),
        None => Err(Error::Config(format!(
            "Invalid database path: {}",
            path.display()
        ))),
    }
}
