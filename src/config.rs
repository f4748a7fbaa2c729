use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.1:8b";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1000;

pub struct Config {
    pub api_endpoint: String,
    pub model: String,
    pub request_timeout: u64,
    pub typing_delay_ms: u64,
    pub verbose: bool,
    pub corpus_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub request_timeout: Option<u64>,
    #[serde(default)]
    pub typing_delay_ms: Option<u64>,
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub corpus_path: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration with precedence CLI args > env vars > config
    /// file > defaults.
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = FileConfig::load().unwrap_or_default();

        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("TAMLY_API_ENDPOINT").ok())
            .or(file_config.api_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let api_endpoint = normalize_endpoint(&api_endpoint);

        let model = args
            .model
            .clone()
            .or_else(|| env::var("TAMLY_MODEL").ok())
            .or(file_config.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let request_timeout = env::var("TAMLY_REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(file_config.request_timeout)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let typing_delay_ms = env::var("TAMLY_TYPING_DELAY_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(file_config.typing_delay_ms)
            .unwrap_or(DEFAULT_TYPING_DELAY_MS);

        let verbose = args.verbose
            || env::var("TAMLY_VERBOSE")
                .ok()
                .map(|v| v == "true")
                .or(file_config.verbose)
                .unwrap_or(false);

        let corpus_path = args
            .corpus
            .clone()
            .or_else(|| env::var("TAMLY_CORPUS").ok().map(PathBuf::from))
            .or(file_config.corpus_path);

        Ok(Config {
            api_endpoint,
            model,
            request_timeout,
            typing_delay_ms,
            verbose,
            corpus_path,
        })
    }
}

/// Append the chat route when the configured endpoint is a bare base URL.
fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with("/api/chat") {
        endpoint.to_string()
    } else {
        format!("{}/api/chat", endpoint.trim_end_matches('/'))
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                let config: FileConfig = serde_yaml::from_str(&contents).with_context(|| {
                    format!("Failed to parse YAML config file: {}", path.display())
                })?;
                return Ok(config);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Local override first, then the user's global config.
        paths.push(PathBuf::from(".tamly.yaml"));
        paths.push(PathBuf::from(".tamly.yml"));

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("tamly");
            paths.push(config_dir.join("tamly.yaml"));
            paths.push(config_dir.join("tamly.yml"));
        }

        paths
    }
}
