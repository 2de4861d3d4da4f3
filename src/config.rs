use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta";

const TOKEN_ENV: &str = "HF_TOKEN";
const API_URL_ENV: &str = "ZEPHYR_CHAT_API_URL";

/// Startup configuration. Built once in `main`, before any window opens.
#[derive(Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub hf_token: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_url", &self.api_url)
            .field("hf_token", &"<redacted>")
            .finish()
    }
}

/// On-disk secret store, `<config_dir>/zephyr_chat/secrets.json`.
#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    hf_token: Option<String>,
    api_url: Option<String>,
}

pub fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("zephyr_chat");
    path
}

fn secrets_path() -> PathBuf {
    config_dir().join("secrets.json")
}

impl AppConfig {
    /// Environment first, then the secrets file. Fails when no token is found.
    pub fn load() -> Result<Self> {
        let path = secrets_path();
        let secrets = read_secrets(&path)?;

        let config = Self::resolve(
            env::var(TOKEN_ENV).ok(),
            env::var(API_URL_ENV).ok(),
            secrets,
        )
        .with_context(|| {
            format!(
                "set {} or add \"hf_token\" to {}",
                TOKEN_ENV,
                path.display()
            )
        })?;

        log::info!("[config] Using inference endpoint {}", config.api_url);
        Ok(config)
    }

    fn resolve(
        env_token: Option<String>,
        env_url: Option<String>,
        secrets: SecretsFile,
    ) -> Result<Self> {
        let hf_token = non_blank(env_token)
            .or_else(|| non_blank(secrets.hf_token))
            .ok_or_else(|| anyhow!("missing Hugging Face API token"))?;

        let api_url = non_blank(env_url)
            .or_else(|| non_blank(secrets.api_url))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self { api_url, hf_token })
    }
}

fn read_secrets(path: &Path) -> Result<SecretsFile> {
    if !path.exists() {
        return Ok(SecretsFile::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
